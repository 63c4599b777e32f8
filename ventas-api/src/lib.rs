//! ventas-api: reporting and catalog API over the sales warehouse

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
