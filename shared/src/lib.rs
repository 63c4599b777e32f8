//! Shared types for the sales warehouse API
//!
//! Entity models, request payloads, the response envelope and error types.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use response::ApiResponse;
