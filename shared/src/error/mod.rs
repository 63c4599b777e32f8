//! Error handling for the sales warehouse API
//!
//! - [`ErrorCode`]: closed set of error codes, each mapped to an HTTP status
//! - [`AppError`]: code + client message + optional driver detail
//! - [`ErrorBody`]: the flat `{ mensaje, error? }` JSON body
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::SaleNotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::internal("Error al obtener las ventas.").with_detail("timeout");
//! assert_eq!(err.detail.as_deref(), Some("timeout"));
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, ErrorBody};
