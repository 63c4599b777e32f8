//! Data models
//!
//! Entity rows of the warehouse plus the create payloads accepted by the API.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Column and JSON field names keep the warehouse's Spanish names.

pub mod category;
pub mod customer;
pub mod product;
pub mod sale;

// Re-exports
pub use category::*;
pub use customer::*;
pub use product::*;
pub use sale::*;

use validator::ValidationError;

/// Rejects strings made only of whitespace
pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
