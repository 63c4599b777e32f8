//! Error codes for the sales warehouse API
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors (categories, customers, products)
//! - 7xxx: Sale errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes never reach the wire (response bodies carry only `mensaje`), they
/// drive the HTTP status and the default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 6xxx: Catalog ====================
    /// Category not found
    CategoryNotFound = 6001,
    /// Category name already registered
    CategoryNameExists = 6002,
    /// Customer not found
    CustomerNotFound = 6101,
    /// Product not found
    ProductNotFound = 6201,

    // ==================== 7xxx: Sales ====================
    /// Sale not found
    SaleNotFound = 7001,
    /// Sale references an unknown customer, employee or product
    SaleInvalidReference = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Route does not exist
    RouteNotFound = 9003,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default (Spanish) message shown to clients
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Los datos enviados no son válidos.",
            Self::AlreadyExists => "El recurso ya existe.",
            Self::InvalidRequest => "Solicitud inválida.",
            Self::CategoryNotFound => "Categoría no encontrada.",
            Self::CategoryNameExists => "La categoría ya existe.",
            Self::CustomerNotFound => "Cliente no encontrado.",
            Self::ProductNotFound => "Producto no encontrado.",
            Self::SaleNotFound => "Venta no encontrada.",
            Self::SaleInvalidReference => {
                "La venta hace referencia a un cliente, empleado o producto inexistente."
            }
            Self::InternalError => "Ha ocurrido un error interno.",
            Self::RouteNotFound => "Ruta no encontrada.",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown `u16` into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Ok(match value {
            2 => Self::ValidationFailed,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6001 => Self::CategoryNotFound,
            6002 => Self::CategoryNameExists,
            6101 => Self::CustomerNotFound,
            6201 => Self::ProductNotFound,
            7001 => Self::SaleNotFound,
            7002 => Self::SaleInvalidReference,
            9001 => Self::InternalError,
            9003 => Self::RouteNotFound,
            other => return Err(InvalidErrorCode(other)),
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
