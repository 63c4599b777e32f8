//! API Response types
//!
//! Every successful endpoint answers with the same envelope:
//! ```json
//! {
//!     "mensaje": "Estadísticas de ventas por mes obtenidas correctamente.",
//!     "data": [ ... ]
//! }
//! ```
//! Some "no rows" answers drop `data` entirely and carry only `mensaje`.

use serde::{Deserialize, Serialize};

/// Unified `{ mensaje, data }` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable message
    pub mensaje: String,
    /// Response data (absent for message-only answers)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope carrying data
    pub fn ok(mensaje: impl Into<String>, data: T) -> Self {
        Self {
            mensaje: mensaje.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope with only a message
    pub fn message(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
            data: None,
        }
    }
}
