//! Sale Model
//!
//! A sale is a header row (`Ventas`) plus one fact row per line item
//! (`Hecho_Ventas`).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Sale header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Sale {
    pub id_venta: i64,
    pub id_cliente: i64,
    pub id_empleado: i64,
    pub fecha: NaiveDate,
    pub total: Decimal,
}

/// One line item joined with the names of everything it references
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SaleLineDetail {
    pub id_venta: i64,
    pub id_detalle: i64,
    pub fecha: NaiveDate,
    pub cliente_nombre: String,
    pub cliente_apellido: String,
    pub empleado_nombre: String,
    pub empleado_apellido: String,
    pub nombre_producto: String,
    pub cantidad: i32,
    pub total_linea: Decimal,
}

/// Register sale payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaleCreate {
    pub id_cliente: i64,
    pub id_empleado: i64,
    pub fecha: NaiveDate,
    #[validate(length(min = 1), nested)]
    pub detalles: Vec<SaleLineCreate>,
}

/// One line of a sale being registered
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaleLineCreate {
    pub id_producto: i64,
    #[validate(range(min = 1))]
    pub cantidad: i32,
    #[validate(custom(function = "line_amount"))]
    pub total_linea: Decimal,
}

impl SaleCreate {
    /// Sum of all line totals, `None` on overflow
    pub fn total(&self) -> Option<Decimal> {
        self.detalles
            .iter()
            .try_fold(Decimal::ZERO, |acc, d| acc.checked_add(d.total_linea))
    }
}

/// Result of a sale deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDeleted {
    pub id_venta: i64,
    pub lineas_eliminadas: u64,
}

/// Largest amount a `DECIMAL(12,2)` column holds
pub fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

fn line_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative"));
    }
    if *value > max_amount() {
        return Err(ValidationError::new("too_large"));
    }
    if value.normalize().scale() > 2 {
        return Err(ValidationError::new("too_precise"));
    }
    Ok(())
}
