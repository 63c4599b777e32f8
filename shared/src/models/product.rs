//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product dimension row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id_producto: i64,
    pub nombre_producto: String,
    /// Category name (denormalized, used for grouping)
    pub nombre_categoria: String,
    /// Current on-hand quantity
    pub stock: i32,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 150), custom(function = "super::non_blank"))]
    pub nombre_producto: String,
    #[validate(length(min = 1, max = 100), custom(function = "super::non_blank"))]
    pub nombre_categoria: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i32,
}

impl ProductCreate {
    pub fn into_product(self, id_producto: i64) -> Product {
        Product {
            id_producto,
            nombre_producto: self.nombre_producto.trim().to_string(),
            nombre_categoria: self.nombre_categoria.trim().to_string(),
            stock: self.stock,
        }
    }
}
