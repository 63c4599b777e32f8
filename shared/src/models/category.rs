//! Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Category {
    pub id_categoria: i64,
    pub nombre_categoria: String,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryCreate {
    #[validate(length(min = 1, max = 100), custom(function = "super::non_blank"))]
    pub nombre_categoria: String,
}

impl CategoryCreate {
    pub fn into_category(self, id_categoria: i64) -> Category {
        Category {
            id_categoria,
            nombre_categoria: self.nombre_categoria.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let payload = CategoryCreate {
            nombre_categoria: "   ".into(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_name_is_trimmed() {
        let payload = CategoryCreate {
            nombre_categoria: " Bebidas ".into(),
        };
        assert!(payload.validate().is_ok());
        assert_eq!(payload.into_category(7).nombre_categoria, "Bebidas");
    }
}
