//! Customer Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer dimension row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id_cliente: i64,
    pub primer_nombre: String,
    pub segundo_nombre: Option<String>,
    pub primer_apellido: String,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerCreate {
    #[validate(length(min = 1, max = 100), custom(function = "super::non_blank"))]
    pub primer_nombre: String,
    #[validate(length(max = 100))]
    pub segundo_nombre: Option<String>,
    #[validate(length(min = 1, max = 100), custom(function = "super::non_blank"))]
    pub primer_apellido: String,
}

impl CustomerCreate {
    pub fn into_customer(self, id_cliente: i64) -> Customer {
        Customer {
            id_cliente,
            primer_nombre: self.primer_nombre.trim().to_string(),
            // An empty middle name is stored as NULL
            segundo_nombre: self
                .segundo_nombre
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            primer_apellido: self.primer_apellido.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(segundo: Option<&str>) -> CustomerCreate {
        CustomerCreate {
            primer_nombre: "Ana".into(),
            segundo_nombre: segundo.map(Into::into),
            primer_apellido: "Pérez".into(),
        }
    }

    #[test]
    fn test_missing_middle_name_is_valid() {
        assert!(payload(None).validate().is_ok());
    }

    #[test]
    fn test_blank_middle_name_becomes_none() {
        let customer = payload(Some("  ")).into_customer(1);
        assert_eq!(customer.segundo_nombre, None);
    }

    #[test]
    fn test_blank_family_name_rejected() {
        let mut p = payload(None);
        p.primer_apellido = " ".into();
        assert!(p.validate().is_err());
    }
}
