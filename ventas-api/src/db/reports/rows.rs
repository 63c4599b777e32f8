//! Row types returned by the reports
//!
//! Field names are the JSON keys clients see. Sums, averages and ratios are
//! MySQL `DECIMAL` and serialize as strings; counts and stock as integers.

use rust_decimal::Decimal;
use serde::Serialize;

/// Given/middle/family name of a customer or employee
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct PersonName {
    pub primer_nombre: String,
    pub segundo_nombre: Option<String>,
    pub primer_apellido: String,
}

// ── Time ──

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DailySales {
    pub dia: String,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MonthlySales {
    pub mes: i32,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct YearlySales {
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WeekdaySales {
    pub dia_semana: String,
    pub total_ventas: Decimal,
}

// ── Employees ──

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeSales {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub empleado: PersonName,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeSaleCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub empleado: PersonName,
    pub cantidad_ventas: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeMonthlySales {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub empleado: PersonName,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeAverage {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub empleado: PersonName,
    pub promedio_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeMonthlyAverage {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub empleado: PersonName,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub promedio_ventas: Decimal,
}

// ── Customers ──

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerPurchases {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cliente: PersonName,
    pub total_compras: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerPurchaseCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cliente: PersonName,
    pub cantidad_compras: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerMonthlyPurchases {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cliente: PersonName,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub total_compras: Decimal,
}

/// Customer with more than one distinct sale
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FrequentCustomer {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cliente: PersonName,
    pub cantidad_compras: i64,
    pub total_compras: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FrequentCustomerMonthly {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cliente: PersonName,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub cantidad_compras: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerProductPurchases {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cliente: PersonName,
    pub nombre_producto: String,
    pub cantidad_comprada: Decimal,
    pub total_gastado: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerCategoryPurchases {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub cliente: PersonName,
    pub nombre_categoria: String,
    pub cantidad_comprada: Decimal,
    pub total_gastado: Decimal,
}

// ── Products & categories ──

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductQuantity {
    pub nombre_producto: String,
    pub cantidad_vendida: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductValue {
    pub nombre_producto: String,
    pub total_ventas: Decimal,
    pub cantidad_vendida: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductMonthlySales {
    pub nombre_producto: String,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub cantidad_vendida: Decimal,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategorySales {
    pub nombre_categoria: String,
    pub total_ventas: Decimal,
    pub cantidad_vendida: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryMonthlySales {
    pub nombre_categoria: String,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub total_ventas: Decimal,
    pub cantidad_vendida: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryWeekdaySales {
    pub nombre_categoria: String,
    pub dia_semana: String,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LowStockProduct {
    pub nombre_producto: String,
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryStock {
    pub nombre_categoria: String,
    pub stock_total: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductRotation {
    pub nombre_producto: String,
    pub stock_inicial: i32,
    pub total_vendido: Decimal,
    pub tasa_rotacion: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryRotation {
    pub nombre_categoria: String,
    pub stock_total: Decimal,
    pub total_vendido: Decimal,
    pub tasa_rotacion: Decimal,
}

// ── Cross dimensions ──

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerEmployeeMonthlySales {
    pub cliente_nombre: String,
    pub cliente_apellido: String,
    pub empleado_nombre: String,
    pub empleado_apellido: String,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryEmployeeMonthlySales {
    pub nombre_categoria: String,
    pub empleado_nombre: String,
    pub empleado_apellido: String,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub total_ventas: Decimal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerCategoryMonthlySales {
    pub cliente_nombre: String,
    pub cliente_apellido: String,
    pub nombre_categoria: String,
    #[sqlx(rename = "año")]
    #[serde(rename = "año")]
    pub anio: i32,
    pub mes: i32,
    pub total_ventas: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_person_name_is_flattened() {
        let row = EmployeeMonthlySales {
            empleado: PersonName {
                primer_nombre: "Luis".into(),
                segundo_nombre: None,
                primer_apellido: "Gómez".into(),
            },
            anio: 2023,
            mes: 4,
            total_ventas: Decimal::from_str("120.50").unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            serde_json::json!({
                "primer_nombre": "Luis",
                "segundo_nombre": null,
                "primer_apellido": "Gómez",
                "año": 2023,
                "mes": 4,
                "total_ventas": "120.50"
            })
        );
    }
}
