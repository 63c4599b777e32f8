//! Sale database operations
//!
//! A sale is written as one `Ventas` header plus one `Hecho_Ventas` fact row
//! per line. The time dimension row for the sale date is created on demand.

use chrono::{Datelike, NaiveDate, Weekday};
use shared::error::{AppError, ErrorCode};
use rust_decimal::Decimal;
use shared::models::sale::{Sale, SaleCreate, SaleDeleted, SaleLineDetail, max_amount};
use sqlx::MySqlPool;

use crate::error::{ServiceError, ServiceResult, Violation, violation};

/// Spanish weekday label stored in `Dim_Tiempo.dia_semana`
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

// ── Queries ──

pub async fn list(pool: &MySqlPool) -> Result<Vec<Sale>, sqlx::Error> {
    sqlx::query_as::<_, Sale>(
        "SELECT id_venta, id_cliente, id_empleado, fecha, total FROM Ventas ORDER BY id_venta",
    )
    .fetch_all(pool)
    .await
}

/// Every line item joined with customer, employee and product names
pub async fn list_with_details(pool: &MySqlPool) -> Result<Vec<SaleLineDetail>, sqlx::Error> {
    sqlx::query_as::<_, SaleLineDetail>(
        r#"
        SELECT hv.id_venta, hv.id_detalle, hv.fecha,
               c.primer_nombre AS cliente_nombre, c.primer_apellido AS cliente_apellido,
               e.primer_nombre AS empleado_nombre, e.primer_apellido AS empleado_apellido,
               p.nombre_producto, hv.cantidad, hv.total_linea
        FROM Hecho_Ventas hv
        JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente
        JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado
        JOIN Dim_Productos p ON hv.id_producto = p.id_producto
        ORDER BY hv.id_venta, hv.id_detalle
        "#,
    )
    .fetch_all(pool)
    .await
}

// ── Writes ──

/// Register a sale in a single transaction. Unknown customer, employee or
/// product ids surface as `SaleInvalidReference`. A header total outside
/// the column range is a validation error.
pub async fn create(pool: &MySqlPool, data: &SaleCreate) -> ServiceResult<Sale> {
    let total = data
        .total()
        .filter(|total| *total <= max_amount())
        .ok_or_else(|| AppError::validation(ErrorCode::ValidationFailed.message()))?;
    insert_sale(pool, data, total).await.map_err(|e| match violation(&e) {
        Some(Violation::ForeignKey) => AppError::new(ErrorCode::SaleInvalidReference).into(),
        _ => ServiceError::Db(e),
    })
}

async fn insert_sale(
    pool: &MySqlPool,
    data: &SaleCreate,
    total: Decimal,
) -> Result<Sale, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT IGNORE INTO Dim_Tiempo (fecha, año, mes, dia_semana) VALUES (?, ?, ?, ?)")
        .bind(data.fecha)
        .bind(data.fecha.year())
        .bind(data.fecha.month() as i32)
        .bind(weekday_label(data.fecha))
        .execute(&mut *tx)
        .await?;

    let header = sqlx::query(
        "INSERT INTO Ventas (id_cliente, id_empleado, fecha, total) VALUES (?, ?, ?, ?)",
    )
    .bind(data.id_cliente)
    .bind(data.id_empleado)
    .bind(data.fecha)
    .bind(total)
    .execute(&mut *tx)
    .await?;
    let id_venta = header.last_insert_id() as i64;

    for line in &data.detalles {
        sqlx::query(
            r#"
            INSERT INTO Hecho_Ventas
                (id_venta, id_producto, id_cliente, id_empleado, fecha, cantidad, total_linea)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id_venta)
        .bind(line.id_producto)
        .bind(data.id_cliente)
        .bind(data.id_empleado)
        .bind(data.fecha)
        .bind(line.cantidad)
        .bind(line.total_linea)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(id_venta, lines = data.detalles.len(), %total, "Sale registered");
    Ok(Sale {
        id_venta,
        id_cliente: data.id_cliente,
        id_empleado: data.id_empleado,
        fecha: data.fecha,
        total,
    })
}

/// Delete a sale and its line items atomically
pub async fn delete(pool: &MySqlPool, id_venta: i64) -> ServiceResult<SaleDeleted> {
    let mut tx = pool.begin().await?;

    let exists: Option<(i64,)> =
        sqlx::query_as("SELECT id_venta FROM Ventas WHERE id_venta = ? FOR UPDATE")
            .bind(id_venta)
            .fetch_optional(&mut *tx)
            .await?;
    if exists.is_none() {
        tx.rollback().await?;
        return Err(AppError::new(ErrorCode::SaleNotFound).into());
    }

    let lines = sqlx::query("DELETE FROM Hecho_Ventas WHERE id_venta = ?")
        .bind(id_venta)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM Ventas WHERE id_venta = ?")
        .bind(id_venta)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(id_venta, lines = lines.rows_affected(), "Sale deleted");
    Ok(SaleDeleted {
        id_venta,
        lineas_eliminadas: lines.rows_affected(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_labels() {
        // 2024-03-11 is a Monday
        let labels: Vec<_> = (11..=17).map(|d| weekday_label(date(2024, 3, d))).collect();
        assert_eq!(
            labels,
            vec!["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"]
        );
    }

    #[test]
    fn test_weekday_label_new_year() {
        assert_eq!(weekday_label(date(2023, 1, 1)), "Domingo");
    }
}
