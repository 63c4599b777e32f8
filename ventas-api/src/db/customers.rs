//! Customer database operations

use shared::models::customer::{Customer, CustomerCreate};
use sqlx::MySqlPool;

const COLUMNS: &str = "id_cliente, primer_nombre, segundo_nombre, primer_apellido";

pub async fn list(pool: &MySqlPool) -> Result<Vec<Customer>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM Dim_Clientes ORDER BY id_cliente");
    sqlx::query_as::<_, Customer>(&sql).fetch_all(pool).await
}

pub async fn find(pool: &MySqlPool, id: i64) -> Result<Option<Customer>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM Dim_Clientes WHERE id_cliente = ?");
    sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &MySqlPool, data: CustomerCreate) -> Result<Customer, sqlx::Error> {
    let mut tx = pool.begin().await?;

    // Normalize first so the stored row matches the one returned
    let customer = data.into_customer(0);
    let result = sqlx::query(
        "INSERT INTO Dim_Clientes (primer_nombre, segundo_nombre, primer_apellido) VALUES (?, ?, ?)",
    )
    .bind(&customer.primer_nombre)
    .bind(&customer.segundo_nombre)
    .bind(&customer.primer_apellido)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Customer {
        id_cliente: result.last_insert_id() as i64,
        ..customer
    })
}
