//! Product database operations

use shared::models::product::{Product, ProductCreate};
use sqlx::MySqlPool;

const COLUMNS: &str = "id_producto, nombre_producto, nombre_categoria, stock";

pub async fn list(pool: &MySqlPool) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM Dim_Productos ORDER BY id_producto");
    sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await
}

pub async fn find(pool: &MySqlPool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM Dim_Productos WHERE id_producto = ?");
    sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &MySqlPool, data: ProductCreate) -> Result<Product, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let product = data.into_product(0);
    let result = sqlx::query(
        "INSERT INTO Dim_Productos (nombre_producto, nombre_categoria, stock) VALUES (?, ?, ?)",
    )
    .bind(&product.nombre_producto)
    .bind(&product.nombre_categoria)
    .bind(product.stock)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Product {
        id_producto: result.last_insert_id() as i64,
        ..product
    })
}
