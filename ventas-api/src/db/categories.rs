//! Category database operations

use shared::models::category::{Category, CategoryCreate};
use sqlx::MySqlPool;

pub async fn list(pool: &MySqlPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "SELECT id_categoria, nombre_categoria FROM Categorias ORDER BY id_categoria",
    )
    .fetch_all(pool)
    .await
}

pub async fn find(pool: &MySqlPool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "SELECT id_categoria, nombre_categoria FROM Categorias WHERE id_categoria = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create(pool: &MySqlPool, data: CategoryCreate) -> Result<Category, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let category = data.into_category(0);
    let result = sqlx::query("INSERT INTO Categorias (nombre_categoria) VALUES (?)")
        .bind(&category.nombre_categoria)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Category {
        id_categoria: result.last_insert_id() as i64,
        ..category
    })
}
