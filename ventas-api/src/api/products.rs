//! Product API handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared::error::{AppError, ErrorCode};
use shared::models::product::{Product, ProductCreate};
use shared::response::ApiResponse;

use crate::db::products;
use crate::error::{Violation, violation};
use crate::state::AppState;

use super::{ApiResult, created, parse_id, validated};

/// GET /productos
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let rows = products::list(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Product list query failed");
        AppError::internal("Error al obtener los productos.")
    })?;
    let mensaje = if rows.is_empty() {
        "No se encontraron productos."
    } else {
        "Productos obtenidos correctamente."
    };
    Ok(Json(ApiResponse::ok(mensaje, rows)))
}

/// GET /producto/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    let id = parse_id(&id)?;
    let product = products::find(&state.pool, id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "Product lookup failed");
            AppError::internal("Error al obtener el producto.")
        })?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;
    Ok(Json(ApiResponse::ok("Producto obtenido correctamente.", product)))
}

/// POST /registrarProducto
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    let payload = validated(payload)?;
    let product = products::create(&state.pool, payload)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::conflict("El producto ya existe."),
            _ => {
                tracing::error!(error = %e, "Product insert failed");
                AppError::internal("Error al registrar el producto.")
            }
        })?;

    tracing::info!(id = product.id_producto, "Product registered");
    Ok(created("Producto registrado correctamente.", product))
}
