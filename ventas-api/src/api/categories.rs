//! Category API handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared::error::{AppError, ErrorCode};
use shared::models::category::{Category, CategoryCreate};
use shared::response::ApiResponse;

use crate::db::categories;
use crate::error::{Violation, violation};
use crate::state::AppState;

use super::{ApiResult, created, parse_id, validated};

/// GET /categorias
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let rows = categories::list(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Category list query failed");
        AppError::internal("Error al obtener las categorías.")
    })?;
    let mensaje = if rows.is_empty() {
        "No se encontraron categorías."
    } else {
        "Categorías obtenidas correctamente."
    };
    Ok(Json(ApiResponse::ok(mensaje, rows)))
}

/// GET /categoria/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Category> {
    let id = parse_id(&id)?;
    let category = categories::find(&state.pool, id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "Category lookup failed");
            AppError::internal("Error al obtener la categoría.")
        })?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    Ok(Json(ApiResponse::ok("Categoría obtenida correctamente.", category)))
}

/// POST /registrarcategoria
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CategoryCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), AppError> {
    let payload = validated(payload)?;
    let category = categories::create(&state.pool, payload)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::new(ErrorCode::CategoryNameExists),
            _ => {
                tracing::error!(error = %e, "Category insert failed");
                AppError::internal("Error al registrar la categoría.")
            }
        })?;

    tracing::info!(id = category.id_categoria, "Category registered");
    Ok(created("Categoría registrada correctamente.", category))
}
