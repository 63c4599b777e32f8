//! Sale API handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared::error::AppError;
use shared::models::sale::{Sale, SaleCreate, SaleDeleted, SaleLineDetail};
use shared::response::ApiResponse;

use crate::db::sales;
use crate::state::AppState;

use super::{ApiResult, created, parse_id, validated};

/// GET /ventas - every line item with names resolved
pub async fn list_with_details(State(state): State<AppState>) -> ApiResult<Vec<SaleLineDetail>> {
    let rows = sales::list_with_details(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Sale detail query failed");
        AppError::internal("Error al obtener las ventas con detalles.")
    })?;
    let mensaje = if rows.is_empty() {
        "No se encontraron ventas."
    } else {
        "Ventas con detalles obtenidas correctamente."
    };
    Ok(Json(ApiResponse::ok(mensaje, rows)))
}

/// GET /obtenerventas - sale headers
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Sale>> {
    let rows = sales::list(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Sale list query failed");
        AppError::internal("Error al obtener las ventas.")
    })?;
    let mensaje = if rows.is_empty() {
        "No se encontraron ventas."
    } else {
        "Ventas obtenidas correctamente."
    };
    Ok(Json(ApiResponse::ok(mensaje, rows)))
}

/// POST /registrarventa
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<SaleCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Sale>>), AppError> {
    let payload = validated(payload)?;
    let sale = sales::create(&state.pool, &payload)
        .await
        .map_err(|e| e.into_app_error("Error al registrar la venta."))?;
    Ok(created("Venta registrada correctamente.", sale))
}

/// DELETE /eliminarventa/:id_venta - header and line items, atomically
pub async fn delete(
    State(state): State<AppState>,
    Path(id_venta): Path<String>,
) -> ApiResult<SaleDeleted> {
    let id_venta = parse_id(&id_venta)?;
    let deleted = sales::delete(&state.pool, id_venta)
        .await
        .map_err(|e| e.into_app_error("Error al eliminar la venta."))?;
    Ok(Json(ApiResponse::ok("Venta eliminada correctamente.", deleted)))
}
