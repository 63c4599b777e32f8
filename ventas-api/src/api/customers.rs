//! Customer API handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared::error::{AppError, ErrorCode};
use shared::models::customer::{Customer, CustomerCreate};
use shared::response::ApiResponse;

use crate::db::customers;
use crate::error::{Violation, violation};
use crate::state::AppState;

use super::{ApiResult, created, parse_id, validated};

/// GET /clientes
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Customer>> {
    let rows = customers::list(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Customer list query failed");
        AppError::internal("Error al obtener los clientes.")
    })?;
    let mensaje = if rows.is_empty() {
        "No se encontraron clientes."
    } else {
        "Clientes obtenidos correctamente."
    };
    Ok(Json(ApiResponse::ok(mensaje, rows)))
}

/// GET /cliente/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Customer> {
    let id = parse_id(&id)?;
    let customer = customers::find(&state.pool, id)
        .await
        .map_err(|e| {
            tracing::error!(id, error = %e, "Customer lookup failed");
            AppError::internal("Error al obtener el cliente.")
        })?
        .ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound))?;
    Ok(Json(ApiResponse::ok("Cliente obtenido correctamente.", customer)))
}

/// POST /registrarclientes
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CustomerCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Customer>>), AppError> {
    let payload = validated(payload)?;
    let customer = customers::create(&state.pool, payload)
        .await
        .map_err(|e| match violation(&e) {
            Some(Violation::Unique) => AppError::conflict("El cliente ya existe."),
            _ => {
                tracing::error!(error = %e, "Customer insert failed");
                AppError::internal("Error al registrar el cliente.")
            }
        })?;

    tracing::info!(id = customer.id_cliente, "Customer registered");
    Ok(created("Cliente registrado correctamente.", customer))
}
