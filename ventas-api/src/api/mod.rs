//! HTTP API for the sales warehouse
//!
//! Catalog and sale routes sit at the root with the paths existing clients
//! already call; reports are nested under `/estadisticas`.

pub mod categories;
pub mod customers;
pub mod health;
pub mod products;
pub mod reports;
pub mod sales;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use shared::error::{AppError, ErrorCode};
use shared::response::ApiResponse;
use tower_http::trace::TraceLayer;
use validator::Validate;

use crate::state::AppState;

/// Handler result: a `{ mensaje, data }` envelope or a flat error body
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/categorias", get(categories::list))
        .route("/categoria/{id}", get(categories::get_by_id))
        .route("/registrarcategoria", post(categories::create))
        .route("/clientes", get(customers::list))
        .route("/cliente/{id}", get(customers::get_by_id))
        .route("/registrarclientes", post(customers::create))
        .route("/productos", get(products::list))
        .route("/producto/{id}", get(products::get_by_id))
        .route("/registrarProducto", post(products::create));

    let sales = Router::new()
        .route("/ventas", get(sales::list_with_details))
        .route("/obtenerventas", get(sales::list))
        .route("/registrarventa", post(sales::create))
        .route("/eliminarventa/{id_venta}", delete(sales::delete));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(catalog)
        .merge(sales)
        .nest("/estadisticas", reports::router())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::new(ErrorCode::RouteNotFound)
}

/// Parse a numeric path identifier
pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::with_message(ErrorCode::InvalidRequest, "Identificador inválido."))
}

/// Unwrap a JSON body and run its validation rules
pub(crate) fn validated<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::validation("El cuerpo de la solicitud no es un JSON válido.")
    })?;
    body.validate().map_err(|errors| {
        tracing::debug!(%errors, "Payload validation failed");
        AppError::validation(ErrorCode::ValidationFailed.message())
    })?;
    Ok(body)
}

/// 201 Created with the envelope
pub(crate) fn created<T>(mensaje: &str, data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::ok(mensaje, data)))
}
