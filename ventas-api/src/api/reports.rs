//! Report endpoints (`/estadisticas/...`)
//!
//! Each handler pairs a catalogue descriptor with its row type. Year-aware
//! reports read `startYear` / `endYear`; the others ignore the query string.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::response::ApiResponse;
use sqlx::mysql::MySqlRow;

use crate::db::reports::rows::*;
use crate::db::reports::{self, OnEmpty, Report, ReportFilter, catalog};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/totalVentasPorDia", get(ventas_por_dia))
        .route("/totalVentasPorMes", get(ventas_por_mes))
        .route("/totalVentasPorAnio", get(ventas_por_anio))
        .route("/totalVentasPorEmpleado", get(ventas_por_empleado))
        .route("/cantidadVentasPorEmpleado", get(cantidad_ventas_por_empleado))
        .route("/totalVentasPorEmpleadoYMes", get(ventas_por_empleado_y_mes))
        .route("/totalComprasPorCliente", get(compras_por_cliente))
        .route("/cantidadComprasPorCliente", get(cantidad_compras_por_cliente))
        .route("/totalComprasPorClienteYMes", get(compras_por_cliente_y_mes))
        .route("/productosMasVendidosPorCantidad", get(productos_por_cantidad))
        .route("/productosMasVendidosPorValor", get(productos_por_valor))
        .route("/ventasProductosPorMes", get(ventas_productos_por_mes))
        .route("/totalVentasPorCategoria", get(ventas_por_categoria))
        .route("/totalVentasPorCategoriaYMes", get(ventas_por_categoria_y_mes))
        .route("/productosBajoStock", get(productos_bajo_stock))
        .route("/stockPorCategoria", get(stock_por_categoria))
        .route("/ventasPorClienteEmpleadoYMes", get(ventas_por_cliente_empleado_y_mes))
        .route("/ventasPorCategoriaEmpleadoYMes", get(ventas_por_categoria_empleado_y_mes))
        .route("/ventasPorClienteCategoriaYMes", get(ventas_por_cliente_categoria_y_mes))
        .route("/promedioVentasPorEmpleado", get(promedio_ventas_por_empleado))
        .route("/promedioVentasPorEmpleadoYMes", get(promedio_ventas_por_empleado_y_mes))
        .route("/clientesFrecuentes", get(clientes_frecuentes))
        .route("/clientesFrecuentesPorMes", get(clientes_frecuentes_por_mes))
        .route("/productosMasCompradosPorCliente", get(productos_por_cliente))
        .route("/categoriasMasCompradasPorCliente", get(categorias_por_cliente))
        .route("/totalVentasPorDiaSemana", get(ventas_por_dia_semana))
        .route("/ventasPorCategoriaYDiaSemana", get(ventas_por_categoria_y_dia_semana))
        .route("/productosMayorRotacion", get(productos_mayor_rotacion))
        .route("/categoriasMayorRotacion", get(categorias_mayor_rotacion))
}

/// `?startYear=&endYear=`, both required for the range to apply
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearParams {
    pub start_year: Option<String>,
    pub end_year: Option<String>,
}

impl YearParams {
    pub fn filter(&self) -> ReportFilter {
        ReportFilter::years(self.start_year.as_deref(), self.end_year.as_deref())
    }
}

async fn run<R>(state: &AppState, report: &'static Report, filter: ReportFilter) -> Response
where
    R: for<'r> sqlx::FromRow<'r, MySqlRow> + Serialize + Send + Unpin,
{
    match reports::fetch::<R>(&state.pool, report, &filter).await {
        Ok(rows) => render_rows(report, rows),
        Err(e) => render_failure(report, &e, state.expose_error_detail).into_response(),
    }
}

/// Run a year-aware report. A query string that does not deserialize is a
/// JSON 400, not axum's plain-text rejection.
async fn run_filtered<R>(
    state: &AppState,
    report: &'static Report,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response
where
    R: for<'r> sqlx::FromRow<'r, MySqlRow> + Serialize + Send + Unpin,
{
    match params {
        Ok(Query(params)) => run::<R>(state, report, params.filter()).await,
        Err(rejection) => reject_query(report, &rejection).into_response(),
    }
}

fn reject_query(report: &Report, rejection: &QueryRejection) -> AppError {
    tracing::debug!(report = report.name, error = %rejection, "Invalid query string");
    AppError::with_message(ErrorCode::InvalidRequest, "Parámetros de consulta inválidos.")
}

/// Envelope for a successful run, honouring the report's empty-result rule
pub fn render_rows<R: Serialize>(report: &Report, rows: Vec<R>) -> Response {
    if !rows.is_empty() {
        return Json(ApiResponse::ok(report.messages.ok, rows)).into_response();
    }
    match report.on_empty {
        OnEmpty::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::message(report.messages.empty)),
        )
            .into_response(),
        OnEmpty::EmptyData => Json(ApiResponse::ok(report.messages.empty, rows)).into_response(),
    }
}

/// Log a failed run and build its fixed 500 body
pub fn render_failure(report: &Report, err: &sqlx::Error, expose_detail: bool) -> AppError {
    tracing::error!(report = report.name, error = %err, "Report query failed");
    let app_error = AppError::internal(report.messages.failed);
    if report.error_detail && expose_detail {
        app_error.with_detail(err.to_string())
    } else {
        app_error
    }
}

// ── Time ──

/// GET /estadisticas/totalVentasPorDia
pub async fn ventas_por_dia(State(state): State<AppState>) -> Response {
    run::<DailySales>(&state, &catalog::VENTAS_POR_DIA, ReportFilter::none()).await
}

/// GET /estadisticas/totalVentasPorMes?startYear=&endYear=
pub async fn ventas_por_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<MonthlySales>(&state, &catalog::VENTAS_POR_MES, params).await
}

pub async fn ventas_por_anio(State(state): State<AppState>) -> Response {
    run::<YearlySales>(&state, &catalog::VENTAS_POR_ANIO, ReportFilter::none()).await
}

pub async fn ventas_por_dia_semana(State(state): State<AppState>) -> Response {
    run::<WeekdaySales>(&state, &catalog::VENTAS_POR_DIA_SEMANA, ReportFilter::none()).await
}

// ── Employees ──

pub async fn ventas_por_empleado(State(state): State<AppState>) -> Response {
    run::<EmployeeSales>(&state, &catalog::VENTAS_POR_EMPLEADO, ReportFilter::none()).await
}

pub async fn cantidad_ventas_por_empleado(State(state): State<AppState>) -> Response {
    run::<EmployeeSaleCount>(
        &state,
        &catalog::CANTIDAD_VENTAS_POR_EMPLEADO,
        ReportFilter::none(),
    )
    .await
}

pub async fn ventas_por_empleado_y_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<EmployeeMonthlySales>(&state, &catalog::VENTAS_POR_EMPLEADO_Y_MES, params).await
}

pub async fn promedio_ventas_por_empleado(State(state): State<AppState>) -> Response {
    run::<EmployeeAverage>(
        &state,
        &catalog::PROMEDIO_VENTAS_POR_EMPLEADO,
        ReportFilter::none(),
    )
    .await
}

pub async fn promedio_ventas_por_empleado_y_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<EmployeeMonthlyAverage>(
        &state,
        &catalog::PROMEDIO_VENTAS_POR_EMPLEADO_Y_MES,
        params,
    )
    .await
}

// ── Customers ──

pub async fn compras_por_cliente(State(state): State<AppState>) -> Response {
    run::<CustomerPurchases>(&state, &catalog::COMPRAS_POR_CLIENTE, ReportFilter::none()).await
}

pub async fn cantidad_compras_por_cliente(State(state): State<AppState>) -> Response {
    run::<CustomerPurchaseCount>(
        &state,
        &catalog::CANTIDAD_COMPRAS_POR_CLIENTE,
        ReportFilter::none(),
    )
    .await
}

pub async fn compras_por_cliente_y_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<CustomerMonthlyPurchases>(&state, &catalog::COMPRAS_POR_CLIENTE_Y_MES, params)
        .await
}

/// GET /estadisticas/clientesFrecuentes (more than one distinct sale)
pub async fn clientes_frecuentes(State(state): State<AppState>) -> Response {
    run::<FrequentCustomer>(&state, &catalog::CLIENTES_FRECUENTES, ReportFilter::none()).await
}

pub async fn clientes_frecuentes_por_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<FrequentCustomerMonthly>(
        &state,
        &catalog::CLIENTES_FRECUENTES_POR_MES,
        params,
    )
    .await
}

pub async fn productos_por_cliente(State(state): State<AppState>) -> Response {
    run::<CustomerProductPurchases>(&state, &catalog::PRODUCTOS_POR_CLIENTE, ReportFilter::none())
        .await
}

pub async fn categorias_por_cliente(State(state): State<AppState>) -> Response {
    run::<CustomerCategoryPurchases>(
        &state,
        &catalog::CATEGORIAS_POR_CLIENTE,
        ReportFilter::none(),
    )
    .await
}

// ── Products & categories ──

pub async fn productos_por_cantidad(State(state): State<AppState>) -> Response {
    run::<ProductQuantity>(&state, &catalog::PRODUCTOS_POR_CANTIDAD, ReportFilter::none()).await
}

pub async fn productos_por_valor(State(state): State<AppState>) -> Response {
    run::<ProductValue>(&state, &catalog::PRODUCTOS_POR_VALOR, ReportFilter::none()).await
}

pub async fn ventas_productos_por_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<ProductMonthlySales>(&state, &catalog::VENTAS_PRODUCTOS_POR_MES, params).await
}

pub async fn ventas_por_categoria(State(state): State<AppState>) -> Response {
    run::<CategorySales>(&state, &catalog::VENTAS_POR_CATEGORIA, ReportFilter::none()).await
}

pub async fn ventas_por_categoria_y_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<CategoryMonthlySales>(&state, &catalog::VENTAS_POR_CATEGORIA_Y_MES, params).await
}

pub async fn ventas_por_categoria_y_dia_semana(State(state): State<AppState>) -> Response {
    run::<CategoryWeekdaySales>(
        &state,
        &catalog::VENTAS_POR_CATEGORIA_Y_DIA_SEMANA,
        ReportFilter::none(),
    )
    .await
}

/// GET /estadisticas/productosBajoStock (stock below 50)
pub async fn productos_bajo_stock(State(state): State<AppState>) -> Response {
    run::<LowStockProduct>(&state, &catalog::PRODUCTOS_BAJO_STOCK, ReportFilter::none()).await
}

pub async fn stock_por_categoria(State(state): State<AppState>) -> Response {
    run::<CategoryStock>(&state, &catalog::STOCK_POR_CATEGORIA, ReportFilter::none()).await
}

pub async fn productos_mayor_rotacion(State(state): State<AppState>) -> Response {
    run::<ProductRotation>(&state, &catalog::PRODUCTOS_MAYOR_ROTACION, ReportFilter::none()).await
}

pub async fn categorias_mayor_rotacion(State(state): State<AppState>) -> Response {
    run::<CategoryRotation>(&state, &catalog::CATEGORIAS_MAYOR_ROTACION, ReportFilter::none()).await
}

// ── Cross dimensions ──

pub async fn ventas_por_cliente_empleado_y_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<CustomerEmployeeMonthlySales>(
        &state,
        &catalog::VENTAS_POR_CLIENTE_EMPLEADO_Y_MES,
        params,
    )
    .await
}

pub async fn ventas_por_categoria_empleado_y_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<CategoryEmployeeMonthlySales>(
        &state,
        &catalog::VENTAS_POR_CATEGORIA_EMPLEADO_Y_MES,
        params,
    )
    .await
}

pub async fn ventas_por_cliente_categoria_y_mes(
    State(state): State<AppState>,
    params: Result<Query<YearParams>, QueryRejection>,
) -> Response {
    run_filtered::<CustomerCategoryMonthlySales>(
        &state,
        &catalog::VENTAS_POR_CLIENTE_CATEGORIA_Y_MES,
        params,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_daily_sales_empty_is_404_without_data() {
        let (status, body) = body_of(render_rows(&catalog::VENTAS_POR_DIA, Vec::<i32>::new())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({ "mensaje": "No se encontraron estadisticas de ventas." })
        );
    }

    #[tokio::test]
    async fn test_monthly_sales_empty_is_200_with_empty_data() {
        let (status, body) = body_of(render_rows(&catalog::VENTAS_POR_MES, Vec::<i32>::new())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "mensaje": "No se encontraron estadísticas de ventas por mes.",
                "data": []
            })
        );
    }

    #[tokio::test]
    async fn test_rows_use_ok_message() {
        let (status, body) = body_of(render_rows(&catalog::VENTAS_POR_ANIO, vec![1, 2])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mensaje"], "Estadísticas de ventas por año obtenidas correctamente.");
        assert_eq!(body["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_failure_detail_only_when_exposed() {
        let err = sqlx::Error::PoolTimedOut;
        let hidden = render_failure(&catalog::VENTAS_POR_DIA, &err, false);
        assert!(hidden.detail.is_none());
        assert_eq!(
            hidden.message,
            "Ha ocurrido un error al obtener  las estadisticas de ventas."
        );

        let shown = render_failure(&catalog::VENTAS_POR_DIA, &err, true);
        assert_eq!(shown.detail.as_deref(), Some(err.to_string().as_str()));

        let other = render_failure(&catalog::VENTAS_POR_MES, &err, true);
        assert!(other.detail.is_none());
    }

    #[test]
    fn test_year_params_are_camel_case() {
        let params: YearParams =
            serde_json::from_value(serde_json::json!({ "startYear": "2022", "endYear": "2023" }))
                .unwrap();
        assert!(params.filter().years.is_some());
        assert!(YearParams::default().filter().years.is_none());
    }
}
