//! End-to-end tests against a real MySQL warehouse
//!
//! Set `TEST_DATABASE_URL` to a disposable database to run them; every test
//! recreates the schema. Without it the tests return early.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::MySqlPool;
use tokio::sync::Mutex;
use tower::ServiceExt;
use ventas_api::{AppState, create_router};

const SCHEMA: &str = include_str!("../sql/schema.sql");

static DB_LOCK: Mutex<()> = Mutex::const_new(());

struct Warehouse {
    pool: MySqlPool,
}

impl Warehouse {
    async fn connect() -> Option<Self> {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set, skipping");
            return None;
        };
        let pool = MySqlPool::connect(&url).await.unwrap();
        sqlx::raw_sql(
            "SET FOREIGN_KEY_CHECKS = 0; \
             DROP TABLE IF EXISTS Hecho_Ventas, Ventas, Dim_Productos, Categorias, \
             Dim_Clientes, Dim_Empleados, Dim_Tiempo; \
             SET FOREIGN_KEY_CHECKS = 1;",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
        Some(Self { pool })
    }

    fn app(&self) -> Router {
        create_router(AppState::with_pool(self.pool.clone(), false))
    }

    async fn seed_dimensions(&self) {
        sqlx::raw_sql(
            "INSERT INTO Dim_Empleados (id_empleado, primer_nombre, segundo_nombre, primer_apellido) VALUES \
                (1, 'Luis', NULL, 'Gómez'), (2, 'Marta', 'Elena', 'Ruiz'); \
             INSERT INTO Dim_Clientes (id_cliente, primer_nombre, segundo_nombre, primer_apellido) VALUES \
                (1, 'Ana', NULL, 'López'), (2, 'Pedro', NULL, 'Díaz'); \
             INSERT INTO Dim_Productos (id_producto, nombre_producto, nombre_categoria, stock) VALUES \
                (1, 'Café', 'Bebidas', 100), (2, 'Té', 'Bebidas', 0), (3, 'Pan', 'Panadería', 20);",
        )
        .execute(&self.pool)
        .await
        .unwrap();
    }

    /// Three sales: Ana buys twice (2022 and 2023), Pedro once (2023)
    async fn seed_sales(&self) -> Vec<i64> {
        let sales = [
            r#"{ "id_cliente": 1, "id_empleado": 1, "fecha": "2022-05-10", "detalles": [
                   { "id_producto": 1, "cantidad": 2, "total_linea": "10.00" },
                   { "id_producto": 3, "cantidad": 1, "total_linea": "2.50" } ] }"#,
            r#"{ "id_cliente": 1, "id_empleado": 2, "fecha": "2023-01-15", "detalles": [
                   { "id_producto": 1, "cantidad": 1, "total_linea": "5.00" } ] }"#,
            r#"{ "id_cliente": 2, "id_empleado": 1, "fecha": "2023-01-20", "detalles": [
                   { "id_producto": 2, "cantidad": 3, "total_linea": "9.00" } ] }"#,
        ];
        let mut ids = Vec::new();
        for sale in sales {
            let (status, body) = post_json(self.app(), "/registrarventa", sale).await;
            assert_eq!(status, StatusCode::CREATED, "{body}");
            ids.push(body["data"]["id_venta"].as_i64().unwrap());
        }
        ids
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn empty_warehouse_shapes() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };

    let (status, body) = get(wh.app(), "/estadisticas/totalVentasPorDia").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        serde_json::json!({ "mensaje": "No se encontraron estadisticas de ventas." })
    );

    let (status, body) = get(wh.app(), "/estadisticas/totalVentasPorMes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "mensaje": "No se encontraron estadísticas de ventas por mes.",
            "data": []
        })
    );

    let (status, body) = get(wh.app(), "/categorias").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn daily_sales_are_in_date_order() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    wh.seed_sales().await;

    let (status, body) = get(wh.app(), "/estadisticas/totalVentasPorDia").await;
    assert_eq!(status, StatusCode::OK);
    let days: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["dia"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(days, vec!["2022-05-10", "2023-01-15", "2023-01-20"]);
}

#[tokio::test]
async fn year_filter_needs_both_bounds() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    wh.seed_sales().await;

    let (_, all) = get(wh.app(), "/estadisticas/totalVentasPorMes").await;
    let (_, half) = get(wh.app(), "/estadisticas/totalVentasPorMes?startYear=2023").await;
    assert_eq!(all, half);

    let (status, only_2023) = get(
        wh.app(),
        "/estadisticas/totalVentasPorMes?startYear=2023&endYear=2023",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        only_2023["data"],
        serde_json::json!([{ "mes": 1, "total_ventas": "14.0" }])
    );
}

#[tokio::test]
async fn frequent_customers_need_more_than_one_sale() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    wh.seed_sales().await;

    let (status, body) = get(wh.app(), "/estadisticas/clientesFrecuentes").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["primer_nombre"], "Ana");
    assert_eq!(rows[0]["cantidad_compras"], 2);
}

#[tokio::test]
async fn rotation_skips_zero_stock() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    wh.seed_sales().await;

    let (_, body) = get(wh.app(), "/estadisticas/productosMayorRotacion").await;
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["nombre_producto"].as_str().unwrap().to_string())
        .collect();
    assert!(!names.contains(&"Té".to_string()));
    assert!(names.contains(&"Café".to_string()));
}

#[tokio::test]
async fn deleted_sale_disappears_everywhere() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    let ids = wh.seed_sales().await;

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/eliminarventa/{}", ids[0]))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(wh.app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lineas_eliminadas"], 2);

    let (_, sales) = get(wh.app(), "/obtenerventas").await;
    assert_eq!(sales["data"].as_array().unwrap().len(), 2);

    let (_, years) = get(wh.app(), "/estadisticas/totalVentasPorAnio").await;
    assert_eq!(
        years["data"],
        serde_json::json!([{ "año": 2023, "total_ventas": "14.00" }])
    );

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/eliminarventa/{}", ids[0]))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(wh.app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensaje"], "Venta no encontrada.");
}

#[tokio::test]
async fn sale_with_unknown_customer_is_rejected() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;

    let (status, _) = post_json(
        wh.app(),
        "/registrarventa",
        r#"{ "id_cliente": 99, "id_empleado": 1, "fecha": "2024-03-15",
             "detalles": [ { "id_producto": 1, "cantidad": 1, "total_linea": "5.00" } ] }"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, sales) = get(wh.app(), "/obtenerventas").await;
    assert_eq!(sales["data"], serde_json::json!([]));
}

#[tokio::test]
async fn catalog_create_and_fetch() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };

    let (status, body) = post_json(
        wh.app(),
        "/registrarcategoria",
        r#"{ "nombre_categoria": " Lácteos " }"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["nombre_categoria"], "Lácteos");
    let id = body["data"]["id_categoria"].as_i64().unwrap();

    let (status, body) = get(wh.app(), &format!("/categoria/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre_categoria"], "Lácteos");

    let (status, _) = post_json(
        wh.app(),
        "/registrarcategoria",
        r#"{ "nombre_categoria": "Lácteos" }"#,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = get(wh.app(), "/cliente/4040").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "mensaje": "Cliente no encontrado." }));
}

fn column<'a>(body: &'a serde_json::Value, key: &str) -> Vec<&'a serde_json::Value> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| &row[key])
        .collect()
}

fn names(body: &serde_json::Value, key: &str) -> Vec<String> {
    column(body, key)
        .into_iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

/// DECIMAL columns arrive as strings
fn amounts(body: &serde_json::Value, key: &str) -> Vec<f64> {
    column(body, key)
        .into_iter()
        .map(|v| v.as_str().unwrap().parse().unwrap())
        .collect()
}

fn assert_descending(values: &[f64]) {
    assert!(
        values.windows(2).all(|w| w[0] >= w[1]),
        "not descending: {values:?}"
    );
}

#[tokio::test]
async fn rankings_are_descending() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    wh.seed_sales().await;

    let (_, body) = get(wh.app(), "/estadisticas/totalVentasPorEmpleado").await;
    assert_eq!(names(&body, "primer_nombre"), vec!["Luis", "Marta"]);
    assert_descending(&amounts(&body, "total_ventas"));

    let (_, body) = get(wh.app(), "/estadisticas/productosMasVendidosPorValor").await;
    assert_eq!(names(&body, "nombre_producto"), vec!["Café", "Té", "Pan"]);
    assert_descending(&amounts(&body, "total_ventas"));

    // Pan 1/20 ahead of Café 3/100; Té has no stock
    let (_, body) = get(wh.app(), "/estadisticas/productosMayorRotacion").await;
    assert_eq!(names(&body, "nombre_producto"), vec!["Pan", "Café"]);
    assert_descending(&amounts(&body, "tasa_rotacion"));
}

#[tokio::test]
async fn monthly_breakdowns_are_chronological() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    wh.seed_sales().await;

    let (status, body) = get(wh.app(), "/estadisticas/totalVentasPorEmpleadoYMes").await;
    assert_eq!(status, StatusCode::OK);
    let periods: Vec<(i64, i64)> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| (row["año"].as_i64().unwrap(), row["mes"].as_i64().unwrap()))
        .collect();
    assert_eq!(periods, vec![(2022, 5), (2023, 1), (2023, 1)]);

    // Within January 2023 the larger seller comes first
    assert_eq!(names(&body, "primer_nombre"), vec!["Luis", "Luis", "Marta"]);
    let totals = amounts(&body, "total_ventas");
    assert_descending(&totals[1..]);
}

#[tokio::test]
async fn category_rotation_skips_categories_without_stock() {
    let _guard = DB_LOCK.lock().await;
    let Some(wh) = Warehouse::connect().await else { return };
    wh.seed_dimensions().await;
    wh.seed_sales().await;

    sqlx::query(
        "INSERT INTO Dim_Productos (id_producto, nombre_producto, nombre_categoria, stock) \
         VALUES (4, 'Hielo', 'Congelados', 0)",
    )
    .execute(&wh.pool)
    .await
    .unwrap();
    let (status, body) = post_json(
        wh.app(),
        "/registrarventa",
        r#"{ "id_cliente": 2, "id_empleado": 2, "fecha": "2023-02-01", "detalles": [
               { "id_producto": 4, "cantidad": 4, "total_linea": "4.00" } ] }"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (status, body) = get(wh.app(), "/estadisticas/categoriasMayorRotacion").await;
    assert_eq!(status, StatusCode::OK);
    let categories = names(&body, "nombre_categoria");
    assert!(!categories.contains(&"Congelados".to_string()));
    assert!(categories.contains(&"Bebidas".to_string()));
    assert!(categories.contains(&"Panadería".to_string()));
    assert_descending(&amounts(&body, "tasa_rotacion"));
}
