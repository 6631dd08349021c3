use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use vvs_motors_api::config::environment::EnvironmentConfig;
use vvs_motors_api::create_app;
use vvs_motors_api::state::AppState;
use vvs_motors_api::utils::jwt::{generate_token, JwtConfig};

const TEST_JWT_SECRET: &str = "secreto-de-pruebas-de-integracion";

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration: 3600,
        cors_origins: vec![],
        admin_email: None,
        admin_password: None,
    }
}

// Función helper para crear la app de test. El pool es perezoso, así que
// las rutas que fallan en validación o autenticación se pueden probar
// sin un Postgres corriendo.
fn create_test_app() -> axum::Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/vvs_motors_test")
        .expect("lazy pool");

    create_app(AppState::new(pool, test_config()))
}

fn admin_token() -> String {
    let jwt = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        expiration: 3600,
    };
    generate_token(Uuid::new_v4(), "admin@vvsmotors.com", &jwt).expect("token de prueba")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("respuesta JSON")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn get_with_auth(uri: &str, auth: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .expect("request")
}

fn json_request(method: &str, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = auth {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_catalog_rejects_malformed_min_price() {
    let app = create_test_app();
    let response = app.oneshot(get("/api/cars?minPrice=abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_catalog_rejects_malformed_year() {
    let app = create_test_app();
    let response = app.oneshot(get("/api/cars?year=banana")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_catalog_rejects_unknown_sort_field() {
    let app = create_test_app();
    let response = app.oneshot(get("/api/cars?sortBy=emoji")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_catalog_rejects_unknown_transmission() {
    let app = create_test_app();
    let response = app
        .oneshot(get("/api/cars?transmission=flux"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_catalog_accepts_all_sentinel() {
    let app = create_test_app();
    let response = app
        .oneshot(get("/api/cars?brand=all&year=all&transmission=all"))
        .await
        .unwrap();

    // El sentinel "all" equivale a no filtrar: la request pasa la
    // normalización y solo puede fallar ya en la base de datos.
    assert_ne!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = create_test_app();
    let response = app.oneshot(get("/api/admin/cars")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_admin_routes_reject_garbage_token() {
    let app = create_test_app();
    let response = app
        .oneshot(get_with_auth("/api/admin/stats", "Bearer no-es-un-token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "JWT_ERROR");
}

#[tokio::test]
async fn test_admin_routes_reject_wrong_scheme() {
    let app = create_test_app();
    let response = app
        .oneshot(get_with_auth("/api/admin/settings", "Basic abc123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = create_test_app();
    let response = app.oneshot(get("/api/auth/me")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_rejects_invalid_email() {
    let app = create_test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": "no-es-un-email", "password": "x" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_contact_rejects_invalid_email() {
    let app = create_test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/contact",
            None,
            json!({
                "name": "Ana Pérez",
                "email": "sin-arroba",
                "message": "Hola, me interesa el RAV4"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_contact_rejects_malformed_car_reference() {
    let app = create_test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/contact",
            None,
            json!({
                "name": "Ana Pérez",
                "email": "ana@example.com",
                "message": "Hola, me interesa el RAV4",
                "car_id": "no-es-un-uuid"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_car_rejects_negative_price() {
    let app = create_test_app();
    let token = admin_token();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/cars",
            Some(&token),
            json!({
                "brand": "Toyota",
                "model": "RAV4",
                "year": 2024,
                "price": "-500",
                "transmission": "automatic",
                "fuel_type": "gasoline",
                "engine": "2.5L"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_car_rejects_unknown_fuel_type() {
    let app = create_test_app();
    let token = admin_token();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/cars",
            Some(&token),
            json!({
                "brand": "Toyota",
                "model": "RAV4",
                "year": 2024,
                "price": "120000000",
                "transmission": "automatic",
                "fuel_type": "plutonio",
                "engine": "2.5L"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_message_rejects_unknown_status() {
    let app = create_test_app();
    let token = admin_token();
    let uri = format!("/api/admin/messages/{}", Uuid::new_v4());
    let response = app
        .oneshot(json_request(
            "PATCH",
            &uri,
            Some(&token),
            json!({ "status": "spam" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_settings_update_rejects_empty_key() {
    let app = create_test_app();
    let token = admin_token();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/settings",
            Some(&token),
            json!({ "": "valor" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_promotion_rejects_empty_title() {
    let app = create_test_app();
    let token = admin_token();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/admin/promotions",
            Some(&token),
            json!({
                "title": "",
                "description": "Descuento de temporada",
                "discount_label": "0% Interés"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_car_rejects_malformed_id() {
    let app = create_test_app();
    let token = admin_token();
    let response = app
        .oneshot(json_request(
            "DELETE",
            "/api/admin/cars/no-es-un-uuid",
            Some(&token),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
