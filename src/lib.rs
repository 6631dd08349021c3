//! VVS Motors API
//!
//! Backend del sitio web del concesionario: catálogo público de vehículos,
//! promociones, formulario de contacto y panel de administración protegido
//! con JWT.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{middleware as axum_middleware, routing::get, Json, Router};
use serde_json::json;

use crate::middleware::auth::require_admin;
use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construye el router completo de la API.
///
/// Las rutas bajo `/api/admin` y `GET /api/auth/me` requieren un token
/// Bearer válido; el resto es público.
pub fn create_app(state: AppState) -> Router {
    let admin_router = Router::new()
        .nest("/cars", routes::car_routes::create_admin_car_router())
        .nest("/promotions", routes::promotion_routes::create_admin_promotion_router())
        .nest("/messages", routes::message_routes::create_message_router())
        .nest("/settings", routes::settings_routes::create_settings_router())
        .nest("/stats", routes::stats_routes::create_stats_router())
        .layer(axum_middleware::from_fn_with_state(state.clone(), require_admin));

    let cors = if state.config.is_production() && !state.config.cors_origins.is_empty() {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/cars", routes::car_routes::create_car_router())
        .nest("/api/promotions", routes::promotion_routes::create_promotion_router())
        .nest("/api/contact", routes::contact_routes::create_contact_router())
        .nest("/api/auth", routes::auth_routes::create_auth_router(state.clone()))
        .nest("/api/admin", admin_router)
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API VVS Motors funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
