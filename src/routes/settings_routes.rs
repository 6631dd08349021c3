use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use crate::controllers::settings_controller::SettingsController;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de configuración del sitio (panel de administración)
pub fn create_settings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/", post(update_settings))
}

async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let settings = controller.get_all().await?;
    Ok(Json(settings))
}

async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<BTreeMap<String, String>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    controller.reconcile(settings).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Configuración actualizada exitosamente"
    })))
}
