use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::stats_controller::StatsController;
use crate::dto::stats_dto::StatsResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de estadísticas del panel de administración
pub fn create_stats_router() -> Router<AppState> {
    Router::new().route("/", get(get_stats))
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let controller = StatsController::new(state.pool.clone());
    let stats = controller.get_stats().await?;
    Ok(Json(stats))
}
