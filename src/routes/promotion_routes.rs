use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use crate::controllers::promotion_controller::PromotionController;
use crate::dto::car_dto::ApiResponse;
use crate::dto::promotion_dto::{CreatePromotionRequest, UpdatePromotionRequest};
use crate::models::promotion::Promotion;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de promociones (solo las activas)
pub fn create_promotion_router() -> Router<AppState> {
    Router::new().route("/", get(list_active_promotions))
}

/// Rutas de promociones del panel de administración
pub fn create_admin_promotion_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_promotions))
        .route("/", post(create_promotion))
        .route("/:id", get(get_promotion))
        .route("/:id", patch(update_promotion))
        .route("/:id", delete(delete_promotion))
}

async fn list_active_promotions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Promotion>>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let promotions = controller.list_public().await?;
    Ok(Json(promotions))
}

async fn list_promotions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Promotion>>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let promotions = controller.list_admin().await?;
    Ok(Json(promotions))
}

async fn get_promotion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Promotion>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let promotion = controller.get_by_id(&id).await?;
    Ok(Json(promotion))
}

async fn create_promotion(
    State(state): State<AppState>,
    Json(request): Json<CreatePromotionRequest>,
) -> Result<Json<ApiResponse<Promotion>>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_promotion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePromotionRequest>,
) -> Result<Json<ApiResponse<Promotion>>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_promotion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PromotionController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Promoción eliminada exitosamente"
    })))
}
