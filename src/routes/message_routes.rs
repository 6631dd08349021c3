use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch},
    Json, Router,
};
use crate::controllers::message_controller::MessageController;
use crate::dto::car_dto::ApiResponse;
use crate::dto::message_dto::{MessageQueryParams, UpdateMessageRequest};
use crate::models::message::{ContactMessage, ContactMessageWithCar};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de mensajes de contacto del panel de administración
pub fn create_message_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_messages))
        .route("/:id", patch(update_message_status))
        .route("/:id", delete(delete_message))
}

async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessageQueryParams>,
) -> Result<Json<Vec<ContactMessageWithCar>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    let messages = controller.list(params).await?;
    Ok(Json(messages))
}

async fn update_message_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Json<ApiResponse<ContactMessage>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    let response = controller.update_status(&id, request).await?;
    Ok(Json(response))
}

async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Mensaje eliminado exitosamente"
    })))
}
