use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use crate::controllers::message_controller::MessageController;
use crate::dto::car_dto::ApiResponse;
use crate::dto::message_dto::SubmitContactRequest;
use crate::models::message::ContactMessage;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Ruta pública del formulario de contacto
pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}

async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<SubmitContactRequest>,
) -> Result<Json<ApiResponse<ContactMessage>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    let response = controller.submit(request).await?;
    Ok(Json(response))
}
