use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AdminProfileResponse, LoginRequest, LoginResponse};
use crate::middleware::auth::{require_admin, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

/// Rutas de autenticación del panel de administración
///
/// `/login` es pública; `/me` requiere un token Bearer válido.
pub fn create_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
        .route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let jwt = JwtConfig::from(&state.config);
    let controller = AuthController::new(state.pool.clone(), jwt);
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<AdminProfileResponse>, AppError> {
    let jwt = JwtConfig::from(&state.config);
    let controller = AuthController::new(state.pool.clone(), jwt);
    let profile = controller.me(admin.admin_id).await?;
    Ok(Json(profile))
}
