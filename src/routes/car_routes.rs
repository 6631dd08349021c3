use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{
    AdminCarQueryParams, ApiResponse, CatalogQueryParams, CreateCarRequest, UpdateCarRequest,
};
use crate::models::car::Car;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas del catálogo de vehículos
pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars))
        .route("/featured", get(list_featured_cars))
        .route("/:id", get(get_car))
}

/// Rutas de inventario del panel de administración
pub fn create_admin_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/", post(create_car))
        .route("/:id", put(update_car))
        .route("/:id", delete(delete_car))
}

async fn list_cars(
    State(state): State<AppState>,
    Query(params): Query<CatalogQueryParams>,
) -> Result<Json<Vec<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let cars = controller.list_catalog(params).await?;
    Ok(Json(cars))
}

async fn list_featured_cars(
    State(state): State<AppState>,
) -> Result<Json<Vec<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let cars = controller.list_featured().await?;
    Ok(Json(cars))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let car = controller.get_by_id(&id).await?;
    Ok(Json(car))
}

async fn list_inventory(
    State(state): State<AppState>,
    Query(params): Query<AdminCarQueryParams>,
) -> Result<Json<Vec<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let cars = controller.list_inventory(params).await?;
    Ok(Json(cars))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
