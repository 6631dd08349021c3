use crate::dto::car_dto::{
    AdminCarQueryParams, ApiResponse, CatalogQueryParams, CreateCarRequest, UpdateCarRequest,
};
use crate::models::car::{Car, CarStatus, FuelType, NewCar, Transmission};
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_uuid;
use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    /// Catálogo público: normaliza los parámetros y busca solo
    /// vehículos disponibles.
    pub async fn list_catalog(&self, params: CatalogQueryParams) -> Result<Vec<Car>, AppError> {
        let filters = params.into_filters()?;
        self.repository.search_available(&filters).await
    }

    /// Destacados de la portada.
    pub async fn list_featured(&self) -> Result<Vec<Car>, AppError> {
        self.repository.find_featured().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Car, AppError> {
        let id = validate_uuid(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))
    }

    /// Inventario del admin: mismo motor de búsqueda con filtro de
    /// estado opcional.
    pub async fn list_inventory(&self, params: AdminCarQueryParams) -> Result<Vec<Car>, AppError> {
        let filters = params.into_filters()?;
        self.repository.search_all(&filters).await
    }

    pub async fn create(&self, request: CreateCarRequest) -> Result<ApiResponse<Car>, AppError> {
        // Validar campos
        request.validate().map_err(AppError::Validation)?;

        if request.price < Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let transmission = request
            .transmission
            .parse::<Transmission>()
            .map_err(AppError::ValidationError)?;
        let fuel_type = request
            .fuel_type
            .parse::<FuelType>()
            .map_err(AppError::ValidationError)?;
        let status = match request.status {
            Some(ref value) => value.parse::<CarStatus>().map_err(AppError::ValidationError)?,
            None => CarStatus::Available,
        };

        let car = self
            .repository
            .create(NewCar {
                brand: request.brand,
                model: request.model,
                year: request.year,
                price: request.price,
                transmission,
                fuel_type,
                engine: request.engine,
                mileage: request.mileage.unwrap_or(0),
                color: request.color,
                description: request.description,
                image_url: request.image_url,
                featured: request.featured.unwrap_or(false),
                status,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            car,
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    /// Reemplazo completo del vehículo (PUT); el estado es requerido.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateCarRequest,
    ) -> Result<ApiResponse<Car>, AppError> {
        let id = validate_uuid(id)?;

        // Validar campos
        request.validate().map_err(AppError::Validation)?;

        if request.price < Decimal::ZERO {
            return Err(AppError::ValidationError(
                "El precio no puede ser negativo".to_string(),
            ));
        }

        let transmission = request
            .transmission
            .parse::<Transmission>()
            .map_err(AppError::ValidationError)?;
        let fuel_type = request
            .fuel_type
            .parse::<FuelType>()
            .map_err(AppError::ValidationError)?;
        let status = request
            .status
            .parse::<CarStatus>()
            .map_err(AppError::ValidationError)?;

        let car = self
            .repository
            .update(
                id,
                NewCar {
                    brand: request.brand,
                    model: request.model,
                    year: request.year,
                    price: request.price,
                    transmission,
                    fuel_type,
                    engine: request.engine,
                    mileage: request.mileage.unwrap_or(0),
                    color: request.color,
                    description: request.description,
                    image_url: request.image_url,
                    featured: request.featured.unwrap_or(false),
                    status,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            car,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = validate_uuid(id)?;

        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
