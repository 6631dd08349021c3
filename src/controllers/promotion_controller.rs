use crate::dto::car_dto::ApiResponse;
use crate::dto::promotion_dto::{CreatePromotionRequest, UpdatePromotionRequest};
use crate::models::promotion::{Promotion, DEFAULT_PROMOTION_ICON};
use crate::repositories::promotion_repository::PromotionRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_uuid;
use sqlx::PgPool;
use validator::Validate;

pub struct PromotionController {
    repository: PromotionRepository,
}

impl PromotionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PromotionRepository::new(pool),
        }
    }

    /// Promociones visibles en el sitio público (solo activas).
    pub async fn list_public(&self) -> Result<Vec<Promotion>, AppError> {
        self.repository.find_active().await
    }

    /// Todas las promociones para el panel admin.
    pub async fn list_admin(&self) -> Result<Vec<Promotion>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Promotion, AppError> {
        let id = validate_uuid(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Promoción no encontrada".to_string()))
    }

    pub async fn create(
        &self,
        request: CreatePromotionRequest,
    ) -> Result<ApiResponse<Promotion>, AppError> {
        // Validar campos
        request.validate().map_err(AppError::Validation)?;

        let promotion = self
            .repository
            .create(
                request.title,
                request.description,
                request.discount_label,
                request
                    .icon
                    .unwrap_or_else(|| DEFAULT_PROMOTION_ICON.to_string()),
                request.active.unwrap_or(true),
                request.start_date,
                request.end_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            promotion,
            "Promoción creada exitosamente".to_string(),
        ))
    }

    /// Actualización parcial (PATCH): los campos ausentes no cambian.
    pub async fn update(
        &self,
        id: &str,
        request: UpdatePromotionRequest,
    ) -> Result<ApiResponse<Promotion>, AppError> {
        let id = validate_uuid(id)?;

        // Validar campos
        request.validate().map_err(AppError::Validation)?;

        let promotion = self
            .repository
            .update(
                id,
                request.title,
                request.description,
                request.discount_label,
                request.icon,
                request.active,
                request.start_date,
                request.end_date,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Promoción no encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            promotion,
            "Promoción actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = validate_uuid(id)?;

        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Promoción no encontrada".to_string()));
        }

        Ok(())
    }
}
