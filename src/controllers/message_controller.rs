use crate::dto::car_dto::ApiResponse;
use crate::dto::message_dto::{MessageQueryParams, SubmitContactRequest, UpdateMessageRequest};
use crate::models::message::{ContactMessage, ContactMessageWithCar, MessageStatus};
use crate::repositories::message_repository::MessageRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_phone, validate_uuid};
use sqlx::PgPool;
use validator::Validate;

pub struct MessageController {
    repository: MessageRepository,
}

impl MessageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MessageRepository::new(pool),
        }
    }

    /// Alta pública desde el formulario de contacto. El estado se fuerza
    /// a pending en el repositorio.
    pub async fn submit(
        &self,
        request: SubmitContactRequest,
    ) -> Result<ApiResponse<ContactMessage>, AppError> {
        // Validar campos
        request.validate().map_err(AppError::Validation)?;

        let phone = match request.phone {
            Some(value) if !value.trim().is_empty() => {
                validate_phone(&value)?;
                Some(value)
            }
            _ => None,
        };

        let car_id = match request.car_id {
            Some(value) if !value.trim().is_empty() => Some(validate_uuid(&value)?),
            _ => None,
        };

        let message = self
            .repository
            .create(request.name, request.email, phone, request.message, car_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            message,
            "Mensaje enviado exitosamente".to_string(),
        ))
    }

    /// Bandeja del panel admin, con filtro de estado opcional.
    pub async fn list(
        &self,
        params: MessageQueryParams,
    ) -> Result<Vec<ContactMessageWithCar>, AppError> {
        let status = match params.status {
            Some(ref value) if !value.trim().is_empty() && !value.eq_ignore_ascii_case("all") => {
                Some(
                    value
                        .parse::<MessageStatus>()
                        .map_err(AppError::ValidationError)?,
                )
            }
            _ => None,
        };

        self.repository.find_all(status).await
    }

    /// Transición de estado: pending -> replied/archived. Solo cambia
    /// el estado, nunca el contenido del mensaje.
    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateMessageRequest,
    ) -> Result<ApiResponse<ContactMessage>, AppError> {
        let id = validate_uuid(id)?;

        let status = request
            .status
            .parse::<MessageStatus>()
            .map_err(AppError::ValidationError)?;

        let message = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Mensaje no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            message,
            "Mensaje actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = validate_uuid(id)?;

        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound("Mensaje no encontrado".to_string()));
        }

        Ok(())
    }
}
