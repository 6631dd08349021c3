//! Repositorio de mensajes de contacto

use crate::models::message::{ContactMessage, ContactMessageWithCar, MessageStatus};
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta desde el formulario público. El estado siempre entra como
    /// pending, sin importar lo que mande el cliente.
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        message: String,
        car_id: Option<Uuid>,
    ) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (id, name, email, phone, message, car_id, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(message)
        .bind(car_id)
        .bind(MessageStatus::Pending)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating contact message: {}", e)))?;

        Ok(created)
    }

    /// Bandeja del admin, con marca y modelo del vehículo consultado
    /// cuando la referencia sigue viva (LEFT JOIN, la baja del vehículo
    /// deja car_id en NULL).
    pub async fn find_all(
        &self,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessageWithCar>, AppError> {
        let messages = match status {
            Some(status) => {
                sqlx::query_as::<_, ContactMessageWithCar>(
                    r#"
                    SELECT m.id, m.name, m.email, m.phone, m.message, m.car_id, m.status,
                           m.created_at, c.brand AS car_brand, c.model AS car_model
                    FROM contact_messages m
                    LEFT JOIN cars c ON c.id = m.car_id
                    WHERE m.status = $1
                    ORDER BY m.created_at DESC
                    "#,
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ContactMessageWithCar>(
                    r#"
                    SELECT m.id, m.name, m.email, m.phone, m.message, m.car_id, m.status,
                           m.created_at, c.brand AS car_brand, c.model AS car_model
                    FROM contact_messages m
                    LEFT JOIN cars c ON c.id = m.car_id
                    ORDER BY m.created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::DatabaseError(format!("Error fetching messages: {}", e)))?;

        Ok(messages)
    }

    /// Transición de estado. Solo toca el campo status; el resto del
    /// mensaje es inmutable. Devuelve None si el id no existe.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<Option<ContactMessage>, AppError> {
        let updated = sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating message: {}", e)))?;

        Ok(updated)
    }

    /// Devuelve false si el id no existía.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting message: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
