//! Repositorio de promociones

use crate::models::promotion::Promotion;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PromotionRepository {
    pool: PgPool,
}

impl PromotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Vista pública: solo promociones activas.
    pub async fn find_active(&self) -> Result<Vec<Promotion>, AppError> {
        let promotions = sqlx::query_as::<_, Promotion>(
            "SELECT * FROM promotions WHERE active = true ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error fetching promotions: {}", e)))?;

        Ok(promotions)
    }

    /// Vista admin: todas, activas o no.
    pub async fn find_all(&self) -> Result<Vec<Promotion>, AppError> {
        let promotions = sqlx::query_as::<_, Promotion>(
            "SELECT * FROM promotions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error fetching promotions: {}", e)))?;

        Ok(promotions)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Promotion>, AppError> {
        let promotion = sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding promotion: {}", e)))?;

        Ok(promotion)
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
        discount_label: String,
        icon: String,
        active: bool,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Promotion, AppError> {
        let promotion = sqlx::query_as::<_, Promotion>(
            r#"
            INSERT INTO promotions (id, title, description, discount_label, icon, active,
                                    start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .bind(discount_label)
        .bind(icon)
        .bind(active)
        .bind(start_date)
        .bind(end_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating promotion: {}", e)))?;

        Ok(promotion)
    }

    /// Actualización parcial: los campos ausentes conservan el valor
    /// actual. Devuelve None si el id no existe.
    pub async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        description: Option<String>,
        discount_label: Option<String>,
        icon: Option<String>,
        active: Option<bool>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Result<Option<Promotion>, AppError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let promotion = sqlx::query_as::<_, Promotion>(
            r#"
            UPDATE promotions
            SET title = $2, description = $3, discount_label = $4, icon = $5,
                active = $6, start_date = $7, end_date = $8, updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title.unwrap_or(current.title))
        .bind(description.unwrap_or(current.description))
        .bind(discount_label.unwrap_or(current.discount_label))
        .bind(icon.unwrap_or(current.icon))
        .bind(active.unwrap_or(current.active))
        .bind(start_date.or(current.start_date))
        .bind(end_date.or(current.end_date))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating promotion: {}", e)))?;

        Ok(promotion)
    }

    /// Devuelve false si el id no existía.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting promotion: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
