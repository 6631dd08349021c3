//! Repositorio de estadísticas
//!
//! Conteos y suma de inventario calculados en vivo en una sola
//! consulta; no hay caché ni materialización.

use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct StatsRepository {
    pool: PgPool,
}

/// Fila de agregados: totales, disponibles, vendidos, mensajes
/// pendientes y valor del inventario disponible.
pub type StatsRow = (i64, i64, i64, i64, Decimal);

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_stats(&self) -> Result<StatsRow, AppError> {
        let row: StatsRow = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM cars) AS total_vehicles,
                (SELECT COUNT(*) FROM cars WHERE status = 'available') AS available_vehicles,
                (SELECT COUNT(*) FROM cars WHERE status = 'sold') AS sold_vehicles,
                (SELECT COUNT(*) FROM contact_messages WHERE status = 'pending') AS pending_messages,
                (SELECT COALESCE(SUM(price), 0) FROM cars WHERE status = 'available') AS total_inventory_value
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error fetching stats: {}", e)))?;

        Ok(row)
    }
}
