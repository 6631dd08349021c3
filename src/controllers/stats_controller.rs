use crate::dto::stats_dto::StatsResponse;
use crate::repositories::stats_repository::StatsRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct StatsController {
    repository: StatsRepository,
}

impl StatsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StatsRepository::new(pool),
        }
    }

    /// Agregados del dashboard, siempre calculados en vivo.
    pub async fn get_stats(&self) -> Result<StatsResponse, AppError> {
        let (total_vehicles, available_vehicles, sold_vehicles, pending_messages, total_inventory_value) =
            self.repository.get_stats().await?;

        Ok(StatsResponse {
            total_vehicles,
            available_vehicles,
            sold_vehicles,
            pending_messages,
            total_inventory_value,
        })
    }
}
