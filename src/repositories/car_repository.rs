//! Repositorio de vehículos
//!
//! Dueño de todo el SQL sobre la tabla cars, incluido el motor de
//! búsqueda del catálogo. Los filtros llegan ya tipados; cada valor se
//! bindea como parámetro y las columnas de orden salen de un enum, así
//! que ningún string del caller se interpola en el texto SQL.

use crate::models::car::{Car, CarFilters, CarStatus, NewCar};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Cantidad de vehículos destacados de la portada
const FEATURED_LIMIT: i64 = 6;

/// Escapa los metacaracteres de LIKE (`\`, `%`, `_`) para que el término
/// del usuario se compare literalmente dentro del patrón `%term%`.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Separador de condiciones: la primera emite ` WHERE `, las siguientes
/// ` AND `.
struct ClauseSep {
    first: bool,
}

impl ClauseSep {
    fn new() -> Self {
        Self { first: true }
    }

    fn push(&mut self, qb: &mut QueryBuilder<'static, Postgres>) {
        if self.first {
            qb.push(" WHERE ");
            self.first = false;
        } else {
            qb.push(" AND ");
        }
    }
}

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Arma la consulta del motor de búsqueda. Con `pin_available` la
    /// vista pública fija status = available e ignora cualquier filtro
    /// de estado que traigan los filtros; la vista admin aplica el
    /// filtro de estado solo si viene.
    fn build_search_query(
        filters: &CarFilters,
        pin_available: bool,
    ) -> QueryBuilder<'static, Postgres> {
        let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new("SELECT * FROM cars");
        let mut sep = ClauseSep::new();

        if pin_available {
            sep.push(&mut qb);
            qb.push("status = ").push_bind(CarStatus::Available);
        } else if let Some(status) = filters.status {
            sep.push(&mut qb);
            qb.push("status = ").push_bind(status);
        }

        if let Some(ref term) = filters.search {
            let pattern = format!("%{}%", escape_like(term));
            sep.push(&mut qb);
            qb.push("(brand ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR model ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(ref brand) = filters.brand {
            sep.push(&mut qb);
            qb.push("brand ILIKE ")
                .push_bind(format!("%{}%", escape_like(brand)));
        }

        if let Some(ref model) = filters.model {
            sep.push(&mut qb);
            qb.push("model ILIKE ")
                .push_bind(format!("%{}%", escape_like(model)));
        }

        if let Some(year) = filters.year {
            sep.push(&mut qb);
            qb.push("year = ").push_bind(year);
        }

        if let Some(transmission) = filters.transmission {
            sep.push(&mut qb);
            qb.push("transmission = ").push_bind(transmission);
        }

        if let Some(fuel_type) = filters.fuel_type {
            sep.push(&mut qb);
            qb.push("fuel_type = ").push_bind(fuel_type);
        }

        // min > max produce un rango vacío válido, no un error
        if let Some(min_price) = filters.min_price {
            sep.push(&mut qb);
            qb.push("price >= ").push_bind(min_price);
        }

        if let Some(max_price) = filters.max_price {
            sep.push(&mut qb);
            qb.push("price <= ").push_bind(max_price);
        }

        qb.push(" ORDER BY ")
            .push(filters.sort_by.column())
            .push(" ")
            .push(filters.order.sql());

        qb.push(" LIMIT ")
            .push_bind(filters.limit)
            .push(" OFFSET ")
            .push_bind(filters.offset);

        qb
    }

    /// Catálogo público: solo vehículos disponibles.
    pub async fn search_available(&self, filters: &CarFilters) -> Result<Vec<Car>, AppError> {
        let cars = Self::build_search_query(filters, true)
            .build_query_as::<Car>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error searching cars: {}", e)))?;

        Ok(cars)
    }

    /// Inventario admin: mismo motor, sin estado fijado.
    pub async fn search_all(&self, filters: &CarFilters) -> Result<Vec<Car>, AppError> {
        let cars = Self::build_search_query(filters, false)
            .build_query_as::<Car>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error searching cars: {}", e)))?;

        Ok(cars)
    }

    /// Destacados de portada: featured y disponibles, los más nuevos.
    pub async fn find_featured(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT * FROM cars
            WHERE featured = true AND status = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(CarStatus::Available)
        .bind(FEATURED_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error fetching featured cars: {}", e)))?;

        Ok(cars)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding car: {}", e)))?;

        Ok(car)
    }

    pub async fn create(&self, car: NewCar) -> Result<Car, AppError> {
        let created = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, brand, model, year, price, transmission, fuel_type,
                              engine, mileage, color, description, image_url, featured,
                              status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car.brand)
        .bind(car.model)
        .bind(car.year)
        .bind(car.price)
        .bind(car.transmission)
        .bind(car.fuel_type)
        .bind(car.engine)
        .bind(car.mileage)
        .bind(car.color)
        .bind(car.description)
        .bind(car.image_url)
        .bind(car.featured)
        .bind(car.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating car: {}", e)))?;

        Ok(created)
    }

    /// Reemplazo completo (PUT). Devuelve None si el id no existe.
    pub async fn update(&self, id: Uuid, car: NewCar) -> Result<Option<Car>, AppError> {
        let updated = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET brand = $2, model = $3, year = $4, price = $5, transmission = $6,
                fuel_type = $7, engine = $8, mileage = $9, color = $10,
                description = $11, image_url = $12, featured = $13, status = $14,
                updated_at = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car.brand)
        .bind(car.model)
        .bind(car.year)
        .bind(car.price)
        .bind(car.transmission)
        .bind(car.fuel_type)
        .bind(car.engine)
        .bind(car.mileage)
        .bind(car.color)
        .bind(car.description)
        .bind(car.image_url)
        .bind(car.featured)
        .bind(car.status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating car: {}", e)))?;

        Ok(updated)
    }

    /// Devuelve false si el id no existía.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting car: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::car::{CatalogSortField, FuelType, SortOrder, Transmission};
    use rust_decimal::Decimal;

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Toyota"), "Toyota");
    }

    #[test]
    fn test_public_query_pins_available_status() {
        let sql = CarRepository::build_search_query(&CarFilters::default(), true).into_sql();
        assert_eq!(
            sql,
            "SELECT * FROM cars WHERE status = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
    }

    #[test]
    fn test_public_query_ignores_caller_status() {
        let filters = CarFilters {
            status: Some(CarStatus::Sold),
            ..Default::default()
        };
        let sql = CarRepository::build_search_query(&filters, true).into_sql();

        // un solo predicado de estado, el fijado
        assert_eq!(sql.matches("status = ").count(), 1);
        assert!(sql.starts_with("SELECT * FROM cars WHERE status = $1"));
    }

    #[test]
    fn test_admin_query_without_filters_has_no_where() {
        let sql = CarRepository::build_search_query(&CarFilters::default(), false).into_sql();
        assert_eq!(
            sql,
            "SELECT * FROM cars ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_admin_query_applies_status_filter() {
        let filters = CarFilters {
            status: Some(CarStatus::Reserved),
            ..Default::default()
        };
        let sql = CarRepository::build_search_query(&filters, false).into_sql();
        assert!(sql.starts_with("SELECT * FROM cars WHERE status = $1"));
    }

    #[test]
    fn test_search_term_expands_to_brand_or_model() {
        let filters = CarFilters {
            search: Some("civic".to_string()),
            ..Default::default()
        };
        let sql = CarRepository::build_search_query(&filters, true).into_sql();
        assert!(sql.contains("(brand ILIKE $2 OR model ILIKE $3)"));
    }

    #[test]
    fn test_all_predicates_are_and_combined() {
        let filters = CarFilters {
            search: Some("rav".to_string()),
            brand: Some("Toyota".to_string()),
            model: Some("RAV4".to_string()),
            year: Some(2023),
            transmission: Some(Transmission::Automatic),
            fuel_type: Some(FuelType::Hybrid),
            min_price: Some(Decimal::new(10, 0)),
            max_price: Some(Decimal::new(20, 0)),
            ..Default::default()
        };
        let sql = CarRepository::build_search_query(&filters, true).into_sql();

        assert_eq!(
            sql,
            "SELECT * FROM cars WHERE status = $1 AND (brand ILIKE $2 OR model ILIKE $3) \
             AND brand ILIKE $4 AND model ILIKE $5 AND year = $6 AND transmission = $7 \
             AND fuel_type = $8 AND price >= $9 AND price <= $10 \
             ORDER BY created_at DESC LIMIT $11 OFFSET $12"
        );
    }

    #[test]
    fn test_min_greater_than_max_still_builds_both_bounds() {
        // rango contradictorio: consulta válida que no matchea nada
        let filters = CarFilters {
            min_price: Some(Decimal::new(40_000_000, 0)),
            max_price: Some(Decimal::new(30_000_000, 0)),
            ..Default::default()
        };
        let sql = CarRepository::build_search_query(&filters, true).into_sql();
        assert!(sql.contains("price >= $2"));
        assert!(sql.contains("price <= $3"));
    }

    #[test]
    fn test_sort_field_and_order_come_from_enums() {
        let filters = CarFilters {
            sort_by: CatalogSortField::Price,
            order: SortOrder::Asc,
            ..Default::default()
        };
        let sql = CarRepository::build_search_query(&filters, true).into_sql();
        assert!(sql.contains("ORDER BY price ASC"));
    }
}
