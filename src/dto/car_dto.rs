use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::models::car::{CarFilters, CatalogSortField, SortOrder, MAX_PAGE_SIZE};
use crate::utils::errors::AppError;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Parámetros crudos del catálogo público. Todos llegan como strings
// opcionales del query string; la normalización a tipos ocurre en
// into_filters() y cualquier valor malformado corta con ValidationError
// antes de tocar la base de datos.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQueryParams {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

// Parámetros crudos del inventario admin (catálogo + filtro de estado)
#[derive(Debug, Default, Deserialize)]
pub struct AdminCarQueryParams {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Normaliza un valor que la UI manda siempre: vacío o el sentinel "all"
/// equivalen a no enviar el filtro.
fn clean_sentinel(raw: Option<String>) -> Option<String> {
    let value = raw?.trim().to_string();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(value)
    }
}

/// Normaliza texto libre: solo el vacío equivale a ausente.
fn clean_text(raw: Option<String>) -> Option<String> {
    let value = raw?.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parsea un parámetro opcional ya limpio; el error de parseo se reporta
/// como ValidationError con el nombre del parámetro.
fn parse_param<T>(field: &str, raw: Option<String>) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|e| {
            AppError::ValidationError(format!("Parámetro '{}' inválido: {}", field, e))
        }),
    }
}

fn parse_pagination(
    limit: Option<String>,
    offset: Option<String>,
) -> Result<(Option<i64>, Option<i64>), AppError> {
    let limit = parse_param::<i64>("limit", clean_text(limit))?;
    if let Some(value) = limit {
        if value < 0 {
            return Err(AppError::ValidationError(
                "Parámetro 'limit' inválido: debe ser mayor o igual a 0".to_string(),
            ));
        }
    }

    let offset = parse_param::<i64>("offset", clean_text(offset))?;
    if let Some(value) = offset {
        if value < 0 {
            return Err(AppError::ValidationError(
                "Parámetro 'offset' inválido: debe ser mayor o igual a 0".to_string(),
            ));
        }
    }

    Ok((limit, offset))
}

impl CatalogQueryParams {
    /// Convierte los parámetros crudos en filtros tipados del motor de
    /// catálogo. El estado nunca viene de aquí: la vista pública lo fija
    /// en available dentro del repositorio.
    pub fn into_filters(self) -> Result<CarFilters, AppError> {
        let mut filters = CarFilters::default();

        filters.search = clean_text(self.search);
        filters.brand = clean_sentinel(self.brand);
        filters.model = clean_sentinel(self.model);
        filters.year = parse_param("year", clean_sentinel(self.year))?;
        filters.transmission = parse_param("transmission", clean_sentinel(self.transmission))?;
        filters.fuel_type = parse_param("fuel_type", clean_sentinel(self.fuel_type))?;
        filters.min_price = parse_param::<Decimal>("minPrice", clean_text(self.min_price))?;
        filters.max_price = parse_param::<Decimal>("maxPrice", clean_text(self.max_price))?;

        if let Some(sort_by) = parse_param::<CatalogSortField>("sortBy", clean_text(self.sort_by))? {
            filters.sort_by = sort_by;
        }
        if let Some(order) = parse_param::<SortOrder>("order", clean_text(self.order))? {
            filters.order = order;
        }

        let (limit, offset) = parse_pagination(self.limit, self.offset)?;
        if let Some(limit) = limit {
            filters.limit = limit.min(MAX_PAGE_SIZE);
        }
        if let Some(offset) = offset {
            filters.offset = offset;
        }

        Ok(filters)
    }
}

impl AdminCarQueryParams {
    /// Igual que el catálogo público pero con filtro de estado opcional
    /// (el admin ve available, sold y reserved).
    pub fn into_filters(self) -> Result<CarFilters, AppError> {
        let status = parse_param("status", clean_sentinel(self.status))?;

        let base = CatalogQueryParams {
            search: self.search,
            brand: self.brand,
            model: self.model,
            year: self.year,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
            min_price: self.min_price,
            max_price: self.max_price,
            sort_by: self.sort_by,
            order: self.order,
            limit: self.limit,
            offset: self.offset,
        };

        let mut filters = base.into_filters()?;
        filters.status = status;
        Ok(filters)
    }
}

// Request para crear un vehículo del inventario
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    pub price: Decimal,

    pub transmission: String,

    pub fuel_type: String,

    #[validate(length(min = 1, max = 100))]
    pub engine: String,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    pub description: Option<String>,

    pub image_url: Option<String>,

    pub featured: Option<bool>,

    pub status: Option<String>,
}

// Request para actualizar un vehículo (PUT completo, el estado es requerido)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    pub price: Decimal,

    pub transmission: String,

    pub fuel_type: String,

    #[validate(length(min = 1, max = 100))]
    pub engine: String,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(length(max = 50))]
    pub color: Option<String>,

    pub description: Option<String>,

    pub image_url: Option<String>,

    pub featured: Option<bool>,

    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::car::{CarStatus, FuelType, Transmission, DEFAULT_PAGE_SIZE};

    #[test]
    fn test_empty_params_produce_defaults() {
        let filters = CatalogQueryParams::default().into_filters().unwrap();
        assert!(filters.search.is_none());
        assert!(filters.brand.is_none());
        assert!(filters.year.is_none());
        assert_eq!(filters.sort_by, CatalogSortField::CreatedAt);
        assert_eq!(filters.order, SortOrder::Desc);
        assert_eq!(filters.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(filters.offset, 0);
    }

    #[test]
    fn test_all_sentinel_equals_absent() {
        let with_sentinels = CatalogQueryParams {
            brand: Some("all".to_string()),
            model: Some("ALL".to_string()),
            year: Some("all".to_string()),
            transmission: Some("All".to_string()),
            fuel_type: Some(" all ".to_string()),
            ..Default::default()
        }
        .into_filters()
        .unwrap();

        let absent = CatalogQueryParams::default().into_filters().unwrap();

        assert_eq!(with_sentinels.brand, absent.brand);
        assert_eq!(with_sentinels.model, absent.model);
        assert_eq!(with_sentinels.year, absent.year);
        assert_eq!(with_sentinels.transmission, absent.transmission);
        assert_eq!(with_sentinels.fuel_type, absent.fuel_type);
    }

    #[test]
    fn test_valid_params_are_typed() {
        let filters = CatalogQueryParams {
            search: Some("corolla".to_string()),
            brand: Some("Toyota".to_string()),
            year: Some("2023".to_string()),
            transmission: Some("automatic".to_string()),
            fuel_type: Some("hybrid".to_string()),
            min_price: Some("30000000".to_string()),
            max_price: Some("50000000".to_string()),
            sort_by: Some("price".to_string()),
            order: Some("asc".to_string()),
            ..Default::default()
        }
        .into_filters()
        .unwrap();

        assert_eq!(filters.search.as_deref(), Some("corolla"));
        assert_eq!(filters.brand.as_deref(), Some("Toyota"));
        assert_eq!(filters.year, Some(2023));
        assert_eq!(filters.transmission, Some(Transmission::Automatic));
        assert_eq!(filters.fuel_type, Some(FuelType::Hybrid));
        assert_eq!(filters.min_price, Some(Decimal::new(30_000_000, 0)));
        assert_eq!(filters.max_price, Some(Decimal::new(50_000_000, 0)));
        assert_eq!(filters.sort_by, CatalogSortField::Price);
        assert_eq!(filters.order, SortOrder::Asc);
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        let year = CatalogQueryParams {
            year: Some("banana".to_string()),
            ..Default::default()
        }
        .into_filters();
        assert!(matches!(year, Err(AppError::ValidationError(_))));

        let price = CatalogQueryParams {
            min_price: Some("abc".to_string()),
            ..Default::default()
        }
        .into_filters();
        assert!(matches!(price, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_unknown_enum_and_sort_rejected() {
        let transmission = CatalogQueryParams {
            transmission: Some("flux".to_string()),
            ..Default::default()
        }
        .into_filters();
        assert!(matches!(transmission, Err(AppError::ValidationError(_))));

        let sort = CatalogQueryParams {
            sort_by: Some("mileage".to_string()),
            ..Default::default()
        }
        .into_filters();
        assert!(matches!(sort, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_limit_clamped_and_negative_rejected() {
        let clamped = CatalogQueryParams {
            limit: Some("500".to_string()),
            ..Default::default()
        }
        .into_filters()
        .unwrap();
        assert_eq!(clamped.limit, MAX_PAGE_SIZE);

        let negative = CatalogQueryParams {
            offset: Some("-1".to_string()),
            ..Default::default()
        }
        .into_filters();
        assert!(matches!(negative, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_admin_params_accept_status() {
        let filters = AdminCarQueryParams {
            status: Some("sold".to_string()),
            ..Default::default()
        }
        .into_filters()
        .unwrap();
        assert_eq!(filters.status, Some(CarStatus::Sold));

        let sentinel = AdminCarQueryParams {
            status: Some("all".to_string()),
            ..Default::default()
        }
        .into_filters()
        .unwrap();
        assert!(sentinel.status.is_none());

        let bad = AdminCarQueryParams {
            status: Some("scrapped".to_string()),
            ..Default::default()
        }
        .into_filters();
        assert!(matches!(bad, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_camel_case_query_names() {
        let params: CatalogQueryParams = serde_json::from_value(serde_json::json!({
            "minPrice": "1000",
            "maxPrice": "2000",
            "sortBy": "year"
        }))
        .unwrap();

        assert_eq!(params.min_price.as_deref(), Some("1000"));
        assert_eq!(params.max_price.as_deref(), Some("2000"));
        assert_eq!(params.sort_by.as_deref(), Some("year"));
    }
}
