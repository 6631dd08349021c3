//! Modelo de Car
//!
//! Este módulo contiene el struct Car, sus enums de dominio y los filtros
//! normalizados del catálogo. Mapea exactamente al schema PostgreSQL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::str::FromStr;
use uuid::Uuid;

/// Tamaño de página por defecto del catálogo
pub const DEFAULT_PAGE_SIZE: i64 = 50;
/// Tamaño de página máximo permitido
pub const MAX_PAGE_SIZE: i64 = 100;

/// Estado de un vehículo en el inventario - mapea al ENUM car_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "car_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Sold,
    Reserved,
}

impl FromStr for CarStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "sold" => Ok(Self::Sold),
            "reserved" => Ok(Self::Reserved),
            other => Err(format!(
                "estado '{}' no válido (se espera: available, sold, reserved)",
                other
            )),
        }
    }
}

/// Tipo de transmisión - mapea al ENUM transmission_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "transmission_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Automatic,
    Manual,
}

impl FromStr for Transmission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "automatic" => Ok(Self::Automatic),
            "manual" => Ok(Self::Manual),
            other => Err(format!(
                "transmisión '{}' no válida (se espera: automatic, manual)",
                other
            )),
        }
    }
}

/// Tipo de combustible - mapea al ENUM fuel_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "fuel_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FromStr for FuelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gasoline" => Ok(Self::Gasoline),
            "diesel" => Ok(Self::Diesel),
            "electric" => Ok(Self::Electric),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(format!(
                "combustible '{}' no válido (se espera: gasoline, diesel, electric, hybrid)",
                other
            )),
        }
    }
}

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub engine: String,
    pub mileage: i32,
    pub color: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: CarStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload tipado para insertar o reemplazar un vehículo. Los enums ya
/// vienen parseados: los strings crudos del request nunca llegan aquí.
#[derive(Debug, Clone)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub engine: String,
    pub mileage: i32,
    pub color: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: CarStatus,
}

/// Campo de ordenamiento del catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSortField {
    Price,
    Year,
    CreatedAt,
}

impl CatalogSortField {
    /// Columna SQL correspondiente. Los valores del caller nunca se
    /// interpolan en el SQL: solo estas constantes llegan al query.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Year => "year",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for CatalogSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "year" => Ok(Self::Year),
            "created_at" => Ok(Self::CreatedAt),
            other => Err(format!(
                "campo de orden '{}' no válido (se espera: price, year, created_at)",
                other
            )),
        }
    }
}

/// Dirección de ordenamiento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!(
                "orden '{}' no válido (se espera: asc, desc)",
                other
            )),
        }
    }
}

/// Filtros normalizados para la búsqueda de vehículos.
///
/// Cada predicado opcional se combina con AND; `search` se aplica
/// internamente como (brand OR model). `status` solo lo usa la vista
/// de administración: el catálogo público fija status = available sin
/// importar lo que venga aquí.
#[derive(Debug, Clone)]
pub struct CarFilters {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub status: Option<CarStatus>,
    pub sort_by: CatalogSortField,
    pub order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

impl Default for CarFilters {
    fn default() -> Self {
        Self {
            search: None,
            brand: None,
            model: None,
            year: None,
            transmission: None,
            fuel_type: None,
            min_price: None,
            max_price: None,
            status: None,
            sort_by: CatalogSortField::CreatedAt,
            order: SortOrder::Desc,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_status_from_str() {
        assert_eq!("available".parse::<CarStatus>().unwrap(), CarStatus::Available);
        assert_eq!("SOLD".parse::<CarStatus>().unwrap(), CarStatus::Sold);
        assert_eq!(" reserved ".parse::<CarStatus>().unwrap(), CarStatus::Reserved);
        assert!("archived".parse::<CarStatus>().is_err());
    }

    #[test]
    fn test_transmission_from_str() {
        assert_eq!("automatic".parse::<Transmission>().unwrap(), Transmission::Automatic);
        assert_eq!("Manual".parse::<Transmission>().unwrap(), Transmission::Manual);
        assert!("cvt".parse::<Transmission>().is_err());
    }

    #[test]
    fn test_fuel_type_from_str() {
        assert_eq!("hybrid".parse::<FuelType>().unwrap(), FuelType::Hybrid);
        assert!("coal".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("price".parse::<CatalogSortField>().unwrap(), CatalogSortField::Price);
        assert_eq!("created_at".parse::<CatalogSortField>().unwrap(), CatalogSortField::CreatedAt);
        assert!("mileage".parse::<CatalogSortField>().is_err());
    }

    #[test]
    fn test_default_filters() {
        let filters = CarFilters::default();
        assert_eq!(filters.sort_by, CatalogSortField::CreatedAt);
        assert_eq!(filters.order, SortOrder::Desc);
        assert_eq!(filters.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(filters.offset, 0);
        assert!(filters.status.is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(CarStatus::Available).unwrap(),
            serde_json::json!("available")
        );
        assert_eq!(
            serde_json::to_value(FuelType::Gasoline).unwrap(),
            serde_json::json!("gasoline")
        );
    }
}
