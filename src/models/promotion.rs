//! Modelo de Promotion
//!
//! Promociones del sitio público (banners de descuento, eventos). El
//! descuento es texto libre ("0% Interés", "$500K"), nunca numérico.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Icono por defecto cuando la promoción no define uno propio
pub const DEFAULT_PROMOTION_ICON: &str = "🎉";

/// Promotion - mapea exactamente a la tabla promotions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Promotion {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub discount_label: String,
    pub icon: String,
    pub active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
