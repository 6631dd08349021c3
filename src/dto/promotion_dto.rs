use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// Request para crear una promoción
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePromotionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    // Texto libre: "0% Interés", "$500K", etc. Nunca se interpreta como número
    #[validate(length(min = 1, max = 100))]
    pub discount_label: String,

    #[validate(length(min = 1, max = 20))]
    pub icon: Option<String>,

    pub active: Option<bool>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}

// Request para actualizar una promoción (PATCH parcial)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePromotionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub discount_label: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub icon: Option<String>,

    pub active: Option<bool>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}
