//! Modelo de ContactMessage
//!
//! Mensajes enviados desde el formulario de contacto público. Un mensaje
//! puede referenciar el vehículo que lo motivó; si ese vehículo se borra
//! la referencia queda en NULL (ON DELETE SET NULL).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::str::FromStr;
use uuid::Uuid;

/// Estado de atención de un mensaje - mapea al ENUM message_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "message_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pending,
    Replied,
    Archived,
}

impl FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "replied" => Ok(Self::Replied),
            "archived" => Ok(Self::Archived),
            other => Err(format!(
                "estado de mensaje '{}' no válido (se espera: pending, replied, archived)",
                other
            )),
        }
    }
}

/// ContactMessage - mapea exactamente a la tabla contact_messages
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub car_id: Option<Uuid>,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

/// Mensaje enriquecido con los datos del vehículo asociado (LEFT JOIN)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactMessageWithCar {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub car_id: Option<Uuid>,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub car_brand: Option<String>,
    pub car_model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_status_from_str() {
        assert_eq!("pending".parse::<MessageStatus>().unwrap(), MessageStatus::Pending);
        assert_eq!("REPLIED".parse::<MessageStatus>().unwrap(), MessageStatus::Replied);
        assert!("deleted".parse::<MessageStatus>().is_err());
    }
}
