//! Modelo de Setting
//!
//! Configuración del sitio como pares clave/valor. La clave (`name`)
//! tiene constraint UNIQUE: la reconciliación del panel admin depende
//! de eso para decidir entre UPDATE e INSERT.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Setting - mapea exactamente a la tabla settings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Setting {
    pub id: Uuid,
    pub name: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Fila mínima usada por la reconciliación (id + name bajo FOR UPDATE)
#[derive(Debug, Clone, FromRow)]
pub struct SettingKey {
    pub id: Uuid,
    pub name: String,
}
