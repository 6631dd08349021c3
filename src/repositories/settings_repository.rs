//! Repositorio de settings
//!
//! Reconciliación del mapa clave/valor de configuración del sitio.
//! Todo el ciclo leer-particionar-escribir corre dentro de una sola
//! transacción: los locks de fila del SELECT ... FOR UPDATE serializan
//! reconciliaciones concurrentes sobre la misma clave, y cualquier
//! fallo en una fase revierte la operación completa.

use crate::models::setting::SettingKey;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Separa el mapa entrante en actualizaciones (la clave ya existe, va
/// por id) e inserciones (clave nueva). Independiente del orden.
fn partition_settings(
    existing: &BTreeMap<String, Uuid>,
    incoming: BTreeMap<String, String>,
) -> (Vec<(Uuid, String)>, Vec<(String, String)>) {
    let mut updates = Vec::new();
    let mut inserts = Vec::new();

    for (name, value) in incoming {
        match existing.get(&name) {
            Some(id) => updates.push((*id, value)),
            None => inserts.push((name, value)),
        }
    }

    (updates, inserts)
}

/// INSERT multi-fila con upsert por nombre: si otra transacción creó la
/// clave entre el lock y el insert, el conflicto degrada a UPDATE en
/// vez de duplicar la fila.
fn build_insert_query(inserts: Vec<(String, String)>) -> QueryBuilder<'static, Postgres> {
    let now = Utc::now();
    let mut qb: QueryBuilder<'static, Postgres> =
        QueryBuilder::new("INSERT INTO settings (id, name, value, updated_at) ");

    qb.push_values(inserts, |mut b, (name, value)| {
        b.push_bind(Uuid::new_v4())
            .push_bind(name)
            .push_bind(value)
            .push_bind(now);
    });

    qb.push(" ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at");
    qb
}

pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tabla completa aplanada a mapa name -> value.
    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let rows = sqlx::query_as::<_, (String, String)>("SELECT name, value FROM settings")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error fetching settings: {}", e)))?;

        Ok(rows.into_iter().collect())
    }

    /// Upsert del mapa entrante. Las claves no incluidas quedan intactas;
    /// no existe camino de borrado.
    pub async fn reconcile(&self, incoming: BTreeMap<String, String>) -> Result<(), AppError> {
        if incoming.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::DatabaseError(format!("Error starting settings transaction: {}", e))
        })?;

        let existing_rows =
            sqlx::query_as::<_, SettingKey>("SELECT id, name FROM settings FOR UPDATE")
                .fetch_all(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error reading settings: {}", e))
                })?;

        let existing: BTreeMap<String, Uuid> = existing_rows
            .into_iter()
            .map(|row| (row.name, row.id))
            .collect();

        let (updates, inserts) = partition_settings(&existing, incoming);

        for (id, value) in updates {
            sqlx::query("UPDATE settings SET value = $2, updated_at = $3 WHERE id = $1")
                .bind(id)
                .bind(value)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error updating setting: {}", e))
                })?;
        }

        if !inserts.is_empty() {
            build_insert_query(inserts)
                .build()
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error inserting settings: {}", e))
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::DatabaseError(format!("Error committing settings transaction: {}", e))
        })?;

        Ok(())
    }
}
