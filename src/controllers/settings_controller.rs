use crate::repositories::settings_repository::SettingsRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use std::collections::BTreeMap;

/// Largo máximo de una clave de configuración
const MAX_NAME_LEN: usize = 100;
/// Largo máximo de un valor de configuración
const MAX_VALUE_LEN: usize = 5000;

pub struct SettingsController {
    repository: SettingsRepository,
}

impl SettingsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SettingsRepository::new(pool),
        }
    }

    /// Configuración completa aplanada a mapa name -> value.
    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        self.repository.get_all().await
    }

    /// Reconcilia el mapa entrante contra la tabla: claves existentes se
    /// actualizan, claves nuevas se insertan, el resto queda intacto.
    pub async fn reconcile(&self, incoming: BTreeMap<String, String>) -> Result<(), AppError> {
        // Validar claves y valores antes de tocar la base de datos
        for (name, value) in &incoming {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Las claves de configuración no pueden estar vacías".to_string(),
                ));
            }
            if name.len() > MAX_NAME_LEN {
                return Err(AppError::ValidationError(format!(
                    "La clave '{}' supera el largo máximo de {} caracteres",
                    name, MAX_NAME_LEN
                )));
            }
            if value.len() > MAX_VALUE_LEN {
                return Err(AppError::ValidationError(format!(
                    "El valor de '{}' supera el largo máximo de {} caracteres",
                    name, MAX_VALUE_LEN
                )));
            }
        }

        self.repository.reconcile(incoming).await
    }
}
