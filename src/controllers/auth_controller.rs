use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{AdminProfileResponse, LoginRequest, LoginResponse};
use crate::repositories::admin_user_repository::AdminUserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub struct AuthController {
    repository: AdminUserRepository,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            repository: AdminUserRepository::new(pool),
            jwt,
        }
    }

    /// Login del panel admin: verifica el hash bcrypt y emite un token
    /// firmado por el servidor. Ninguna decisión de acceso queda del
    /// lado del cliente.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        // Validar campos
        request.validate().map_err(AppError::Validation)?;

        // Buscar admin por email
        let admin = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        // Generar JWT token
        let token = generate_token(admin.id, &admin.email, &self.jwt)?;

        self.repository.update_last_login(admin.id).await?;

        Ok(LoginResponse::new(token, AdminProfileResponse::from(admin)))
    }

    /// Perfil del admin autenticado, releído de la base de datos para
    /// reflejar bajas o cambios de rol posteriores al token.
    pub async fn me(&self, admin_id: Uuid) -> Result<AdminProfileResponse, AppError> {
        let admin = self
            .repository
            .find_by_id(admin_id)
            .await?
            .filter(|admin| admin.active)
            .ok_or_else(|| AppError::Unauthorized("Sesión inválida".to_string()))?;

        Ok(AdminProfileResponse::from(admin))
    }

    /// Crea la cuenta admin inicial desde ADMIN_EMAIL/ADMIN_PASSWORD
    /// cuando la tabla está vacía. No hace nada si ya existen cuentas o
    /// si las variables no están definidas.
    pub async fn ensure_bootstrap_admin(
        &self,
        config: &EnvironmentConfig,
    ) -> Result<(), AppError> {
        let (Some(email), Some(password)) =
            (config.admin_email.clone(), config.admin_password.clone())
        else {
            return Ok(());
        };

        if self.repository.count().await? > 0 {
            return Ok(());
        }

        let password_hash = hash(&password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let admin = self
            .repository
            .create(email, password_hash, "Administrador".to_string())
            .await?;

        info!("👤 Cuenta admin inicial creada: {}", admin.email);
        Ok(())
    }
}
