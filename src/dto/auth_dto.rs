use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::admin_user::AdminUser;

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

// Perfil del admin autenticado (sin hash de contraseña)
#[derive(Debug, Serialize)]
pub struct AdminProfileResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub last_login: Option<String>,
}

impl From<AdminUser> for AdminProfileResponse {
    fn from(admin: AdminUser) -> Self {
        Self {
            id: admin.id.to_string(),
            email: admin.email,
            full_name: admin.full_name,
            role: admin.role,
            last_login: admin.last_login.map(|t| t.to_rfc3339()),
        }
    }
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub admin: AdminProfileResponse,
}

impl LoginResponse {
    pub fn new(token: String, admin: AdminProfileResponse) -> Self {
        Self {
            success: true,
            token,
            admin,
        }
    }
}
