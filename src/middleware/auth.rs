//! Middleware de autenticación JWT
//!
//! Gate de las rutas de administración: cada request debe traer un
//! Bearer token emitido por el servidor, con firma y expiración
//! válidas. Nada del lado del cliente decide el acceso.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Admin autenticado que se inyecta en las extensions de la request
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub email: String,
}

/// Middleware de autenticación para el panel admin
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    // Decodificar y validar JWT
    let jwt = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt)?;

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    // Inyectar admin autenticado en las extensions
    request.extensions_mut().insert(AuthenticatedAdmin {
        admin_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}
