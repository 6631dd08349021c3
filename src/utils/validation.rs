//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! en los límites de la API, antes de tocar la base de datos.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::utils::errors::AppError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim()).map_err(|_| {
        AppError::ValidationError(format!("'{}' no es un identificador válido", value))
    })
}

/// Validar que un campo de texto no esté vacío
pub fn validate_not_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!(
            "El campo '{}' es requerido",
            field
        )));
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), AppError> {
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(AppError::ValidationError(format!(
            "'{}' no es un email válido",
            value
        )));
    }
    Ok(())
}

/// Validar formato de teléfono (básico: entre 8 y 15 dígitos)
pub fn validate_phone(value: &str) -> Result<(), AppError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !(8..=15).contains(&digits) {
        return Err(AppError::ValidationError(format!(
            "'{}' no es un teléfono válido",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(validate_uuid(invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("brand", "BMW").is_ok());
        assert!(validate_not_empty("brand", "").is_err());
        assert!(validate_not_empty("brand", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("cliente@vvsmotors.cl").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
        assert!(validate_email("test@domain").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+56 9 1234 5678").is_ok());
        assert!(validate_phone("912345678").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("12345678901234567890").is_err());
    }
}
