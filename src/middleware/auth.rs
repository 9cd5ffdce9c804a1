//! Identidad del solicitante
//!
//! El diseño de sesiones/JWT está fuera del alcance del servicio: la
//! identidad viaja como contexto explícito por request en el header
//! `x-user-id`, nunca como estado ambiente.

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::utils::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Extraer el id del solicitante del header `x-user-id`
pub fn require_user_id(headers: &HeaderMap) -> Result<Uuid, AppError> {
    let value = headers.get(USER_ID_HEADER).ok_or_else(|| {
        AppError::Unauthorized(format!("Falta el header {}", USER_ID_HEADER))
    })?;

    let value = value.to_str().map_err(|_| {
        AppError::Unauthorized(format!("Header {} inválido", USER_ID_HEADER))
    })?;

    Uuid::parse_str(value).map_err(|_| {
        AppError::Unauthorized(format!("Header {} inválido: '{}'", USER_ID_HEADER, value))
    })
}
