//! DTOs de usuarios y envelope genérico de la API

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::User;

lazy_static! {
    static ref DNI_REGEX: Regex = Regex::new(r"^\d{7,9}$").unwrap();
}

/// Request para registrar un usuario
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(length(min = 2, max = 100, message = "El nombre debe tener entre 2 y 100 caracteres"))]
    pub full_name: String,

    #[validate(email(message = "El email no es válido"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "El teléfono debe tener entre 6 y 20 caracteres"))]
    pub phone: Option<String>,

    #[validate(regex(path = "DNI_REGEX", message = "El DNI debe tener entre 7 y 9 dígitos"))]
    pub dni: Option<String>,

    #[validate(length(min = 6, max = 72, message = "La contraseña debe tener entre 6 y 72 caracteres"))]
    pub password: String,
}

/// Request de login
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request para editar el perfil
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: Option<String>,

    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 500))]
    pub about: Option<String>,

    #[validate(length(max = 100))]
    pub vehicle: Option<String>,

    #[validate(length(max = 200))]
    pub vehicle_details: Option<String>,
}

/// Request para restablecer la contraseña (flujo "olvidé mi contraseña")
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 6, max = 72, message = "La contraseña debe tener entre 6 y 72 caracteres"))]
    pub password: String,
}

/// Response de usuario (sin password)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dni: Option<String>,
    pub about: Option<String>,
    pub vehicle: Option<String>,
    pub vehicle_details: Option<String>,
    pub rating_average: f64,
    pub rating_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            dni: user.dni,
            about: user.about,
            vehicle: user.vehicle,
            vehicle_details: user.vehicle_details,
            rating_average: user.rating_average,
            rating_count: user.rating_count,
            created_at: user.created_at,
        }
    }
}

/// Response genérica
///
/// El campo canónico de payload es `data`: todos los endpoints exitosos
/// responden `{ success, message?, data }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
