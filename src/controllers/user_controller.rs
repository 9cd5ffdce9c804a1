use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{
    LoginRequest, RegisterUserRequest, UpdatePasswordRequest, UpdateProfileRequest, UserResponse,
};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let password_hash =
            hash(&request.password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?;

        let user = self
            .repository
            .create(
                request.full_name.trim().to_string(),
                request.email.trim().to_lowercase(),
                request.phone,
                request.dni,
                password_hash,
            )
            .await?;

        Ok(user.into())
    }

    /// Login por email y contraseña.
    ///
    /// Email desconocido y contraseña incorrecta devuelven el mismo error.
    pub async fn login(&self, request: LoginRequest) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email.trim().to_lowercase())
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Email o contraseña incorrectos".to_string())
            })?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !valid {
            return Err(AppError::Unauthorized(
                "Email o contraseña incorrectos".to_string(),
            ));
        }

        Ok(user.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user.into())
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .update_profile(
                id,
                request.full_name,
                request.phone,
                request.about,
                request.vehicle,
                request.vehicle_details,
            )
            .await?;

        Ok(user.into())
    }

    /// Restablecer la contraseña de un usuario identificado por email
    pub async fn update_password(
        &self,
        email: &str,
        request: UpdatePasswordRequest,
    ) -> Result<(), AppError> {
        request.validate()?;

        let password_hash =
            hash(&request.password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?;

        self.repository
            .update_password_by_email(&email.trim().to_lowercase(), password_hash)
            .await
    }
}
