use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::user::User;
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: String,
        email: String,
        phone: Option<String>,
        dni: Option<String>,
        password_hash: String,
    ) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4(),
            full_name,
            email,
            phone,
            dni,
            password_hash,
            about: None,
            vehicle: None,
            vehicle_details: None,
            rating_average: 0.0,
            rating_count: 0,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, full_name, email, phone, dni, password_hash, about, vehicle, vehicle_details, rating_average, rating_count, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.dni)
        .bind(&user.password_hash)
        .bind(&user.about)
        .bind(&user.vehicle)
        .bind(&user.vehicle_details)
        .bind(user.rating_average)
        .bind(user.rating_count)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<String>,
        phone: Option<String>,
        about: Option<String>,
        vehicle: Option<String>,
        vehicle_details: Option<String>,
    ) -> Result<User, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        sqlx::query(
            r#"
            UPDATE users
            SET full_name = ?, phone = ?, about = ?, vehicle = ?, vehicle_details = ?
            WHERE id = ?
            "#,
        )
        .bind(full_name.unwrap_or(current.full_name))
        .bind(phone.or(current.phone))
        .bind(about.or(current.about))
        .bind(vehicle.or(current.vehicle))
        .bind(vehicle_details.or(current.vehicle_details))
        .bind(id)
        .execute(&self.pool)
        .await?;

        let updated = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(updated)
    }

    pub async fn update_password_by_email(
        &self,
        email: &str,
        password_hash: String,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE email = ?")
            .bind(password_hash)
            .bind(email)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        Ok(())
    }
}
