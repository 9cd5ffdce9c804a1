//! Modelo de User
//!
//! Un usuario no tiene rol fijo: puede actuar como conductor o pasajero
//! según el viaje. El rating agregado se recalcula al recibir calificaciones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dni: Option<String>,
    pub password_hash: String,
    pub about: Option<String>,
    pub vehicle: Option<String>,
    pub vehicle_details: Option<String>,
    pub rating_average: f64,
    pub rating_count: i64,
    pub created_at: DateTime<Utc>,
}
