//! Modelo de Reservation
//!
//! Vincula un pasajero con un viaje y la cantidad de lugares reclamados.
//! Inmutable una vez creada; a lo sumo una reserva por pasajero por viaje.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub seats: i64,
    pub created_at: DateTime<Utc>,
}
