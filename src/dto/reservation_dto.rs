//! DTOs de reservas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::reservation::Reservation;
use crate::repositories::reservation_repository::PassengerRow;

/// Request para reservar lugares (POST /api/trips/:id/select)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSeatsRequest {
    pub user_id: Uuid,

    #[validate(range(min = 1, message = "Debe reservarse al menos un asiento"))]
    pub seats: i64,
}

/// Response de reserva
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub seats: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            trip_id: reservation.trip_id,
            user_id: reservation.user_id,
            seats: reservation.seats,
            created_at: reservation.created_at,
        }
    }
}

/// Response de pasajero de un viaje (GET /api/trips/:id/passengers)
///
/// La forma exacta que consume la pantalla de calificaciones.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dni: Option<String>,
    pub seats: i64,
}

impl From<PassengerRow> for PassengerResponse {
    fn from(row: PassengerRow) -> Self {
        Self {
            id: row.user_id,
            name: row.full_name,
            email: row.email,
            phone: row.phone,
            dni: row.dni,
            seats: row.seats,
        }
    }
}
