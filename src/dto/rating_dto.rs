//! DTOs de calificaciones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::TripResponse;
use crate::models::rating::Rating;

/// Request para calificar (POST /api/users/:id/ratings)
///
/// El target es el usuario del path; `tripId` viaja en el body porque
/// la membresía al viaje se verifica del lado del servicio.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub trip_id: Uuid,
    pub author_id: Uuid,

    #[validate(range(min = 1, max = 5, message = "El score debe estar entre 1 y 5"))]
    pub score: i64,

    #[validate(length(max = 500, message = "El comentario no puede superar los 500 caracteres"))]
    pub comment: Option<String>,
}

/// Rol desde el cual se consultan las calificaciones pendientes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingRole {
    Driver,
    Passenger,
}

/// Query params de GET /api/users/:id/pending-ratings
#[derive(Debug, Deserialize)]
pub struct PendingRatingsQuery {
    pub role: Option<RatingRole>,
}

/// Response de calificación
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub author_id: Uuid,
    pub target_id: Uuid,
    pub score: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            trip_id: rating.trip_id,
            author_id: rating.author_id,
            target_id: rating.target_id,
            score: rating.score,
            comment: rating.comment,
            created_at: rating.created_at,
        }
    }
}

/// Contraparte pendiente de calificar
///
/// Para un pasajero es el conductor (sin asientos); para un conductor,
/// cada pasajero aún sin calificar con los asientos que reservó.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCounterpart {
    pub id: Uuid,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i64>,
}

/// Viaje finalizado con calificaciones pendientes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRatingResponse {
    pub trip: TripResponse,
    pub counterparts: Vec<RatingCounterpart>,
}
