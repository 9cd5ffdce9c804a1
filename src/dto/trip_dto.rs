//! DTOs de viajes

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{Trip, TripState};

/// Request para publicar un nuevo viaje
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub driver_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "El origen es requerido"))]
    pub origin: String,

    #[validate(length(min = 1, max = 200, message = "El destino es requerido"))]
    pub destination: String,

    /// Fecha en formato YYYY-MM-DD
    pub date: String,

    /// Hora en formato HH:MM
    pub time: String,

    #[validate(range(min = 1, message = "Debe ofrecerse al menos un asiento"))]
    pub available_seats: i64,

    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub price_per_person: f64,

    #[validate(length(max = 100))]
    pub vehicle: Option<String>,

    #[serde(default)]
    pub music: bool,
    #[serde(default)]
    pub pets: bool,
    #[serde(default)]
    pub children: bool,
    #[serde(default)]
    pub luggage: bool,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Filtros de búsqueda de viajes (query params de GET /api/trips)
///
/// Un flag de amenity en `false` o ausente no restringe nada; solo
/// `true` exige que el viaje lo ofrezca.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripFilters {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub music: Option<bool>,
    pub pets: Option<bool>,
    pub children: Option<bool>,
    pub luggage: Option<bool>,
}

/// Response de viaje para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub time: String,
    pub available_seats: i64,
    pub price_per_person: f64,
    pub vehicle: Option<String>,
    pub music: bool,
    pub pets: bool,
    pub children: bool,
    pub luggage: bool,
    pub notes: Option<String>,
    pub state: TripState,
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            driver_id: trip.driver_id,
            origin: trip.origin,
            destination: trip.destination,
            date: trip.date,
            time: trip.time,
            available_seats: trip.available_seats,
            price_per_person: trip.price_per_person,
            vehicle: trip.vehicle,
            music: trip.music,
            pets: trip.pets,
            children: trip.children,
            luggage: trip.luggage,
            notes: trip.notes,
            state: trip.state,
            created_at: trip.created_at,
        }
    }
}
