//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip y su máquina de estados.
//! Mapea exactamente al schema SQLite con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del viaje - ciclo de vida monótono
///
/// pending → in_progress → completed, sin transiciones inversas.
/// `completed` es terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TripState {
    Pending,
    InProgress,
    Completed,
}

impl TripState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripState::Pending => "pending",
            TripState::InProgress => "in_progress",
            TripState::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TripState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
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

impl Trip {
    /// Verificar si un usuario es el conductor dueño del viaje
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.driver_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_state_as_str() {
        assert_eq!(TripState::Pending.as_str(), "pending");
        assert_eq!(TripState::InProgress.as_str(), "in_progress");
        assert_eq!(TripState::Completed.as_str(), "completed");
    }

    #[test]
    fn test_trip_state_serde_uses_snake_case() {
        let serialized = serde_json::to_string(&TripState::InProgress).unwrap();
        assert_eq!(serialized, "\"in_progress\"");

        let parsed: TripState = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TripState::Completed);
    }
}
