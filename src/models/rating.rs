//! Modelo de Rating
//!
//! Calificación de 1 a 5 que un participante de un viaje finalizado
//! deja para el otro. La tripla (trip, author, target) es única.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub author_id: Uuid,
    pub target_id: Uuid,
    pub score: i64,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
