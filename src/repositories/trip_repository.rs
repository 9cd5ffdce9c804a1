use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::trip::{Trip, TripState};
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: SqlitePool,
}

impl TripRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, trip: &Trip) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO trips (id, driver_id, origin, destination, date, time, available_seats, price_per_person, vehicle, music, pets, children, luggage, notes, state, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trip.id)
        .bind(trip.driver_id)
        .bind(&trip.origin)
        .bind(&trip.destination)
        .bind(trip.date)
        .bind(&trip.time)
        .bind(trip.available_seats)
        .bind(trip.price_per_person)
        .bind(&trip.vehicle)
        .bind(trip.music)
        .bind(trip.pets)
        .bind(trip.children)
        .bind(trip.luggage)
        .bind(&trip.notes)
        .bind(trip.state)
        .bind(trip.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    /// Snapshot completo ordenado por recencia (determinístico)
    pub async fn list_all(&self) -> Result<Vec<Trip>, AppError> {
        let trips =
            sqlx::query_as::<_, Trip>("SELECT * FROM trips ORDER BY created_at DESC, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(trips)
    }

    pub async fn list_by_driver(&self, driver_id: Uuid) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE driver_id = ? ORDER BY created_at DESC, id",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn list_completed_by_driver(&self, driver_id: Uuid) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE driver_id = ? AND state = 'completed' ORDER BY created_at DESC, id",
        )
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Transición de estado con guarda: solo aplica si el viaje sigue en `from`.
    ///
    /// Devuelve la cantidad de filas afectadas; 0 significa que otro request
    /// ganó la carrera y el estado ya no es `from`.
    pub async fn update_state(
        &self,
        id: Uuid,
        from: TripState,
        to: TripState,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE trips SET state = ? WHERE id = ? AND state = ?")
            .bind(to)
            .bind(id)
            .bind(from)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
