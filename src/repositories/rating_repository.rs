use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::rating::Rating;
use crate::models::trip::Trip;
use crate::utils::errors::{is_unique_violation, AppError};

pub struct RatingRepository {
    pool: SqlitePool,
}

impl RatingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registrar una calificación y recalcular el agregado del calificado.
    ///
    /// La tripla (trip, author, target) tiene constraint UNIQUE: el segundo
    /// intento devuelve Conflict y el agregado refleja una sola contribución.
    /// Política de agregación: media aritmética de todos los scores recibidos.
    pub async fn submit(&self, rating: &Rating) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let insert = sqlx::query(
            r#"
            INSERT INTO ratings (id, trip_id, author_id, target_id, score, comment, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(rating.id)
        .bind(rating.trip_id)
        .bind(rating.author_id)
        .bind(rating.target_id)
        .bind(rating.score)
        .bind(&rating.comment)
        .bind(rating.created_at)
        .execute(&mut *tx)
        .await;

        match insert {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(AppError::Conflict(
                    "Ya calificaste a este usuario por este viaje".to_string(),
                ))
            }
            Err(e) => return Err(e.into()),
        }

        sqlx::query(
            r#"
            UPDATE users
            SET rating_average = (SELECT AVG(score) FROM ratings WHERE target_id = ?1),
                rating_count = (SELECT COUNT(*) FROM ratings WHERE target_id = ?1)
            WHERE id = ?1
            "#,
        )
        .bind(rating.target_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Calificaciones recibidas por un usuario, más recientes primero
    pub async fn received_by(&self, target_id: Uuid) -> Result<Vec<Rating>, AppError> {
        let ratings = sqlx::query_as::<_, Rating>(
            "SELECT * FROM ratings WHERE target_id = ? ORDER BY created_at DESC, id",
        )
        .bind(target_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ratings)
    }

    /// Viajes finalizados donde el usuario viajó como pasajero y todavía
    /// no calificó al conductor
    pub async fn completed_trips_unrated_by_passenger(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT t.*
            FROM trips t
            JOIN reservations r ON r.trip_id = t.id
            WHERE r.user_id = ?1
              AND t.state = 'completed'
              AND NOT EXISTS (
                  SELECT 1 FROM ratings g
                  WHERE g.trip_id = t.id
                    AND g.author_id = ?1
                    AND g.target_id = t.driver_id
              )
            ORDER BY t.created_at DESC, t.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }
}
