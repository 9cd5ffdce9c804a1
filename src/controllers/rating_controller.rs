use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::rating_dto::{
    PendingRatingResponse, RatingCounterpart, RatingResponse, RatingRole, SubmitRatingRequest,
};
use crate::models::rating::Rating;
use crate::models::trip::TripState;
use crate::repositories::rating_repository::RatingRepository;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct RatingController {
    repository: RatingRepository,
    reservation_repository: ReservationRepository,
    trip_repository: TripRepository,
    user_repository: UserRepository,
}

impl RatingController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RatingRepository::new(pool.clone()),
            reservation_repository: ReservationRepository::new(pool.clone()),
            trip_repository: TripRepository::new(pool.clone()),
            user_repository: UserRepository::new(pool),
        }
    }

    /// Registrar una calificación entre dos participantes de un viaje finalizado
    pub async fn submit(
        &self,
        target_id: Uuid,
        request: SubmitRatingRequest,
    ) -> Result<RatingResponse, AppError> {
        request.validate()?;

        let trip = self
            .trip_repository
            .find_by_id(request.trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        self.user_repository
            .find_by_id(request.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Autor de la calificación no encontrado".to_string()))?;
        self.user_repository
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario a calificar no encontrado".to_string()))?;

        if trip.state != TripState::Completed {
            return Err(AppError::InvalidState(
                "Solo se puede calificar un viaje finalizado".to_string(),
            ));
        }

        // Solo conductor ↔ pasajero del mismo viaje pueden calificarse
        let passenger_ids = self.reservation_repository.passenger_ids(trip.id).await?;
        let author_rates_passenger =
            trip.driver_id == request.author_id && passenger_ids.contains(&target_id);
        let passenger_rates_driver =
            trip.driver_id == target_id && passenger_ids.contains(&request.author_id);

        if !(author_rates_passenger || passenger_rates_driver) {
            return Err(AppError::Forbidden(
                "Solo los participantes del viaje pueden calificarse entre sí".to_string(),
            ));
        }

        let rating = Rating {
            id: Uuid::new_v4(),
            trip_id: trip.id,
            author_id: request.author_id,
            target_id,
            score: request.score,
            comment: request.comment.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            created_at: Utc::now(),
        };

        self.repository.submit(&rating).await?;

        Ok(rating.into())
    }

    /// Calificaciones pendientes según el rol con el que viajó el usuario
    pub async fn pending(
        &self,
        user_id: Uuid,
        role: RatingRole,
    ) -> Result<Vec<PendingRatingResponse>, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        match role {
            RatingRole::Passenger => self.pending_as_passenger(user_id).await,
            RatingRole::Driver => self.pending_as_driver(user_id).await,
        }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<RatingResponse>, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let ratings = self.repository.received_by(user_id).await?;

        Ok(ratings.into_iter().map(RatingResponse::from).collect())
    }

    async fn pending_as_passenger(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PendingRatingResponse>, AppError> {
        let trips = self
            .repository
            .completed_trips_unrated_by_passenger(user_id)
            .await?;

        let mut pending = Vec::with_capacity(trips.len());
        for trip in trips {
            let Some(driver) = self.user_repository.find_by_id(trip.driver_id).await? else {
                continue;
            };
            pending.push(PendingRatingResponse {
                trip: trip.into(),
                counterparts: vec![RatingCounterpart {
                    id: driver.id,
                    full_name: driver.full_name,
                    seats: None,
                }],
            });
        }

        Ok(pending)
    }

    async fn pending_as_driver(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PendingRatingResponse>, AppError> {
        let trips = self.trip_repository.list_completed_by_driver(user_id).await?;

        let mut pending = Vec::new();
        for trip in trips {
            let unrated = self
                .reservation_repository
                .unrated_passengers(trip.id, user_id)
                .await?;
            if unrated.is_empty() {
                continue;
            }

            let counterparts = unrated
                .into_iter()
                .map(|row| RatingCounterpart {
                    id: row.user_id,
                    full_name: row.full_name,
                    seats: Some(row.seats),
                })
                .collect();

            pending.push(PendingRatingResponse {
                trip: trip.into(),
                counterparts,
            });
        }

        Ok(pending)
    }
}
