use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::reservation_dto::{PassengerResponse, ReservationResponse, ReserveSeatsRequest};
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct ReservationController {
    repository: ReservationRepository,
    trip_repository: TripRepository,
    user_repository: UserRepository,
}

impl ReservationController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ReservationRepository::new(pool.clone()),
            trip_repository: TripRepository::new(pool.clone()),
            user_repository: UserRepository::new(pool),
        }
    }

    pub async fn reserve(
        &self,
        trip_id: Uuid,
        request: ReserveSeatsRequest,
    ) -> Result<ReservationResponse, AppError> {
        request.validate()?;

        // Verificar que el pasajero exista antes de tocar inventario
        self.user_repository
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let reservation = self
            .repository
            .reserve(trip_id, request.user_id, request.seats)
            .await?;

        Ok(reservation.into())
    }

    pub async fn list_passengers(
        &self,
        trip_id: Uuid,
    ) -> Result<Vec<PassengerResponse>, AppError> {
        self.trip_repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let rows = self.repository.passengers(trip_id).await?;

        Ok(rows.into_iter().map(PassengerResponse::from).collect())
    }
}
