use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{CreateTripRequest, TripFilters, TripResponse};
use crate::models::trip::{Trip, TripState};
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::trip_filter::{self, TripSearchCriteria};
use crate::utils::errors::{field_error, AppError};
use crate::utils::validation::{validate_date, validate_not_empty, validate_time};

pub struct TripController {
    repository: TripRepository,
    user_repository: UserRepository,
}

impl TripController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            user_repository: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> Result<TripResponse, AppError> {
        request.validate()?;

        validate_not_empty(&request.origin).map_err(|e| field_error("origin", e))?;
        validate_not_empty(&request.destination).map_err(|e| field_error("destination", e))?;
        let date = validate_date(&request.date).map_err(|e| field_error("date", e))?;
        validate_time(&request.time).map_err(|e| field_error("time", e))?;

        // Verificar que el conductor exista antes de publicar
        self.user_repository
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        let trip = Trip {
            id: Uuid::new_v4(),
            driver_id: request.driver_id,
            origin: request.origin.trim().to_string(),
            destination: request.destination.trim().to_string(),
            date,
            time: request.time,
            available_seats: request.available_seats,
            price_per_person: request.price_per_person,
            vehicle: request.vehicle,
            music: request.music,
            pets: request.pets,
            children: request.children,
            luggage: request.luggage,
            notes: request.notes,
            state: TripState::Pending,
            created_at: Utc::now(),
        };

        self.repository.create(&trip).await?;

        Ok(trip.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        Ok(trip.into())
    }

    /// Iniciar un viaje: pending → in_progress, solo el conductor dueño
    pub async fn start(&self, id: Uuid, requester_id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if !trip.is_owned_by(requester_id) {
            return Err(AppError::Forbidden(
                "Solo el conductor puede iniciar el viaje".to_string(),
            ));
        }

        match trip.state {
            TripState::Pending => {}
            TripState::InProgress => {
                return Err(AppError::InvalidState("El viaje ya fue iniciado".to_string()))
            }
            TripState::Completed => {
                return Err(AppError::InvalidState("El viaje ya finalizó".to_string()))
            }
        }

        let updated = self
            .repository
            .update_state(id, TripState::Pending, TripState::InProgress)
            .await?;
        if updated == 0 {
            // Otro request ganó la carrera entre el fetch y el update
            return Err(AppError::InvalidState("El viaje ya fue iniciado".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Finalizar un viaje: in_progress → completed (estado terminal)
    pub async fn complete(&self, id: Uuid, requester_id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if !trip.is_owned_by(requester_id) {
            return Err(AppError::Forbidden(
                "Solo el conductor puede finalizar el viaje".to_string(),
            ));
        }

        match trip.state {
            TripState::InProgress => {}
            TripState::Pending => {
                return Err(AppError::InvalidState(
                    "El viaje todavía no fue iniciado".to_string(),
                ))
            }
            TripState::Completed => {
                return Err(AppError::InvalidState("El viaje ya finalizó".to_string()))
            }
        }

        let updated = self
            .repository
            .update_state(id, TripState::InProgress, TripState::Completed)
            .await?;
        if updated == 0 {
            return Err(AppError::InvalidState("El viaje ya finalizó".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Listar viajes aplicando el filtro puro sobre el snapshot ordenado
    pub async fn list(&self, filters: TripFilters) -> Result<Vec<TripResponse>, AppError> {
        let criteria = self.build_criteria(filters)?;
        let trips = self.repository.list_all().await?;
        let filtered = trip_filter::filter_trips(trips, &criteria);

        Ok(filtered.into_iter().map(TripResponse::from).collect())
    }

    pub async fn list_by_driver(&self, driver_id: Uuid) -> Result<Vec<TripResponse>, AppError> {
        let trips = self.repository.list_by_driver(driver_id).await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    fn build_criteria(&self, filters: TripFilters) -> Result<TripSearchCriteria, AppError> {
        let date = match filters.date.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                Some(validate_date(raw).map_err(|e| field_error("date", e))?)
            }
            _ => None,
        };

        Ok(TripSearchCriteria {
            origin: filters.origin.filter(|s| !s.trim().is_empty()),
            destination: filters.destination.filter(|s| !s.trim().is_empty()),
            date,
            music: filters.music.unwrap_or(false),
            pets: filters.pets.unwrap_or(false),
            children: filters.children.unwrap_or(false),
            luggage: filters.luggage.unwrap_or(false),
        })
    }
}
