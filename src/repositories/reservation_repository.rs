use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::models::reservation::Reservation;
use crate::models::trip::{Trip, TripState};
use crate::utils::errors::{is_unique_violation, AppError};

/// Fila de pasajero con los datos de usuario ya unidos
#[derive(Debug, FromRow)]
pub struct PassengerRow {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dni: Option<String>,
    pub seats: i64,
}

pub struct ReservationRepository {
    pool: SqlitePool,
}

impl ReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reservar lugares descontando inventario en una única transacción.
    ///
    /// La autoridad del descuento es el UPDATE condicional: el chequeo de
    /// capacidad y el decremento son una sola sentencia, así que dos reservas
    /// concurrentes nunca pueden sobrevender el viaje.
    pub async fn reserve(
        &self,
        trip_id: Uuid,
        user_id: Uuid,
        seats: i64,
    ) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE trips
            SET available_seats = available_seats - ?1
            WHERE id = ?2 AND state = 'pending' AND available_seats >= ?1
            "#,
        )
        .bind(seats)
        .bind(trip_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = ?")
            .bind(trip_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        if trip.driver_id == user_id {
            return Err(AppError::Forbidden(
                "El conductor no puede reservar lugares en su propio viaje".to_string(),
            ));
        }

        if updated == 0 {
            if trip.state != TripState::Pending {
                return Err(AppError::InvalidState(
                    "Solo se pueden reservar lugares en viajes pendientes".to_string(),
                ));
            }
            return Err(AppError::Capacity(format!(
                "No hay lugares suficientes: se pidieron {} y quedan {}",
                seats, trip.available_seats
            )));
        }

        let reservation = Reservation {
            id: Uuid::new_v4(),
            trip_id,
            user_id,
            seats,
            created_at: Utc::now(),
        };

        let insert = sqlx::query(
            "INSERT INTO reservations (id, trip_id, user_id, seats, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(reservation.id)
        .bind(reservation.trip_id)
        .bind(reservation.user_id)
        .bind(reservation.seats)
        .bind(reservation.created_at)
        .execute(&mut *tx)
        .await;

        // Salir sin commit revierte también el descuento de asientos
        match insert {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(AppError::Conflict(
                    "Ya existe una reserva de este usuario en el viaje".to_string(),
                ))
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;

        Ok(reservation)
    }

    /// Roster de pasajeros de un viaje con sus datos de usuario
    pub async fn passengers(&self, trip_id: Uuid) -> Result<Vec<PassengerRow>, AppError> {
        let rows = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT r.user_id, u.full_name, u.email, u.phone, u.dni, r.seats
            FROM reservations r
            JOIN users u ON u.id = r.user_id
            WHERE r.trip_id = ?
            ORDER BY r.created_at, r.id
            "#,
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Ids de los pasajeros de un viaje
    pub async fn passenger_ids(&self, trip_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT user_id FROM reservations WHERE trip_id = ?",
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Pasajeros de un viaje que el conductor todavía no calificó
    pub async fn unrated_passengers(
        &self,
        trip_id: Uuid,
        driver_id: Uuid,
    ) -> Result<Vec<PassengerRow>, AppError> {
        let rows = sqlx::query_as::<_, PassengerRow>(
            r#"
            SELECT r.user_id, u.full_name, u.email, u.phone, u.dni, r.seats
            FROM reservations r
            JOIN users u ON u.id = r.user_id
            WHERE r.trip_id = ?1
              AND NOT EXISTS (
                  SELECT 1 FROM ratings g
                  WHERE g.trip_id = r.trip_id
                    AND g.author_id = ?2
                    AND g.target_id = r.user_id
              )
            ORDER BY r.created_at, r.id
            "#,
        )
        .bind(trip_id)
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
