//! Helpers compartidos por los tests de integración
//!
//! Cada test corre contra una base SQLite en memoria con el schema real.
//! El pool se limita a una conexión: con `sqlite::memory:` cada conexión
//! nueva vería una base distinta.

#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

use rumbo_backend::controllers::trip_controller::TripController;
use rumbo_backend::controllers::user_controller::UserController;
use rumbo_backend::database::connection::run_schema;
use rumbo_backend::dto::trip_dto::{CreateTripRequest, TripResponse};
use rumbo_backend::dto::user_dto::{RegisterUserRequest, UserResponse};

pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("no se pudo abrir la base en memoria");
    run_schema(&pool).await.expect("no se pudo aplicar el schema");
    pool
}

pub async fn register_user(pool: &SqlitePool, full_name: &str, email: &str) -> UserResponse {
    UserController::new(pool.clone())
        .register(RegisterUserRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: Some("1155550000".to_string()),
            dni: Some("30123456".to_string()),
            password: "secreta123".to_string(),
        })
        .await
        .expect("no se pudo registrar el usuario")
}

pub fn trip_request(driver_id: Uuid, seats: i64) -> CreateTripRequest {
    CreateTripRequest {
        driver_id,
        origin: "Rosario".to_string(),
        destination: "Córdoba".to_string(),
        date: "2025-09-01".to_string(),
        time: "08:30".to_string(),
        available_seats: seats,
        price_per_person: 8500.0,
        vehicle: Some("Fiat Cronos".to_string()),
        music: false,
        pets: false,
        children: false,
        luggage: false,
        notes: None,
    }
}

pub async fn create_trip(pool: &SqlitePool, driver_id: Uuid, seats: i64) -> TripResponse {
    TripController::new(pool.clone())
        .create(trip_request(driver_id, seats))
        .await
        .expect("no se pudo publicar el viaje")
}
