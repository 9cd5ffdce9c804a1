//! Calificaciones post-viaje: membresía, unicidad y agregado

mod common;

use rumbo_backend::controllers::rating_controller::RatingController;
use rumbo_backend::controllers::reservation_controller::ReservationController;
use rumbo_backend::controllers::user_controller::UserController;
use rumbo_backend::dto::rating_dto::{RatingRole, SubmitRatingRequest};
use rumbo_backend::dto::reservation_dto::ReserveSeatsRequest;
use rumbo_backend::dto::trip_dto::TripResponse;
use rumbo_backend::dto::user_dto::UserResponse;
use rumbo_backend::utils::errors::AppError;
use sqlx::SqlitePool;
use uuid::Uuid;

fn rating_request(trip_id: Uuid, author_id: Uuid, score: i64) -> SubmitRatingRequest {
    SubmitRatingRequest {
        trip_id,
        author_id,
        score,
        comment: Some("Muy buen viaje".to_string()),
    }
}

/// Conductor + pasajero con reserva sobre un viaje finalizado
async fn completed_trip_with_passenger(
    pool: &SqlitePool,
) -> (UserResponse, UserResponse, TripResponse) {
    let driver = common::register_user(pool, "Ana Conductora", "ana@rumbo.app").await;
    let passenger = common::register_user(pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let trip = common::create_trip(pool, driver.id, 2).await;

    ReservationController::new(pool.clone())
        .reserve(
            trip.id,
            ReserveSeatsRequest {
                user_id: passenger.id,
                seats: 1,
            },
        )
        .await
        .unwrap();

    let trip_controller = rumbo_backend::controllers::trip_controller::TripController::new(pool.clone());
    trip_controller.start(trip.id, driver.id).await.unwrap();
    let trip = trip_controller.complete(trip.id, driver.id).await.unwrap();

    (driver, passenger, trip)
}

#[tokio::test]
async fn passenger_rates_driver_and_aggregate_updates() {
    let pool = common::setup_pool().await;
    let (driver, passenger, trip) = completed_trip_with_passenger(&pool).await;
    let controller = RatingController::new(pool.clone());

    let rating = controller
        .submit(driver.id, rating_request(trip.id, passenger.id, 5))
        .await
        .unwrap();
    assert_eq!(rating.score, 5);
    assert_eq!(rating.target_id, driver.id);

    let profile = UserController::new(pool.clone())
        .get_by_id(driver.id)
        .await
        .unwrap();
    assert_eq!(profile.rating_count, 1);
    assert!((profile.rating_average - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn duplicate_rating_conflicts_and_counts_once() {
    let pool = common::setup_pool().await;
    let (driver, passenger, trip) = completed_trip_with_passenger(&pool).await;
    let controller = RatingController::new(pool.clone());

    controller
        .submit(driver.id, rating_request(trip.id, passenger.id, 5))
        .await
        .unwrap();

    let err = controller
        .submit(driver.id, rating_request(trip.id, passenger.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // El agregado refleja exactamente una contribución
    let profile = UserController::new(pool.clone())
        .get_by_id(driver.id)
        .await
        .unwrap();
    assert_eq!(profile.rating_count, 1);
    assert!((profile.rating_average - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn rating_requires_completed_trip() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let passenger = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 2).await;

    ReservationController::new(pool.clone())
        .reserve(
            trip.id,
            ReserveSeatsRequest {
                user_id: passenger.id,
                seats: 1,
            },
        )
        .await
        .unwrap();

    let err = RatingController::new(pool.clone())
        .submit(driver.id, rating_request(trip.id, passenger.id, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[tokio::test]
async fn score_outside_range_is_rejected() {
    let pool = common::setup_pool().await;
    let (driver, passenger, trip) = completed_trip_with_passenger(&pool).await;
    let controller = RatingController::new(pool.clone());

    for score in [0, 6] {
        let err = controller
            .submit(driver.id, rating_request(trip.id, passenger.id, score))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[tokio::test]
async fn only_trip_participants_may_rate_each_other() {
    let pool = common::setup_pool().await;
    let (driver, passenger, trip) = completed_trip_with_passenger(&pool).await;
    let outsider = common::register_user(&pool, "Carla Ajena", "carla@rumbo.app").await;
    let controller = RatingController::new(pool.clone());

    // Alguien que no viajó no puede calificar al conductor
    let err = controller
        .submit(driver.id, rating_request(trip.id, outsider.id, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // Ni el pasajero puede calificar a alguien que no viajó
    let err = controller
        .submit(outsider.id, rating_request(trip.id, passenger.id, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[tokio::test]
async fn driver_rates_passenger_back() {
    let pool = common::setup_pool().await;
    let (driver, passenger, trip) = completed_trip_with_passenger(&pool).await;
    let controller = RatingController::new(pool.clone());

    let rating = controller
        .submit(passenger.id, rating_request(trip.id, driver.id, 4))
        .await
        .unwrap();
    assert_eq!(rating.target_id, passenger.id);

    let profile = UserController::new(pool.clone())
        .get_by_id(passenger.id)
        .await
        .unwrap();
    assert_eq!(profile.rating_count, 1);
    assert!((profile.rating_average - 4.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn aggregate_is_the_mean_of_received_scores() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let bruno = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let carla = common::register_user(&pool, "Carla Pasajera", "carla@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 2).await;

    let reservations = ReservationController::new(pool.clone());
    for passenger in [&bruno, &carla] {
        reservations
            .reserve(
                trip.id,
                ReserveSeatsRequest {
                    user_id: passenger.id,
                    seats: 1,
                },
            )
            .await
            .unwrap();
    }

    let trips = rumbo_backend::controllers::trip_controller::TripController::new(pool.clone());
    trips.start(trip.id, driver.id).await.unwrap();
    trips.complete(trip.id, driver.id).await.unwrap();

    let controller = RatingController::new(pool.clone());
    controller
        .submit(driver.id, rating_request(trip.id, bruno.id, 5))
        .await
        .unwrap();
    controller
        .submit(driver.id, rating_request(trip.id, carla.id, 4))
        .await
        .unwrap();

    let profile = UserController::new(pool.clone())
        .get_by_id(driver.id)
        .await
        .unwrap();
    assert_eq!(profile.rating_count, 2);
    assert!((profile.rating_average - 4.5).abs() < 1e-9);
}

#[tokio::test]
async fn pending_ratings_shrink_as_ratings_land() {
    let pool = common::setup_pool().await;
    let (driver, passenger, trip) = completed_trip_with_passenger(&pool).await;
    let controller = RatingController::new(pool.clone());

    // El pasajero tiene al conductor pendiente
    let pending = controller
        .pending(passenger.id, RatingRole::Passenger)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].trip.id, trip.id);
    assert_eq!(pending[0].counterparts[0].id, driver.id);

    // El conductor tiene al pasajero pendiente, con sus asientos
    let pending = controller
        .pending(driver.id, RatingRole::Driver)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].counterparts.len(), 1);
    assert_eq!(pending[0].counterparts[0].id, passenger.id);
    assert_eq!(pending[0].counterparts[0].seats, Some(1));

    // Una vez calificado, el ítem desaparece de la lista del autor
    controller
        .submit(driver.id, rating_request(trip.id, passenger.id, 5))
        .await
        .unwrap();
    let pending = controller
        .pending(passenger.id, RatingRole::Passenger)
        .await
        .unwrap();
    assert!(pending.is_empty());

    // La lista del conductor no se ve afectada por la calificación del pasajero
    let pending = controller
        .pending(driver.id, RatingRole::Driver)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    controller
        .submit(passenger.id, rating_request(trip.id, driver.id, 5))
        .await
        .unwrap();
    let pending = controller
        .pending(driver.id, RatingRole::Driver)
        .await
        .unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn received_ratings_are_listed_newest_first() {
    let pool = common::setup_pool().await;
    let (driver, passenger, trip) = completed_trip_with_passenger(&pool).await;
    let controller = RatingController::new(pool.clone());

    controller
        .submit(driver.id, rating_request(trip.id, passenger.id, 5))
        .await
        .unwrap();

    let received = controller.list_for_user(driver.id).await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].author_id, passenger.id);
    assert_eq!(received[0].comment.as_deref(), Some("Muy buen viaje"));
}
