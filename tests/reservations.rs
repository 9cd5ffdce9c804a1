//! Reservas: inventario de asientos protegido contra sobreventa

mod common;

use rumbo_backend::controllers::reservation_controller::ReservationController;
use rumbo_backend::controllers::trip_controller::TripController;
use rumbo_backend::dto::reservation_dto::ReserveSeatsRequest;
use rumbo_backend::utils::errors::AppError;
use uuid::Uuid;

fn reserve_request(user_id: Uuid, seats: i64) -> ReserveSeatsRequest {
    ReserveSeatsRequest { user_id, seats }
}

#[tokio::test]
async fn reserving_decrements_available_seats() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let bruno = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 3).await;

    let controller = ReservationController::new(pool.clone());
    let reservation = controller
        .reserve(trip.id, reserve_request(bruno.id, 2))
        .await
        .unwrap();

    assert_eq!(reservation.trip_id, trip.id);
    assert_eq!(reservation.seats, 2);

    let updated = TripController::new(pool.clone())
        .get_by_id(trip.id)
        .await
        .unwrap();
    assert_eq!(updated.available_seats, 1);
}

#[tokio::test]
async fn overselling_is_rejected_with_capacity_error() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let bruno = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let carla = common::register_user(&pool, "Carla Pasajera", "carla@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 2).await;

    let controller = ReservationController::new(pool.clone());

    // A reserva los 2 lugares
    controller
        .reserve(trip.id, reserve_request(bruno.id, 2))
        .await
        .unwrap();

    // B pide 1 y no queda nada
    let err = controller
        .reserve(trip.id, reserve_request(carla.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Capacity(_)));

    let updated = TripController::new(pool.clone())
        .get_by_id(trip.id)
        .await
        .unwrap();
    assert_eq!(updated.available_seats, 0);
}

#[tokio::test]
async fn reserve_validates_input_and_existence() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let bruno = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 2).await;
    let controller = ReservationController::new(pool.clone());

    // Cero asientos es un error de validación
    assert!(matches!(
        controller.reserve(trip.id, reserve_request(bruno.id, 0)).await,
        Err(AppError::Validation(_))
    ));

    // Viaje inexistente
    assert!(matches!(
        controller
            .reserve(Uuid::new_v4(), reserve_request(bruno.id, 1))
            .await,
        Err(AppError::NotFound(_))
    ));

    // Usuario inexistente
    assert!(matches!(
        controller
            .reserve(trip.id, reserve_request(Uuid::new_v4(), 1))
            .await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn driver_cannot_reserve_own_trip() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 2).await;
    let controller = ReservationController::new(pool.clone());

    let err = controller
        .reserve(trip.id, reserve_request(driver.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // El inventario no se tocó
    let updated = TripController::new(pool.clone())
        .get_by_id(trip.id)
        .await
        .unwrap();
    assert_eq!(updated.available_seats, 2);
}

#[tokio::test]
async fn duplicate_reservation_conflicts_and_rolls_back_inventory() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let bruno = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 3).await;
    let controller = ReservationController::new(pool.clone());

    controller
        .reserve(trip.id, reserve_request(bruno.id, 1))
        .await
        .unwrap();

    let err = controller
        .reserve(trip.id, reserve_request(bruno.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // El intento fallido no descuenta asientos
    let updated = TripController::new(pool.clone())
        .get_by_id(trip.id)
        .await
        .unwrap();
    assert_eq!(updated.available_seats, 2);
}

#[tokio::test]
async fn reservations_only_on_pending_trips() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let bruno = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 2).await;

    TripController::new(pool.clone())
        .start(trip.id, driver.id)
        .await
        .unwrap();

    let err = ReservationController::new(pool.clone())
        .reserve(trip.id, reserve_request(bruno.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[tokio::test]
async fn concurrent_reservations_never_oversell() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 2).await;

    let mut passengers = Vec::new();
    for i in 0..4 {
        let email = format!("pasajero{}@rumbo.app", i);
        passengers.push(common::register_user(&pool, "Pasajero", &email).await);
    }

    let mut handles = Vec::new();
    for passenger in &passengers {
        let pool = pool.clone();
        let trip_id = trip.id;
        let user_id = passenger.id;
        handles.push(tokio::spawn(async move {
            ReservationController::new(pool)
                .reserve(trip_id, ReserveSeatsRequest { user_id, seats: 1 })
                .await
        }));
    }

    let mut accepted = 0;
    let mut capacity_errors = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(AppError::Capacity(_)) => capacity_errors += 1,
            Err(e) => panic!("error inesperado: {:?}", e),
        }
    }

    // capacidad original - asientos vendidos == asientos restantes, nunca negativo
    assert_eq!(accepted, 2);
    assert_eq!(capacity_errors, 2);

    let updated = TripController::new(pool.clone())
        .get_by_id(trip.id)
        .await
        .unwrap();
    assert_eq!(updated.available_seats, 0);
}

#[tokio::test]
async fn passenger_roster_includes_user_data() {
    let pool = common::setup_pool().await;
    let driver = common::register_user(&pool, "Ana Conductora", "ana@rumbo.app").await;
    let bruno = common::register_user(&pool, "Bruno Pasajero", "bruno@rumbo.app").await;
    let trip = common::create_trip(&pool, driver.id, 3).await;
    let controller = ReservationController::new(pool.clone());

    controller
        .reserve(trip.id, reserve_request(bruno.id, 2))
        .await
        .unwrap();

    let roster = controller.list_passengers(trip.id).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, bruno.id);
    assert_eq!(roster[0].name, "Bruno Pasajero");
    assert_eq!(roster[0].seats, 2);

    // Viaje inexistente
    assert!(matches!(
        controller.list_passengers(Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
}
