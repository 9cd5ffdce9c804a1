use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reservation_controller::ReservationController;
use crate::controllers::trip_controller::TripController;
use crate::dto::reservation_dto::{PassengerResponse, ReservationResponse, ReserveSeatsRequest};
use crate::dto::trip_dto::{CreateTripRequest, TripFilters, TripResponse};
use crate::dto::user_dto::ApiResponse;
use crate::middleware::auth::require_user_id;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip).get(list_trips))
        .route("/:id", get(get_trip))
        .route("/:id/start", patch(start_trip))
        .route("/:id/complete", patch(complete_trip))
        .route("/:id/select", post(reserve_seats))
        .route("/:id/passengers", get(list_passengers))
        .route("/users/:id", get(trips_by_driver))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trip = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        trip,
        "Viaje publicado exitosamente".to_string(),
    )))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(filters): Query<TripFilters>,
) -> Result<Json<ApiResponse<Vec<TripResponse>>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trips = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(trips)))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trip = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(trip)))
}

async fn start_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let requester_id = require_user_id(&headers)?;
    let controller = TripController::new(state.pool.clone());
    let trip = controller.start(id, requester_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        trip,
        "Viaje iniciado".to_string(),
    )))
}

async fn complete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let requester_id = require_user_id(&headers)?;
    let controller = TripController::new(state.pool.clone());
    let trip = controller.complete(id, requester_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        trip,
        "Viaje finalizado".to_string(),
    )))
}

async fn reserve_seats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReserveSeatsRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let reservation = controller.reserve(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        reservation,
        "Lugar reservado con éxito".to_string(),
    )))
}

async fn list_passengers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PassengerResponse>>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let passengers = controller.list_passengers(id).await?;
    Ok(Json(ApiResponse::success(passengers)))
}

async fn trips_by_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<TripResponse>>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let trips = controller.list_by_driver(id).await?;
    Ok(Json(ApiResponse::success(trips)))
}
