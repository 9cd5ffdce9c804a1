use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::rating_controller::RatingController;
use crate::controllers::user_controller::UserController;
use crate::dto::rating_dto::{
    PendingRatingResponse, PendingRatingsQuery, RatingResponse, SubmitRatingRequest,
};
use crate::dto::user_dto::{
    ApiResponse, LoginRequest, RegisterUserRequest, UpdatePasswordRequest, UpdateProfileRequest,
    UserResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user))
        .route("/login", post(login_user))
        .route("/:id", get(get_user).put(update_profile))
        // El flujo de "olvidé mi contraseña" identifica al usuario por email
        .route("/:id/password", put(update_password))
        .route("/:id/ratings", post(submit_rating).get(list_ratings))
        .route("/:id/pending-ratings", get(pending_ratings))
}

async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let user = controller.register(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        user,
        "Usuario registrado exitosamente".to_string(),
    )))
}

async fn login_user(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let user = controller.login(request).await?;
    Ok(Json(ApiResponse::success(user)))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let user = controller.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let user = controller.update_profile(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        user,
        "Perfil actualizado".to_string(),
    )))
}

async fn update_password(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    controller.update_password(&email, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Contraseña actualizada".to_string(),
    )))
}

async fn submit_rating(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitRatingRequest>,
) -> Result<Json<ApiResponse<RatingResponse>>, AppError> {
    let controller = RatingController::new(state.pool.clone());
    let rating = controller.submit(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        rating,
        "Calificación registrada".to_string(),
    )))
}

async fn list_ratings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RatingResponse>>>, AppError> {
    let controller = RatingController::new(state.pool.clone());
    let ratings = controller.list_for_user(id).await?;
    Ok(Json(ApiResponse::success(ratings)))
}

async fn pending_ratings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PendingRatingsQuery>,
) -> Result<Json<ApiResponse<Vec<PendingRatingResponse>>>, AppError> {
    let role = query.role.ok_or_else(|| {
        AppError::BadRequest("El parámetro 'role' es requerido (driver o passenger)".to_string())
    })?;
    let controller = RatingController::new(state.pool.clone());
    let pending = controller.pending(id, role).await?;
    Ok(Json(ApiResponse::success(pending)))
}
