//! Rutas de la API
//!
//! Un router por recurso; los handlers son delgados y delegan en los
//! controllers.

pub mod trip_routes;
pub mod user_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/trips", trip_routes::create_trip_router())
        .nest("/api/users", user_routes::create_user_router())
}
