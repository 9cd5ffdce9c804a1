use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use rumbo_backend::config::environment::EnvironmentConfig;
use rumbo_backend::database::DatabaseConnection;
use rumbo_backend::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use rumbo_backend::routes;
use rumbo_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 RUMBO - Backend de viajes compartidos");
    info!("========================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error aplicando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }
    info!("✅ Schema aplicado");

    let pool = db_connection.pool().clone();

    // CORS: permisivo en desarrollo, lista de orígenes en producción
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🧳 Endpoints - Trips:");
    info!("   POST  /api/trips - Publicar viaje");
    info!("   GET   /api/trips - Buscar viajes (origin, destination, date, amenities)");
    info!("   GET   /api/trips/:id - Detalle del viaje");
    info!("   PATCH /api/trips/:id/start - Iniciar viaje (header x-user-id)");
    info!("   PATCH /api/trips/:id/complete - Finalizar viaje (header x-user-id)");
    info!("   POST  /api/trips/:id/select - Reservar lugares");
    info!("   GET   /api/trips/:id/passengers - Pasajeros del viaje");
    info!("   GET   /api/trips/users/:id - Viajes de un conductor");
    info!("👤 Endpoints - Users:");
    info!("   POST /api/users - Registro");
    info!("   POST /api/users/login - Login");
    info!("   GET  /api/users/:id - Perfil");
    info!("   PUT  /api/users/:id - Editar perfil");
    info!("   PUT  /api/users/:email/password - Restablecer contraseña");
    info!("⭐ Endpoints - Ratings:");
    info!("   POST /api/users/:id/ratings - Calificar usuario");
    info!("   GET  /api/users/:id/ratings - Calificaciones recibidas");
    info!("   GET  /api/users/:id/pending-ratings - Pendientes (role=driver|passenger)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rumbo-backend",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
