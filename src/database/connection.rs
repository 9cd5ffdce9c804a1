//! Conexión a SQLite
//!
//! Este módulo maneja el pool de conexiones y el schema embebido,
//! aplicado idempotentemente al arrancar.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::database::DatabaseConfig;

/// DDL del sistema, una sentencia por entrada.
///
/// Las invariantes duras viven también acá: asientos nunca negativos,
/// una reserva por pasajero por viaje, una calificación por
/// (viaje, autor, calificado).
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id              BLOB PRIMARY KEY,
        full_name       TEXT NOT NULL,
        email           TEXT NOT NULL UNIQUE,
        phone           TEXT,
        dni             TEXT,
        password_hash   TEXT NOT NULL,
        about           TEXT,
        vehicle         TEXT,
        vehicle_details TEXT,
        rating_average  REAL NOT NULL DEFAULT 0,
        rating_count    INTEGER NOT NULL DEFAULT 0,
        created_at      TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS trips (
        id               BLOB PRIMARY KEY,
        driver_id        BLOB NOT NULL REFERENCES users(id),
        origin           TEXT NOT NULL,
        destination      TEXT NOT NULL,
        date             TEXT NOT NULL,
        time             TEXT NOT NULL,
        available_seats  INTEGER NOT NULL CHECK (available_seats >= 0),
        price_per_person REAL NOT NULL,
        vehicle          TEXT,
        music            INTEGER NOT NULL DEFAULT 0,
        pets             INTEGER NOT NULL DEFAULT 0,
        children         INTEGER NOT NULL DEFAULT 0,
        luggage          INTEGER NOT NULL DEFAULT 0,
        notes            TEXT,
        state            TEXT NOT NULL DEFAULT 'pending',
        created_at       TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reservations (
        id         BLOB PRIMARY KEY,
        trip_id    BLOB NOT NULL REFERENCES trips(id),
        user_id    BLOB NOT NULL REFERENCES users(id),
        seats      INTEGER NOT NULL CHECK (seats > 0),
        created_at TEXT NOT NULL,
        UNIQUE (trip_id, user_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ratings (
        id         BLOB PRIMARY KEY,
        trip_id    BLOB NOT NULL REFERENCES trips(id),
        author_id  BLOB NOT NULL REFERENCES users(id),
        target_id  BLOB NOT NULL REFERENCES users(id),
        score      INTEGER NOT NULL CHECK (score BETWEEN 1 AND 5),
        comment    TEXT,
        created_at TEXT NOT NULL,
        UNIQUE (trip_id, author_id, target_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_trips_driver ON trips(driver_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_trip ON reservations(trip_id)",
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_ratings_target ON ratings(target_id)",
];

/// Aplicar el schema embebido sobre un pool
///
/// También lo usan los tests para armar bases en memoria.
pub async fn run_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Conexión a la base de datos de la aplicación
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    /// Conectar usando DATABASE_URL (o el default de desarrollo)
    pub async fn new_default() -> Result<Self> {
        Self::new(&DatabaseConfig::default()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Aplicar el schema embebido
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        run_schema(&self.pool).await
    }
}
