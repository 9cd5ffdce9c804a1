//! Capa de base de datos
//!
//! Pool de conexiones SQLite y schema embebido.

pub mod connection;

pub use connection::DatabaseConnection;
