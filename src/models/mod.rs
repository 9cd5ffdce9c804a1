//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema SQLite con las convenciones estándar.

pub mod rating;
pub mod reservation;
pub mod trip;
pub mod user;
