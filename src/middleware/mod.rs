//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y la extracción de la
//! identidad del solicitante.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
