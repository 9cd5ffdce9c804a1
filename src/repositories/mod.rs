//! Repositorios de acceso a datos
//!
//! Un repositorio por agregado; todo el SQL del sistema vive acá.

pub mod rating_repository;
pub mod reservation_repository;
pub mod trip_repository;
pub mod user_repository;
