//! DTOs de la API
//!
//! Requests y responses en camelCase, la forma exacta que consume el
//! cliente, más el envelope genérico `ApiResponse`.

pub mod rating_dto;
pub mod reservation_dto;
pub mod trip_dto;
pub mod user_dto;
