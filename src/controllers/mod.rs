//! Controllers del sistema
//!
//! Acá viven las reglas de dominio: validación de entrada, autorización,
//! la máquina de estados del viaje y las invariantes de inventario y
//! calificaciones. Los handlers HTTP delegan en estos tipos.

pub mod rating_controller;
pub mod reservation_controller;
pub mod trip_controller;
pub mod user_controller;
