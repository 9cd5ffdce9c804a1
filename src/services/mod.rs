//! Services module
//!
//! Lógica de dominio pura, sin I/O. Hoy el único servicio es el filtro
//! de búsqueda de viajes.

pub mod trip_filter;
