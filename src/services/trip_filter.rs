//! Filtro de búsqueda de viajes
//!
//! Evaluación pura de predicados sobre un snapshot de viajes: sin estado,
//! sin efectos, el orden de entrada se preserva. El matching de texto es
//! substring insensible a mayúsculas y tildes; la fecha es igualdad exacta;
//! los flags de amenities se combinan con AND.

use chrono::NaiveDate;

use crate::models::trip::Trip;
use crate::utils::text::contains_normalized;

/// Criterios de búsqueda ya validados
#[derive(Debug, Default, Clone)]
pub struct TripSearchCriteria {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub music: bool,
    pub pets: bool,
    pub children: bool,
    pub luggage: bool,
}

/// Verificar si un viaje cumple todos los criterios
pub fn matches(trip: &Trip, criteria: &TripSearchCriteria) -> bool {
    if criteria.music && !trip.music {
        return false;
    }
    if criteria.pets && !trip.pets {
        return false;
    }
    if criteria.children && !trip.children {
        return false;
    }
    if criteria.luggage && !trip.luggage {
        return false;
    }
    if let Some(date) = criteria.date {
        if trip.date != date {
            return false;
        }
    }
    if let Some(origin) = &criteria.origin {
        if !contains_normalized(&trip.origin, origin) {
            return false;
        }
    }
    if let Some(destination) = &criteria.destination {
        if !contains_normalized(&trip.destination, destination) {
            return false;
        }
    }
    true
}

/// Filtrar un snapshot de viajes preservando el orden de entrada
pub fn filter_trips(trips: Vec<Trip>, criteria: &TripSearchCriteria) -> Vec<Trip> {
    trips
        .into_iter()
        .filter(|trip| matches(trip, criteria))
        .collect()
}
