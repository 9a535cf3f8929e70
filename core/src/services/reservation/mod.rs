//! Reservation lifecycle service.

mod service;

pub use service::{NewReservation, ReservationService};

#[cfg(test)]
mod tests;
