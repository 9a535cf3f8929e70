//! Request and response data transfer objects

pub mod property;
pub mod reservation;

pub use property::AvailabilityQuery;
pub use reservation::{CreateReservationRequest, UpdateReservationStatusRequest};
