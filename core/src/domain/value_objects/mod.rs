//! Value objects used across the reservation domain.

pub mod reservation_view;
pub mod stay_range;

pub use reservation_view::ReservationView;
pub use stay_range::StayRange;
