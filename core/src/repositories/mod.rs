pub mod property;
pub mod reservation;
pub mod user;

pub use property::{MockPropertyRepository, PropertyRepository};
pub use reservation::{MockReservationRepository, ReservationRepository};
pub use user::{MockUserDirectory, UserDirectory};
