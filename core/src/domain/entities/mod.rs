//! Domain entities representing core business objects.

pub mod property;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use property::Property;
pub use reservation::{Reservation, ReservationStatus, MAX_SPECIAL_REQUESTS_LEN};
pub use user::{UserRole, UserSummary};
