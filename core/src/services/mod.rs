//! Business services containing domain logic and use cases.

pub mod notification;
pub mod reservation;

// Re-export commonly used types
pub use notification::{NotificationDispatcher, NotificationType, RecordingNotificationDispatcher};
pub use reservation::{NewReservation, ReservationService};
