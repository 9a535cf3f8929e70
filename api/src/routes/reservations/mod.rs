//! Reservation lifecycle endpoints

pub mod cancel;
pub mod create;
pub mod get;
pub mod list;
pub mod update_status;

pub use cancel::cancel_reservation;
pub use create::create_reservation;
pub use get::get_reservation;
pub use list::list_my_reservations;
pub use update_status::update_reservation_status;
