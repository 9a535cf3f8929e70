//! # Infrastructure Layer
//!
//! Concrete implementations of the core collaborator interfaces:
//! MySQL-backed repositories via SQLx and the persisted notification
//! dispatcher feeding the frontend's notification feed.

pub mod database;

pub use database::connection::DatabasePool;
pub use database::mysql::{
    MySqlNotificationDispatcher, MySqlPropertyRepository, MySqlReservationRepository,
    MySqlUserDirectory,
};
