//! Request handling support shared across routes

pub mod error;

pub use error::{unauthorized, validation_error, ApiError};
