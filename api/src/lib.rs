//! HTTP API layer for the RentAPlace backend.
//!
//! Exposes the reservation lifecycle and the availability search over
//! actix-web, with JWT identity extraction and a uniform error-response
//! mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
