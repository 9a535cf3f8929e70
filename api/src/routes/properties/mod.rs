//! Property endpoints

pub mod search;

pub use search::search_properties;
