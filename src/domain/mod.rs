//! Domain aggregates mirrored from the back-office REST API.

pub mod appointment;
pub mod client;
pub mod pagination;
pub mod types;
