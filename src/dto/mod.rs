//! DTO modules that bridge services with templates.

pub mod appointments;
pub mod clients;
