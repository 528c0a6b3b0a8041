//! Page-assembly services sitting between routes and the API boundary.

use thiserror::Error;

use crate::api::errors::ApiError;

pub mod appointments;
pub mod clients;

/// Errors surfaced by the service layer to route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Form-level validation failed; the message is shown to the user.
    #[error("{0}")]
    Form(String),
    /// A backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
