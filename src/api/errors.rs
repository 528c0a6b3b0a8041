//! Error types surfaced by the API boundary.

use thiserror::Error;

/// Failure modes for a backend call. There is no retry or timeout policy;
/// each caller decides how to degrade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The bearer token was missing, expired, or rejected.
    #[error("unauthorized")]
    Unauthorized,
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,
    /// Any other non-success status returned by the backend.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
