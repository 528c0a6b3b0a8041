//! Form structs validated before any request leaves this process.

use chrono::NaiveDateTime;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod appointment;
pub mod client;

/// Parses the value of an HTML `datetime-local` input, with or without
/// seconds.
pub(crate) fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, TypeConstraintError> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|_| TypeConstraintError::InvalidDateTime)
}

/// Flattens validator output into per-field messages for flash rendering.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value"),
            })
        })
        .collect();
    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_local_parses_with_and_without_seconds() {
        assert!(parse_local_datetime("2024-03-01T10:00").is_ok());
        assert!(parse_local_datetime("2024-03-01T10:00:30").is_ok());
        assert_eq!(
            parse_local_datetime("yesterday"),
            Err(TypeConstraintError::InvalidDateTime)
        );
    }
}
