use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientEmail, ClientId, ClientName, PhoneNumber};

/// Client record as returned by the backend. Owned and validated
/// server-side; this shape exists for display and submission only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/v1/clients`. Constructed from a validated form,
/// never from raw user input.
#[derive(Clone, Debug, Serialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl NewClient {
    /// Builds the creation payload from normalized value objects,
    /// stamping the submission time.
    #[must_use]
    pub fn new(name: ClientName, email: ClientEmail, phone: PhoneNumber) -> Self {
        Self {
            name: name.into_inner(),
            email: email.into_inner(),
            phone: phone.into_inner(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_carries_normalized_values() {
        let client = NewClient::new(
            ClientName::new(" Jo ").unwrap(),
            ClientEmail::new("Jo@Example.com").unwrap(),
            PhoneNumber::new("+14155552671").unwrap(),
        );
        assert_eq!(client.name, "Jo");
        assert_eq!(client.email, "jo@example.com");
        assert_eq!(client.phone, "+14155552671");
    }
}
