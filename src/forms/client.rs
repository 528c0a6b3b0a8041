use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{ClientEmail, ClientName, PhoneNumber, TypeConstraintError};

#[derive(Deserialize, Validate)]
/// Form data for adding a new client. These checks mirror what the backend
/// enforces; they exist so obviously bad input never reaches the network.
pub struct AddClientForm {
    /// Client display name.
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    /// Contact email address.
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    /// Contact phone number in international format.
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,
}

impl AddClientForm {
    /// Converts the validated form into a creation payload, normalizing
    /// each field through its value object.
    pub fn to_new_client(&self) -> Result<NewClient, TypeConstraintError> {
        Ok(NewClient::new(
            ClientName::new(self.name.as_str())?,
            ClientEmail::new(self.email.as_str())?,
            PhoneNumber::new(self.phone.as_str())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn form(name: &str, email: &str, phone: &str) -> AddClientForm {
        AddClientForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn rejects_malformed_email_and_short_phone() {
        let errors = form("Jane", "not-an-email", "123").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn accepts_two_character_name() {
        assert!(form("Jo", "jo@example.com", "+14155552671").validate().is_ok());
    }

    #[test]
    fn rejects_one_character_name() {
        let errors = form("J", "jo@example.com", "+14155552671")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn conversion_normalizes_fields() {
        let new_client = form("  Jane Doe ", "Jane@Example.COM", "+1 415 555 2671")
            .to_new_client()
            .unwrap();
        assert_eq!(new_client.name, "Jane Doe");
        assert_eq!(new_client.email, "jane@example.com");
        assert_eq!(new_client.phone, "+14155552671");
    }
}
