//! Session claims established at login and read by every protected route.
//!
//! The identity cookie stores a JWT signed with the server secret. The
//! claims carry the identity-provider token so the API layer can attach it
//! as a bearer credential without touching the provider again.

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

use crate::models::config::ServerConfig;

/// Authenticated user context decoded from the identity cookie.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Identity-provider subject.
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Session expiry (seconds since epoch), mirrored from the provider
    /// token so the session dies with it.
    pub exp: usize,
    /// Raw provider token forwarded to the backend on every API call.
    pub token: String,
}

impl AuthenticatedUser {
    /// Signs the claims for storage in the identity cookie.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Decodes and verifies cookie claims. Expired sessions fail here.
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user = Identity::from_request(req, payload)
            .into_inner()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|jwt| {
                let config = req.app_data::<web::Data<ServerConfig>>()?;
                AuthenticatedUser::from_jwt(&jwt, &config.secret).ok()
            });

        match user {
            Some(user) => ready(Ok(user)),
            None => ready(Err(ErrorUnauthorized("authentication required"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "auth0|abc123".to_string(),
            email: "staff@example.com".to_string(),
            name: "Staff Member".to_string(),
            exp: (Utc::now().timestamp() + 3600) as usize,
            token: "opaque-token".to_string(),
        }
    }

    #[test]
    fn claims_round_trip_through_jwt() {
        let user = sample_user();
        let jwt = user.to_jwt("0123456789abcdef").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&jwt, "0123456789abcdef").unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let jwt = sample_user().to_jwt("0123456789abcdef").unwrap();
        assert!(AuthenticatedUser::from_jwt(&jwt, "another-secret-key").is_err());
    }

    #[test]
    fn expired_session_is_rejected() {
        let mut user = sample_user();
        user.exp = (Utc::now().timestamp() - 3600) as usize;
        let jwt = user.to_jwt("0123456789abcdef").unwrap();
        assert!(AuthenticatedUser::from_jwt(&jwt, "0123456789abcdef").is_err());
    }
}
