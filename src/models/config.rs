//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    /// Base URL of the back-office REST API.
    pub api_base_url: String,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, Deserialize)]
/// Identity-provider settings for the redirect/token login flow.
pub struct AuthConfig {
    /// Provider tenant domain, e.g. `example.eu.auth0.com`.
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
    /// Absolute URL of our `/auth/callback` route as registered with the
    /// provider.
    pub callback_url: String,
    #[serde(default)]
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Authorization endpoint for the login redirect.
    pub fn authorize_url(&self) -> String {
        format!("https://{}/authorize", self.domain)
    }

    /// Token exchange endpoint used by the callback handler.
    pub fn token_url(&self) -> String {
        format!("https://{}/oauth/token", self.domain)
    }

    /// Provider-side logout endpoint.
    pub fn logout_url(&self) -> String {
        format!("https://{}/v2/logout", self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_derive_from_domain() {
        let auth = AuthConfig {
            domain: "tenant.auth0.com".to_string(),
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            callback_url: "http://localhost:8080/auth/callback".to_string(),
            audience: None,
        };
        assert_eq!(auth.authorize_url(), "https://tenant.auth0.com/authorize");
        assert_eq!(auth.token_url(), "https://tenant.auth0.com/oauth/token");
        assert_eq!(auth.logout_url(), "https://tenant.auth0.com/v2/logout");
    }
}
