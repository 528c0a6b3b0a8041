//! Reqwest-backed implementation of the API traits.
//!
//! This is the authenticated request wrapper: every call attaches the
//! caller's bearer token, performs the request, and decodes the JSON body.
//! Failures are logged and propagated as [`ApiError`] with no retry.

use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{AppointmentApi, AppointmentListQuery, ClientApi, ClientListQuery};
use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::client::{Client, NewClient};
use crate::domain::pagination::PageEnvelope;
use crate::domain::types::{AppointmentId, ClientId};

/// Shared handle to the back-office REST API.
#[derive(Clone)]
pub struct RestApi {
    http: reqwest::Client,
    base_url: String,
}

impl RestApi {
    /// Creates a handle for the given base URL (scheme + host, no trailing
    /// slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        }
    }

    async fn get<T: DeserializeOwned>(&self, token: &str, path: &str, query: &str) -> ApiResult<T> {
        self.send(self.http.get(self.url(path, query)), token).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(self.http.post(self.url(path, "")).json(body), token)
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(self.http.put(self.url(path, "")).json(body), token)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: &str,
    ) -> ApiResult<T> {
        let response = request.bearer_auth(token).send().await.map_err(|e| {
            log::error!("API request failed: {e}");
            ApiError::from(e)
        })?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound),
            _ if !status.is_success() => {
                let message = response.text().await.unwrap_or_default();
                log::error!("API returned {status}: {message}");
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                });
            }
            _ => {}
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Failed to decode API response: {e}");
            ApiError::from(e)
        })
    }
}

#[async_trait::async_trait]
impl ClientApi for RestApi {
    async fn list_clients(
        &self,
        token: &str,
        query: ClientListQuery,
    ) -> ApiResult<PageEnvelope<Client>> {
        self.get(token, "/api/v1/clients", &query.to_query_string())
            .await
    }

    async fn get_client(&self, token: &str, id: ClientId) -> ApiResult<Client> {
        self.get(token, &format!("/api/v1/clients/{id}"), "").await
    }

    async fn create_client(&self, token: &str, new_client: &NewClient) -> ApiResult<Client> {
        self.post(token, "/api/v1/clients", new_client).await
    }
}

#[async_trait::async_trait]
impl AppointmentApi for RestApi {
    async fn list_appointments(
        &self,
        token: &str,
        query: AppointmentListQuery,
    ) -> ApiResult<PageEnvelope<Appointment>> {
        self.get(token, "/api/v1/appointments", &query.to_query_string())
            .await
    }

    async fn create_appointment(
        &self,
        token: &str,
        new_appointment: &NewAppointment,
    ) -> ApiResult<Appointment> {
        self.post(token, "/api/v1/appointments", new_appointment)
            .await
    }

    async fn update_appointment(
        &self,
        token: &str,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> ApiResult<Appointment> {
        self.put(token, &format!("/api/v1/appointments/{id}"), updates)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = RestApi::new("http://localhost:8000/");
        assert_eq!(
            api.url("/api/v1/clients", "page=1"),
            "http://localhost:8000/api/v1/clients?page=1"
        );
        assert_eq!(
            api.url("/api/v1/clients", ""),
            "http://localhost:8000/api/v1/clients"
        );
    }
}
