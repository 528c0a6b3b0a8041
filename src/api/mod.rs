//! Data-access boundary: typed calls against the back-office REST API.
//!
//! Mirrors the repository pattern used elsewhere in our services: query
//! builder structs, narrow per-entity traits, and a reqwest-backed
//! implementation in [`rest`]. All filtering, searching and pagination
//! happens server-side; queries here are only serialized into URL
//! parameters.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::errors::ApiResult;
use crate::domain::appointment::{
    Appointment, AppointmentStatus, NewAppointment, UpdateAppointment,
};
use crate::domain::client::{Client, NewClient};
use crate::domain::pagination::PageEnvelope;
use crate::domain::types::{AppointmentId, ClientId};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod rest;

/// Page size used by every list view.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page size used when loading the client dropdown for appointment forms.
pub const DROPDOWN_PAGE_SIZE: usize = 100;

/// Query parameters for `GET /api/v1/clients`.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ClientListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term; blank input is dropped entirely so
    /// the parameter is omitted from the URL.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// Serializes the query to URL parameters, omitting unset fields.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

/// Query parameters for `GET /api/v1/appointments`.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct AppointmentListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl AppointmentListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term; blank input is dropped entirely.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// Serializes the query to URL parameters, omitting unset fields.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

#[async_trait::async_trait]
pub trait ClientApi {
    async fn list_clients(
        &self,
        token: &str,
        query: ClientListQuery,
    ) -> ApiResult<PageEnvelope<Client>>;
    async fn get_client(&self, token: &str, id: ClientId) -> ApiResult<Client>;
    async fn create_client(&self, token: &str, new_client: &NewClient) -> ApiResult<Client>;
}

#[async_trait::async_trait]
pub trait AppointmentApi {
    async fn list_appointments(
        &self,
        token: &str,
        query: AppointmentListQuery,
    ) -> ApiResult<PageEnvelope<Appointment>>;
    async fn create_appointment(
        &self,
        token: &str,
        new_appointment: &NewAppointment,
    ) -> ApiResult<Appointment>;
    async fn update_appointment(
        &self,
        token: &str,
        id: AppointmentId,
        updates: &UpdateAppointment,
    ) -> ApiResult<Appointment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_query_omits_empty_fields() {
        let query = AppointmentListQuery::new()
            .search("")
            .status(AppointmentStatus::Confirmed)
            .paginate(2, DEFAULT_PAGE_SIZE);
        assert_eq!(query.to_query_string(), "status=confirmed&page=2&page_size=10");
    }

    #[test]
    fn blank_search_is_trimmed_away() {
        let query = ClientListQuery::new().search("   ");
        assert_eq!(query.search, None);
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn full_appointment_query_serializes_all_filters() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let query = AppointmentListQuery::new()
            .search("massage")
            .date_range(Some(start), Some(end))
            .status(AppointmentStatus::Scheduled)
            .paginate(1, 10);
        assert_eq!(
            query.to_query_string(),
            "search=massage&start_date=2024-03-01&end_date=2024-03-31&status=scheduled&page=1&page_size=10"
        );
    }

    #[test]
    fn client_query_keeps_search_term() {
        let query = ClientListQuery::new().search(" Jane ").paginate(1, 10);
        assert_eq!(query.to_query_string(), "search=Jane&page=1&page_size=10");
    }
}
