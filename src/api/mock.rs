//! Mock API implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{AppointmentApi, AppointmentListQuery, ClientApi, ClientListQuery};
use crate::domain::appointment::{Appointment, NewAppointment, UpdateAppointment};
use crate::domain::client::{Client, NewClient};
use crate::domain::pagination::PageEnvelope;
use crate::domain::types::{AppointmentId, ClientId};

mock! {
    pub Api {}

    #[async_trait]
    impl ClientApi for Api {
        async fn list_clients(
            &self,
            token: &str,
            query: ClientListQuery,
        ) -> ApiResult<PageEnvelope<Client>>;
        async fn get_client(&self, token: &str, id: ClientId) -> ApiResult<Client>;
        async fn create_client(&self, token: &str, new_client: &NewClient) -> ApiResult<Client>;
    }

    #[async_trait]
    impl AppointmentApi for Api {
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
}
