use chrono::NaiveDate;
use futures::future::join_all;
use validator::Validate;

use crate::api::{
    AppointmentApi, AppointmentListQuery, ClientApi, ClientListQuery, DEFAULT_PAGE_SIZE,
    DROPDOWN_PAGE_SIZE,
};
use crate::domain::appointment::{Appointment, AppointmentStatus, AppointmentWithClient};
use crate::domain::pagination::PageEnvelope;
use crate::dto::appointments::{AppointmentFilters, AppointmentsPageData, AppointmentsQuery};
use crate::forms::appointment::{AddAppointmentForm, SaveAppointmentForm};
use crate::forms::validation_messages;
use crate::models::auth::AuthenticatedUser;
use crate::pagination::Paginated;
use crate::services::{ServiceError, ServiceResult};

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Maps the raw page query onto the backend list query, dropping blank or
/// malformed filter values instead of failing the render.
fn build_list_query(filters: &AppointmentFilters, page: usize) -> AppointmentListQuery {
    let mut query = AppointmentListQuery::new().paginate(page, DEFAULT_PAGE_SIZE);
    if let Some(term) = &filters.search {
        query = query.search(term.clone());
    }
    let parse_date = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    };
    query = query.date_range(parse_date(&filters.start_date), parse_date(&filters.end_date));
    if let Some(status) = filters
        .status
        .as_deref()
        .and_then(|s| s.parse::<AppointmentStatus>().ok())
    {
        query = query.status(status);
    }
    query
}

/// Annotates a page of appointments with their client records.
///
/// One lookup per appointment, all issued concurrently and joined before
/// returning. A failed lookup leaves that row's `client` unset instead of
/// failing the page; this is the only partial-failure policy in the app.
pub async fn enrich_with_clients<A>(
    api: &A,
    token: &str,
    envelope: PageEnvelope<Appointment>,
) -> PageEnvelope<AppointmentWithClient>
where
    A: ClientApi + Sync + ?Sized,
{
    let lookups = envelope.items.iter().map(|appointment| async move {
        match api.get_client(token, appointment.client_id).await {
            Ok(client) => Some(client),
            Err(err) => {
                log::warn!(
                    "Failed to fetch client for appointment {}: {err}",
                    appointment.id
                );
                None
            }
        }
    });
    let clients = join_all(lookups).await;

    let PageEnvelope {
        items,
        total,
        page,
        page_size,
        total_pages,
        has_next,
        has_previous,
    } = envelope;

    PageEnvelope {
        items: items
            .into_iter()
            .zip(clients)
            .map(|(appointment, client)| AppointmentWithClient {
                appointment,
                client,
            })
            .collect(),
        total,
        page,
        page_size,
        total_pages,
        has_next,
        has_previous,
    }
}

/// Loads one page of appointments, enriched with client records, plus the
/// client dropdown for the scheduling form.
pub async fn load_appointments_page<A>(
    api: &A,
    user: &AuthenticatedUser,
    query: AppointmentsQuery,
) -> ServiceResult<AppointmentsPageData>
where
    A: ClientApi + AppointmentApi + Sync + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let filters = AppointmentFilters {
        search: non_blank(query.search),
        start_date: non_blank(query.start_date),
        end_date: non_blank(query.end_date),
        status: non_blank(query.status),
    };

    let envelope = api
        .list_appointments(&user.token, build_list_query(&filters, page))
        .await
        .map_err(|err| {
            log::error!("Failed to list appointments: {err}");
            err
        })?;

    let appointments = enrich_with_clients(api, &user.token, envelope).await;

    // The dropdown is decoration for the scheduling form; losing it must
    // not take down the whole page.
    let clients = match api
        .list_clients(
            &user.token,
            ClientListQuery::new().paginate(1, DROPDOWN_PAGE_SIZE),
        )
        .await
    {
        Ok(envelope) => envelope.items,
        Err(err) => {
            log::error!("Failed to list clients for dropdown: {err}");
            Vec::new()
        }
    };

    let has_filters = filters.any();
    Ok(AppointmentsPageData {
        appointments: Paginated::from_envelope(appointments),
        clients,
        filters,
        has_filters,
    })
}

/// Validates the scheduling form and submits a new appointment.
pub async fn add_appointment<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: AddAppointmentForm,
) -> ServiceResult<Appointment>
where
    A: AppointmentApi + Sync + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Form(
            validation_messages(&errors).join("; "),
        ));
    }

    let new_appointment = form.to_new_appointment()?;

    api.create_appointment(&user.token, &new_appointment)
        .await
        .map_err(|err| {
            log::error!("Failed to create appointment: {err}");
            err.into()
        })
}

/// Validates the edit form and submits the appointment update.
pub async fn save_appointment<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: SaveAppointmentForm,
) -> ServiceResult<Appointment>
where
    A: AppointmentApi + Sync + ?Sized,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Form(
            validation_messages(&errors).join("; "),
        ));
    }

    let (id, updates) = form.into_update()?;

    api.update_appointment(&user.token, id, &updates)
        .await
        .map_err(|err| {
            log::error!("Failed to update appointment {id}: {err}");
            err.into()
        })
}
