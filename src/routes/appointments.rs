use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::rest::RestApi;
use crate::domain::appointment::AppointmentStatus;
use crate::dto::appointments::AppointmentsQuery;
use crate::forms::appointment::{AddAppointmentForm, SaveAppointmentForm};
use crate::models::auth::AuthenticatedUser;
use crate::routes::{base_context, page_load_failure, redirect, render_template};
use crate::services::ServiceError;
use crate::services::appointments as appointment_service;

#[get("/appointments")]
pub async fn show_appointments(
    params: web::Query<AppointmentsQuery>,
    user: AuthenticatedUser,
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match appointment_service::load_appointments_page(
        api.get_ref(),
        &user,
        params.into_inner(),
    )
    .await
    {
        Ok(data) => data,
        Err(err) => return page_load_failure(&err, "/appointments"),
    };

    let status_options: Vec<(&str, &str)> = AppointmentStatus::ALL
        .iter()
        .map(|status| (status.as_str(), status.label()))
        .collect();

    let mut context = base_context(&flash_messages, &user, "appointments");
    context.insert("appointments", &data.appointments);
    context.insert("clients", &data.clients);
    context.insert("filters", &data.filters);
    context.insert("has_filters", &data.has_filters);
    context.insert("status_options", &status_options);

    render_template(&tera, "appointments/index.html", &context)
}

#[post("/appointments/add")]
pub async fn add_appointment(
    user: AuthenticatedUser,
    api: web::Data<RestApi>,
    web::Form(form): web::Form<AddAppointmentForm>,
) -> impl Responder {
    match appointment_service::add_appointment(api.get_ref(), &user, form).await {
        Ok(_) => {
            FlashMessage::success("Appointment scheduled.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to create appointment: {err}");
            FlashMessage::error("Failed to schedule appointment.").send();
        }
    }

    redirect("/appointments")
}

#[post("/appointments/save")]
pub async fn save_appointment(
    user: AuthenticatedUser,
    api: web::Data<RestApi>,
    web::Form(form): web::Form<SaveAppointmentForm>,
) -> impl Responder {
    match appointment_service::save_appointment(api.get_ref(), &user, form).await {
        Ok(_) => {
            FlashMessage::success("Appointment updated.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update appointment: {err}");
            FlashMessage::error("Failed to update appointment.").send();
        }
    }

    redirect("/appointments")
}
