//! Route handlers and the small helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::api::errors::ApiError;
use crate::models::auth::AuthenticatedUser;
use crate::services::ServiceError;

pub mod appointments;
pub mod auth;
pub mod clients;
pub mod main;

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps flash levels onto Bootstrap alert classes.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Context shared by every page template: alerts, user, active nav item.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context
}

/// Renders a template, degrading to a 500 on failure.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Fallback response for a failed page load. A rejected bearer token sends
/// the user back through the login flow; anything else is a plain 500.
pub fn page_load_failure(err: &ServiceError, return_to: &str) -> HttpResponse {
    match err {
        ServiceError::Api(ApiError::Unauthorized) => {
            let query =
                serde_html_form::to_string([("next", return_to)]).unwrap_or_default();
            redirect(&format!("/auth/login?{query}"))
        }
        _ => HttpResponse::InternalServerError().finish(),
    }
}
