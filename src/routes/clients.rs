use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::api::rest::RestApi;
use crate::dto::clients::ClientsQuery;
use crate::forms::client::AddClientForm;
use crate::models::auth::AuthenticatedUser;
use crate::routes::{base_context, page_load_failure, redirect, render_template};
use crate::services::ServiceError;
use crate::services::clients as client_service;

#[get("/clients")]
pub async fn show_clients(
    params: web::Query<ClientsQuery>,
    user: AuthenticatedUser,
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data =
        match client_service::load_clients_page(api.get_ref(), &user, params.into_inner()).await
        {
            Ok(data) => data,
            Err(err) => return page_load_failure(&err, "/clients"),
        };

    let mut context = base_context(&flash_messages, &user, "clients");
    context.insert("clients", &data.clients);
    if let Some(q) = &data.search_query {
        context.insert("search_query", q);
    }

    render_template(&tera, "clients/index.html", &context)
}

#[post("/clients/add")]
pub async fn add_client(
    user: AuthenticatedUser,
    api: web::Data<RestApi>,
    web::Form(form): web::Form<AddClientForm>,
) -> impl Responder {
    match client_service::add_client(api.get_ref(), &user, form).await {
        Ok(client) => {
            FlashMessage::success(format!("Client {} added.", client.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a client: {err}");
            FlashMessage::error("Failed to add client.").send();
        }
    }

    redirect("/clients")
}
