use actix_web::{Responder, get};

use crate::models::auth::AuthenticatedUser;
use crate::routes::redirect;

/// The landing page is the clients table.
#[get("/")]
pub async fn show_index(_user: AuthenticatedUser) -> impl Responder {
    redirect("/clients")
}
