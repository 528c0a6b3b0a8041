use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use tera::Tera;

use lotus_crm::api::rest::RestApi;
use lotus_crm::middleware::RedirectUnauthorized;
use lotus_crm::models::config::{AuthConfig, ServerConfig};
use lotus_crm::routes::alert_level_to_str;
use lotus_crm::routes::clients::show_clients;

fn test_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8080,
        templates_dir: "templates/**/*.html".to_string(),
        secret: "0".repeat(64),
        api_base_url: "http://localhost:8000".to_string(),
        auth: AuthConfig {
            domain: "tenant.auth0.com".to_string(),
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            callback_url: "http://localhost:8080/auth/callback".to_string(),
            audience: None,
        },
    }
}

#[::core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn anonymous_visit_is_sent_to_login() {
    let config = test_config();
    let secret_key = Key::from(config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();

    let app = test::init_service(
        App::new()
            .wrap(FlashMessagesFramework::builder(message_store).build())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .service(web::scope("").wrap(RedirectUnauthorized).service(show_clients))
            .app_data(web::Data::new(Tera::default()))
            .app_data(web::Data::new(RestApi::new(&config.api_base_url)))
            .app_data(web::Data::new(config)),
    )
    .await;

    let req = test::TestRequest::get().uri("/clients").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/auth/login?next=%2Fclients"
    );
}
