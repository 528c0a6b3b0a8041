use actix_web::{
    App, HttpResponse,
    error::ErrorUnauthorized,
    http::{StatusCode, header},
    test, web,
};

use lotus_crm::middleware::RedirectUnauthorized;

#[actix_web::test]
async fn redirects_unauthorized_to_login_with_origin() {
    let app = test::init_service(
        App::new().wrap(RedirectUnauthorized).route(
            "/appointments",
            web::get().to(|| async { HttpResponse::Unauthorized().finish() }),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/appointments").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/auth/login?next=%2Fappointments"
    );
}

#[actix_web::test]
async fn unauthorized_extraction_error_is_redirected() {
    let app = test::init_service(
        App::new().wrap(RedirectUnauthorized).route(
            "/clients",
            web::get().to(|| async {
                Err::<HttpResponse, _>(ErrorUnauthorized("authentication required"))
            }),
        ),
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

#[actix_web::test]
async fn success_response_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(RedirectUnauthorized)
            .default_service(web::to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let req = test::TestRequest::default().to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
