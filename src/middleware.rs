//! Access-guard middleware for the protected scope.
//!
//! Any handler that finishes with a 401 (no session, expired session) is
//! rewritten into a redirect to the login flow, carrying the originating
//! path so the user lands back where they started.

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};
use futures::future::LocalBoxFuture;
use std::future::{Ready, ready};

pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware { service }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();
        let http_req = req.request().clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let query = serde_html_form::to_string([("next", path.as_str())]).unwrap_or_default();
            let login_redirect = move || {
                HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, format!("/auth/login?{query}")))
                    .finish()
                    .map_into_right_body()
            };

            match fut.await {
                // Handler completed but refused the caller.
                Ok(res) if res.status() == StatusCode::UNAUTHORIZED => {
                    let (req, _) = res.into_parts();
                    Ok(ServiceResponse::new(req, login_redirect()))
                }
                Ok(res) => Ok(res.map_into_left_body()),
                // Extractor failures surface as errors before the handler runs.
                Err(err)
                    if err.as_response_error().status_code() == StatusCode::UNAUTHORIZED =>
                {
                    Ok(ServiceResponse::new(http_req, login_redirect()))
                }
                Err(err) => Err(err),
            }
        })
    }
}
