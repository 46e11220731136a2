use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    cookie::{Cookie, SameSite},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{errors::AppError, models::domain::SessionId};

/// Resolves the session id from the session cookie, minting a new one (and
/// setting the cookie) when the request carries none or an unparsable one.
pub struct SessionMiddleware {
    cookie_name: Rc<str>,
}

impl SessionMiddleware {
    pub fn new(cookie_name: &str) -> Self {
        Self {
            cookie_name: Rc::from(cookie_name),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            cookie_name: Rc::clone(&self.cookie_name),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
    cookie_name: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req
            .cookie(&self.cookie_name)
            .and_then(|cookie| SessionId::parse(cookie.value()));
        let is_new = existing.is_none();
        let session_id = existing.unwrap_or_default();

        req.extensions_mut().insert(session_id);

        let service = Rc::clone(&self.service);
        let cookie_name = Rc::clone(&self.cookie_name);

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if is_new {
                let cookie = Cookie::build(cookie_name.to_string(), session_id.to_string())
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .finish();
                if let Err(err) = res.response_mut().add_cookie(&cookie) {
                    log::warn!("Failed to set session cookie: {}", err);
                }
            }

            Ok(res.map_into_left_body())
        })
    }
}

// Extractor for the session resolved by SessionMiddleware
pub struct CurrentSession(pub SessionId);

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let session = req
            .extensions()
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| {
                AppError::InternalError("Session middleware not configured".to_string())
            });

        ready(session.map(CurrentSession))
    }
}
