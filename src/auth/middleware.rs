use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::{verify_token, Claims, TokenKeys};
use crate::error::ApiError;

/// Checks a raw `Authorization` header value and returns the claims of the
/// bearer token it carries.
///
/// The token is the second space-separated word of the header, mirroring the
/// usual `Bearer <token>` shape; the scheme word itself is not inspected. A
/// missing header, a lone scheme word, or an empty token segment is
/// `MissingToken`; anything that fails signature or expiry checks is
/// `InvalidToken`.
///
/// Pure over (header value, keys, current time), so it is testable without
/// an HTTP stack.
pub fn authorize(raw_header: Option<&str>, keys: &TokenKeys) -> Result<Claims, ApiError> {
    let token = raw_header
        .and_then(|value| value.split(' ').nth(1))
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingToken)?;
    verify_token(token, keys)
}

/// Guards every route in the scope it wraps, except the login path, which
/// must stay reachable without a token. On success the decoded claims are
/// stored in request extensions for `AuthenticatedUserId` to pick up.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Login is the one route inside the scope that hands out tokens
        // instead of requiring one.
        if req.path() == "/api/auth/login" {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let keys = match req.app_data::<web::Data<TokenKeys>>() {
            Some(keys) => keys.get_ref(),
            None => {
                let err = ApiError::Internal("TokenKeys missing from app data".into());
                return Box::pin(async move { Err(err.into()) });
            }
        };

        let raw_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match authorize(raw_header, keys) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(err) => Box::pin(async move { Err(err.into()) }),
        }
    }
}
