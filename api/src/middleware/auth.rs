//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, resolves it
//! through `AuthService::authenticate` and injects the authenticated email
//! into the request extensions as an `AuthContext`.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use sc_core::{
    errors::{AuthError, DomainError},
    repositories::CustomerRepository,
    services::AuthService,
};
use sc_shared::validation::mask_email;

use crate::handlers::ApiError;

/// Authenticated customer injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Email stored as the token subject
    pub email: String,
}

/// Resolves a bearer token to the customer email it was issued for.
///
/// Erases the repository type of `AuthService` so the middleware stays
/// non-generic.
pub trait TokenAuthenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> Result<String, DomainError>;
}

impl<C: CustomerRepository> TokenAuthenticator for AuthService<C> {
    fn authenticate(&self, token: &str) -> Result<String, DomainError> {
        AuthService::authenticate(self, token)
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    authenticator: Arc<dyn TokenAuthenticator>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware verifying with `authenticator`
    pub fn new(authenticator: Arc<dyn TokenAuthenticator>) -> Self {
        Self { authenticator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            authenticator: Arc::clone(&self.authenticator),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: Arc<dyn TokenAuthenticator>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = Arc::clone(&self.authenticator);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    log::debug!("Missing bearer token for {} {}", req.method(), req.path());
                    return Err(ApiError::from(DomainError::from(AuthError::Unauthenticated)).into());
                }
            };

            let email = match authenticator.authenticate(&token) {
                Ok(email) => email,
                Err(e) => {
                    log::debug!("Token rejected for {}: {}", req.path(), e);
                    return Err(ApiError::from(e).into());
                }
            };

            log::debug!("Authenticated {} for {}", mask_email(&email), req.path());
            req.extensions_mut().insert(AuthContext { email });

            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::from(AuthError::Unauthenticated)).into());

        ready(result)
    }
}
