//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it as an access token, and injects the caller's identity into the
//! request.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use passage_core::{
    domain::entities::{Claims, TokenType},
    errors::DomainError,
    services::auth::AuthService,
};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::dto::error_codes;
use crate::handlers::error_handler::{error_response, handle_domain_error};

/// Caller identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject of the access token
    pub user_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let out_of_range = || DomainError::Internal {
            message: "token timestamp out of range".to_string(),
        };

        Ok(Self {
            issued_at: claims.issued_at().ok_or_else(out_of_range)?,
            expires_at: claims.expires_at().ok_or_else(out_of_range)?,
            user_id: claims.sub,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    auth_service: Arc<AuthService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            auth_service: Arc::clone(&self.auth_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    auth_service: Arc<AuthService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let auth_service = Arc::clone(&self.auth_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = error_response(
                        StatusCode::UNAUTHORIZED,
                        error_codes::MISSING_TOKEN,
                        "Missing or invalid Authorization header",
                    );
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            // Refresh tokens are rejected here; they only buy new access tokens
            let auth_context = match auth_service
                .validate_as(&token, TokenType::Access)
                .and_then(AuthContext::from_claims)
            {
                Ok(context) => context,
                Err(error) => {
                    let response = handle_domain_error(error);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(auth_context);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
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
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            let response = error_response(
                StatusCode::UNAUTHORIZED,
                error_codes::MISSING_TOKEN,
                "Authentication required",
            );
            actix_web::error::InternalError::from_response("authentication required", response)
                .into()
        });

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer  "))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_auth_context_from_claims() {
        let claims = Claims::new_access_token("user-1");
        let context = AuthContext::from_claims(claims.clone()).unwrap();

        assert_eq!(context.user_id, "user-1");
        assert_eq!(context.issued_at.timestamp(), claims.iat);
        assert_eq!(context.expires_at.timestamp(), claims.exp);
    }
}
