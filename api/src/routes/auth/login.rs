use actix_web::{http::StatusCode, web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use passage_core::domain::value_objects::IssuedTokens;
use passage_core::repositories::UserRepository;
use passage_core::services::account::PasswordHasher;
use passage_shared::config::CookieConfig;

use crate::app::AppState;
use crate::dto::{error_codes, CredentialsRequest, TokenResponse};
use crate::handlers::error_handler::{error_response, handle_domain_error};

use super::cookie::refresh_cookie;

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "hunter2"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged in",
///     "access_token": "eyJ...",
///     "expires_at": "2026-01-01T00:15:00Z"
/// }
/// ```
/// plus a `Set-Cookie` header carrying the refresh token.
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed email/password
/// - 401 Unauthorized: Unknown email or wrong password
/// - 403 Forbidden: Account locked
pub async fn login<U, H>(
    state: web::Data<AppState<U, H>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return error_response(StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, errors.to_string());
    }

    match state.account_service.login(&request.email, &request.password).await {
        Ok(issued) => token_response(StatusCode::OK, "Logged in", issued, &state.cookie),
        Err(error) => handle_domain_error(error),
    }
}

/// Access token in the body, refresh token in an HTTP-only cookie
pub(crate) fn token_response(
    status: StatusCode,
    message: &str,
    issued: IssuedTokens,
    cookie_config: &CookieConfig,
) -> HttpResponse {
    let max_age = (issued.refresh_expires_at - Utc::now()).num_seconds();
    let (auth, refresh_token) = issued.into_parts();

    HttpResponse::build(status)
        .cookie(refresh_cookie(cookie_config, refresh_token, max_age))
        .json(TokenResponse::new(message, auth))
}
