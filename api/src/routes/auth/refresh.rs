use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use passage_core::repositories::UserRepository;
use passage_core::services::account::PasswordHasher;

use crate::app::AppState;
use crate::dto::{error_codes, TokenResponse};
use crate::handlers::error_handler::{error_response, handle_domain_error};

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges the refresh token cookie for a new access token. The cookie is
/// left untouched; the same refresh token stays valid until it expires.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Token refreshed",
///     "access_token": "eyJ...",
///     "expires_at": "2026-01-01T00:15:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: No refresh token cookie
/// - 401 Unauthorized: `token_expired`, `invalid_signature`, `malformed_token`
///   or `invalid_token_type`
pub async fn refresh<U, H>(req: HttpRequest, state: web::Data<AppState<U, H>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let cookie = match req.cookie(&state.cookie.name) {
        Some(cookie) if !cookie.value().is_empty() => cookie,
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                error_codes::MISSING_REFRESH_TOKEN,
                "Refresh token cookie is missing",
            );
        }
    };

    match state.auth_service.refresh(cookie.value()) {
        Ok(auth) => HttpResponse::Ok().json(TokenResponse::new("Token refreshed", auth)),
        Err(error) => handle_domain_error(error),
    }
}
