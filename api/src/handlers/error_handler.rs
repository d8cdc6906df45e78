//! Maps domain errors onto HTTP responses
//!
//! Every token failure keeps its own code so clients can tell an expired
//! token (go refresh) from a forged or garbled one (start over).

use actix_web::{http::StatusCode, HttpResponse};
use passage_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::{error_codes, ErrorResponse, ErrorResponseExt};

/// Status, error code and client-facing message for a domain error
pub fn classify_domain_error(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_EXPIRED,
                "Token has expired".to_string(),
            ),
            TokenError::InvalidSignature => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_SIGNATURE,
                "Token signature is invalid".to_string(),
            ),
            TokenError::MalformedToken => (
                StatusCode::UNAUTHORIZED,
                error_codes::MALFORMED_TOKEN,
                "Token is malformed".to_string(),
            ),
            TokenError::InvalidTokenType { expected, .. } => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_TOKEN_TYPE,
                format!("Expected {} token", expected),
            ),
            TokenError::SigningFailed { .. } => internal(),
        },
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_CREDENTIALS,
                "Invalid email or password".to_string(),
            ),
            AuthError::AccountLocked => (
                StatusCode::FORBIDDEN,
                error_codes::ACCOUNT_LOCKED,
                "Account is locked".to_string(),
            ),
            AuthError::UserAlreadyExists => (
                StatusCode::CONFLICT,
                error_codes::USER_EXISTS,
                "An account with this email already exists".to_string(),
            ),
            AuthError::PasswordHashFailed { .. } => internal(),
        },
        DomainError::Key(_) | DomainError::Internal { .. } => internal(),
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_codes::INTERNAL_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, code, message) = classify_domain_error(&error);

    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
    } else {
        log::debug!("Request rejected ({}): {}", code, error);
    }

    ErrorResponse::new(code, message).to_response(status)
}

/// Build a plain error response from a code and message
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    ErrorResponse::new(code, message).to_response(status)
}
