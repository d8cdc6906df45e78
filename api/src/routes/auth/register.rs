use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use passage_core::repositories::UserRepository;
use passage_core::services::account::PasswordHasher;

use crate::app::AppState;
use crate::dto::{error_codes, CredentialsRequest};
use crate::handlers::error_handler::{error_response, handle_domain_error};

use super::login::token_response;

/// Handler for POST /api/v1/auth/register
///
/// Creates the account and signs the new user in. Responds like
/// [`login`](super::login) but with 201 Created.
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed email/password
/// - 409 Conflict: Email already registered
pub async fn register<U, H>(
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

    match state.account_service.register(&request.email, &request.password).await {
        Ok(issued) => token_response(StatusCode::CREATED, "Registered", issued, &state.cookie),
        Err(error) => handle_domain_error(error),
    }
}
