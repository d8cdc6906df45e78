use actix_web::{web, HttpResponse};

use passage_core::repositories::UserRepository;
use passage_core::services::account::PasswordHasher;

use crate::app::AppState;
use crate::handlers::error_handler::handle_domain_error;

/// Handler for GET /api/v1/auth/public-key
///
/// Publishes the verification key (SPKI PEM) so other services can check
/// access tokens without calling back.
pub async fn public_key<U, H>(state: web::Data<AppState<U, H>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state.auth_service.public_key_pem() {
        Ok(pem) => HttpResponse::Ok()
            .content_type("application/x-pem-file")
            .body(pem.to_owned()),
        Err(error) => handle_domain_error(error),
    }
}
