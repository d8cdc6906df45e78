use actix_web::{web, HttpResponse};

use passage_core::repositories::UserRepository;
use passage_core::services::account::PasswordHasher;

use crate::app::AppState;
use crate::dto::MessageResponse;

use super::cookie::removal_cookie;

/// Handler for POST /api/v1/auth/logout
///
/// Tells the browser to drop the refresh token cookie. Tokens are stateless,
/// so anything already issued stays valid until it expires.
pub async fn logout<U, H>(state: web::Data<AppState<U, H>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    HttpResponse::Ok()
        .cookie(removal_cookie(&state.cookie))
        .json(MessageResponse {
            message: "Logged out".to_string(),
        })
}
