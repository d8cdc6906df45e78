use actix_web::HttpResponse;

use crate::dto::MeResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/me
///
/// Requires a valid access token (see [`JwtAuth`](crate::middleware::JwtAuth)).
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        user_id: auth.user_id,
        issued_at: auth.issued_at,
        expires_at: auth.expires_at,
    })
}
