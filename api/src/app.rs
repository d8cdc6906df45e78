//! Application state and factory
//!
//! This module holds the shared services and provides the factory for
//! creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    http::StatusCode,
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use passage_core::repositories::UserRepository;
use passage_core::services::account::{AccountService, PasswordHasher};
use passage_core::services::auth::AuthService;
use passage_shared::config::CookieConfig;

use crate::dto::error_codes;
use crate::handlers::error_handler::error_response;
use crate::middleware::auth::JwtAuth;
use crate::routes::auth::{login, logout, public_key, refresh, register};
use crate::routes::me::me;

/// Application state that holds shared services
pub struct AppState<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub auth_service: Arc<AuthService>,
    pub account_service: Arc<AccountService<U, H>>,
    pub cookie: CookieConfig,
}

/// Create and configure the application with all dependencies
///
/// The signing keys must already be loaded.
pub fn create_app<U, H>(
    app_state: web::Data<AppState<U, H>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    let auth_service = Arc::clone(&app_state.auth_service);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            let response = error_response(
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_REQUEST,
                err.to_string(),
            );
            InternalError::from_response(err, response).into()
        }))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, H>))
                        .route("/login", web::post().to(login::<U, H>))
                        .route("/refresh", web::post().to(refresh::<U, H>))
                        .route("/logout", web::post().to(logout::<U, H>))
                        .route("/public-key", web::get().to(public_key::<U, H>)),
                )
                .route("/me", web::get().to(me).wrap(JwtAuth::new(auth_service))),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "passage-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
}
