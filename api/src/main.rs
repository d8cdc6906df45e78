use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use passage_api::app::{create_app, AppState};
use passage_api::config;
use passage_core::repositories::InMemoryUserRepository;
use passage_core::services::account::{AccountService, BcryptHasher};
use passage_core::services::auth::{AuthService, AuthServiceConfig};
use passage_core::services::token::Rs256KeyManager;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load();
    config::init_logging(&config.logging);

    info!("Starting Passage API Server ({})", config.environment);

    // Key generation or loading failure is fatal
    let key_manager = Rs256KeyManager::from_config(&config.auth.jwt);
    key_manager
        .ensure_keys()
        .context("failed to prepare JWT signing keys")?;

    let auth_service = Arc::new(
        AuthServiceConfig::try_from(&config.auth.jwt)
            .and_then(|lifetimes| AuthService::new(Arc::new(key_manager), lifetimes))
            .context("invalid token lifetime configuration")?,
    );

    let users = Arc::new(InMemoryUserRepository::new());
    let hasher = Arc::new(BcryptHasher::from_config(&config.auth.password));
    let account_service = Arc::new(AccountService::new(users, hasher, Arc::clone(&auth_service)));

    let app_state = web::Data::new(AppState {
        auth_service,
        account_service,
        cookie: config.auth.cookie.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
