/**
 * Server Initialization
 *
 * Builds the application state from configuration and wires it into the
 * router.
 *
 * # Initialization Process
 *
 * 1. Open the database and apply migrations
 * 2. Build the token service and password hasher
 * 3. Create the router
 *
 * A database failure here is fatal.
 */

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Open the database and build every shared service
///
/// # Errors
/// * `BackendError::Database` - connection or migration failed
/// * `BackendError::PasswordHash` - bcrypt cost out of range
pub async fn build_state(config: &AppConfig) -> Result<AppState, BackendError> {
    let db_pool = load_database(config).await?;
    let tokens = TokenService::from_config(config);
    let passwords = PasswordHasher::new(config.bcrypt_cost)?;

    tracing::info!(
        "State initialized (token ttl {} min, bcrypt cost {})",
        config.token_ttl_minutes,
        config.bcrypt_cost
    );

    Ok(AppState::new(db_pool, tokens, passwords))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Router with all routes and middleware, ready to serve
pub async fn create_app(config: &AppConfig) -> Result<Router, BackendError> {
    tracing::info!("Initializing event management backend");

    let state = build_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");
    Ok(app)
}
