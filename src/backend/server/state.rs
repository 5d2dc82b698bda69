/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. It holds
 * the services every handler may need:
 * - SQLite connection pool
 * - Token service (signing key + lifetime)
 * - Password hasher (bcrypt cost)
 *
 * All fields are cheap to clone. `FromRef` implementations let handlers
 * extract just the part they use with `State<T>`.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // query with pool
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Issues and verifies access tokens
    pub tokens: TokenService,

    /// Hashes and verifies passwords off the async runtime
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenService, passwords: PasswordHasher) -> Self {
        Self {
            db_pool,
            tokens,
            passwords,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords.clone()
    }
}
