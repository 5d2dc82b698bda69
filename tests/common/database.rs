//! Database test fixtures
//!
//! Each fixture owns a fresh in-memory SQLite database with migrations
//! applied, so tests never share rows.

use eventhub::backend::auth::{PasswordHasher, TokenService};
use eventhub::backend::server::config::connect_in_memory;
use eventhub::backend::server::AppState;
use eventhub::shared::MIN_BCRYPT_COST;
use sqlx::SqlitePool;

/// Signing key used by every test token service
pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret";

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to create in-memory database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Application state over this database
    ///
    /// bcrypt runs at its minimum cost to keep tests fast.
    pub fn state(&self) -> AppState {
        AppState::new(
            self.pool.clone(),
            TokenService::new(TEST_JWT_SECRET, 30),
            PasswordHasher::new(MIN_BCRYPT_COST).expect("Failed to create password hasher"),
        )
    }
}
