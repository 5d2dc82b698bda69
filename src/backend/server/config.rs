/**
 * Server Configuration
 *
 * This module turns `AppConfig` into live server resources: the SQLite
 * connection pool, with the schema migrated.
 *
 * # Error Handling
 *
 * The database is required. Connection or migration failures are logged
 * and returned, and startup aborts.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::AppConfig;

/// Upper bound on pooled connections for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Parses `config.database_url`, creating the database file if missing
/// 2. Creates a SQLite connection pool
/// 3. Runs the embedded migrations
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| {
            tracing::error!("Invalid DATABASE_URL: {:?}", e);
            e
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Run the embedded migrations against `pool`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Fresh, migrated in-memory database
///
/// An in-memory SQLite database lives and dies with its connection, so the
/// pool is pinned to a single connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}
