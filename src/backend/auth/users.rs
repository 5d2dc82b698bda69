/**
 * User Model and Database Operations
 *
 * This module owns the `users` table. Users are created at signup and never
 * updated or deleted through the API.
 *
 * Email uniqueness is enforced by the `UNIQUE` constraint on `users.email`;
 * a violation surfaces as `BackendError::Conflict` so that two concurrent
 * signups with the same address produce exactly one row.
 */

use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::Role;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Database-assigned id
    pub id: i64,
    /// Login identity, unique across all users
    pub email: String,
    /// Display name
    pub name: String,
    /// bcrypt hash, never serialized
    pub hashed_password: String,
    /// Authorization label
    #[sqlx(try_from = "String")]
    pub role: Role,
}

/// Fields required to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub hashed_password: String,
    pub role: Role,
}

/// Create a new user
///
/// # Errors
/// `BackendError::Conflict` if the email is already registered,
/// `BackendError::Database` for any other storage failure.
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, BackendError> {
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, hashed_password, role)
        VALUES (?, ?, ?, ?)
        RETURNING id, email, name, hashed_password, role
        "#,
    )
    .bind(&new_user.email)
    .bind(&new_user.name)
    .bind(&new_user.hashed_password)
    .bind(new_user.role.as_str())
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Email already registered: {}", new_user.email);
            Err(BackendError::conflict("Email already registered"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, hashed_password, role
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Number of registered users
pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}
