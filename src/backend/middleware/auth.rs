/**
 * Access Control
 *
 * Resolves the caller of a request from its bearer token and enforces role
 * requirements. Handlers opt in by taking one of the extractors:
 *
 * - `CurrentUser` - any authenticated user
 * - `AdminUser` - an authenticated user holding `Role::Admin`
 *
 * Extractors run before the request body is read, so an unauthenticated
 * mutation is rejected with 401/403 even when its body is invalid.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::error::{AuthError, BackendError};
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::Invalid
        })?;

    let (scheme, token) = value.split_once(' ').ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        AuthError::Invalid
    })?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        tracing::warn!("Invalid Authorization header format");
        return Err(AuthError::Invalid);
    }
    Ok(token)
}

/// Resolve the user a token was issued for
///
/// # Errors
/// * `AuthError::Invalid` - token fails verification
/// * `AuthError::UserNotFound` - the token's subject is not a registered user
/// * `BackendError::Database` - lookup failed
pub async fn current_user(
    pool: &SqlitePool,
    tokens: &TokenService,
    token: &str,
) -> Result<User, BackendError> {
    let email = tokens.subject(token)?;

    get_user_by_email(pool, &email).await?.ok_or_else(|| {
        tracing::warn!("Token subject no longer exists: {}", email);
        BackendError::from(AuthError::UserNotFound)
    })
}

/// Pass `user` through if it holds `role`
pub fn require_role(user: User, role: Role) -> Result<User, AuthError> {
    if user.role != role {
        tracing::warn!(
            "User {} with role {} denied, {} required",
            user.email,
            user.role,
            role
        );
        return Err(AuthError::Forbidden);
    }
    Ok(user)
}

/// Axum extractor for the authenticated user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let user = current_user(&state.db_pool, &state.tokens, token).await?;
        Ok(CurrentUser(user))
    }
}

/// Axum extractor for an authenticated admin
#[derive(Clone, Debug)]
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        let admin = require_role(user, Role::Admin)?;
        Ok(AdminUser(admin))
    }
}
