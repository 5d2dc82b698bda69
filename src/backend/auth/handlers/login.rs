/**
 * Login Handler
 *
 * Credential exchange for POST /users/login.
 *
 * # Authentication Process
 *
 * 1. Read `username` (the email) and `password` from the form body
 * 2. Look up the user by email
 * 3. Verify the password with bcrypt
 * 4. Issue an access token whose subject is the email
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401
 * - An unknown email still pays for one bcrypt verification
 * - Passwords are never logged
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{LoginForm, TokenResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{AuthError, BackendResult};
use crate::backend::middleware::ApiForm;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password, with
///   `WWW-Authenticate: Bearer`
/// * `500 Internal Server Error` - database or token signing failure
///
/// # Example Request
///
/// ```http
/// POST /users/login HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// username=ann%40example.com&password=pw
/// ```
///
/// # Example Response
///
/// ```json
/// {"access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "token_type": "bearer"}
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<TokenService>,
    ApiForm(form): ApiForm<LoginForm>,
) -> BackendResult<Json<TokenResponse>> {
    tracing::info!("Login request for: {}", form.username);

    let Some(user) = get_user_by_email(&pool, &form.username).await? else {
        passwords.verify_dummy(form.password).await;
        tracing::warn!("User not found: {}", form.username);
        return Err(AuthError::InvalidCredentials.into());
    };

    if !passwords
        .verify(form.password, user.hashed_password.clone())
        .await
    {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(AuthError::InvalidCredentials.into());
    }

    let access_token = tokens.issue(&user.email)?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse::bearer(access_token)))
}
