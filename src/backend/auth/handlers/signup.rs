/**
 * Signup Handler
 *
 * User registration for POST /users/signup.
 *
 * # Registration Process
 *
 * 1. Deserialize and validate the body (`ValidatedJson`)
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Insert the user
 * 5. Return the stored user without its hash
 *
 * # Validation
 *
 * - `name` and `password` must not be empty
 * - `email` must be a syntactically valid address
 * - `role` must be `normal` or `admin` (defaults to `normal`)
 *
 * Two concurrent signups for the same email race past the lookup; the unique
 * index on `users.email` turns the loser into the same 400.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{SignupRequest, UserResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{create_user, get_user_by_email, NewUser};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::ValidatedJson;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - email already registered
/// * `422 Unprocessable Entity` - body fails validation
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /users/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Ann", "email": "ann@example.com", "role": "admin", "password": "pw"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": 1, "name": "Ann", "email": "ann@example.com", "role": "admin"}
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    State(passwords): State<PasswordHasher>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> BackendResult<(StatusCode, Json<UserResponse>)> {
    tracing::info!("Signup request for email: {}", request.email);

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("Email already registered"));
    }

    let hashed_password = passwords.hash(request.password).await?;

    let user = create_user(
        &pool,
        NewUser {
            email: request.email,
            name: request.name,
            hashed_password,
            role: request.role,
        },
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.email, user.role);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
