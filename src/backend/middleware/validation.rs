/**
 * Request Extractors with Uniform Rejections
 *
 * Thin wrappers over axum's `Json`, `Form`, `Query` and `Path` extractors.
 * They keep axum's status code for a rejection but render it through
 * `BackendError`, so every failure a client sees has the same JSON shape.
 *
 * `ValidatedJson<T>` additionally runs `T::validate()` and turns a field
 * violation into a 422 before the handler runs.
 */

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::Validate;

/// JSON body that has been deserialized and validated
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected JSON body: {}", rejection.body_text());
            BackendError::handler(rejection.status(), rejection.body_text())
        })?;

        value.validate().map_err(|e| {
            tracing::warn!("Validation failed: {}", e);
            BackendError::from(e)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// URL-encoded form body
#[derive(Debug, Clone)]
pub struct ApiForm<T>(pub T);

impl<S, T> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Form::<T>::from_request(req, state)
            .await
            .map(|Form(value)| ApiForm(value))
            .map_err(|rejection| BackendError::handler(rejection.status(), rejection.body_text()))
    }
}

/// Query string parameters
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Query::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Query(value)| ApiQuery(value))
            .map_err(|rejection| BackendError::handler(rejection.status(), rejection.body_text()))
    }
}

/// Path parameters
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Path(value)| ApiPath(value))
            .map_err(|rejection| BackendError::handler(rejection.status(), rejection.body_text()))
    }
}
