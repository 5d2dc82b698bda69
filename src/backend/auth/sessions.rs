/**
 * Session Management and JWT Tokens
 *
 * This module handles access-token issuance and validation. Tokens are
 * HS256-signed JWTs whose subject is the user's email address.
 *
 * Tokens are stateless: nothing is persisted and nothing can revoke a token
 * before its `exp`. Each token carries a random `jti`.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::AuthError;
use crate::shared::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Unique token id
    pub jti: String,
}

/// Issues and verifies access tokens with a server-held secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    /// Create a token service from a shared secret and a lifetime in minutes
    pub fn new(secret: &[u8], ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_seconds: ttl_minutes.saturating_mul(60),
        }
    }

    /// Build from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.jwt_secret.as_bytes(), config.token_ttl_minutes)
    }

    /// Create a token for `subject` with the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(subject, self.ttl_seconds)
    }

    /// Create a token for `subject` that expires `ttl_seconds` from now
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        ttl_seconds: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            exp: now.saturating_add(ttl_seconds),
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify signature and expiry and return the claims
    ///
    /// Malformed, wrongly signed and expired tokens all yield
    /// `AuthError::Invalid`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Rejected access token: {:?}", e.kind());
                AuthError::Invalid
            })
    }

    /// Verify a token and return its subject
    pub fn subject(&self, token: &str) -> Result<String, AuthError> {
        self.verify(token).map(|claims| claims.sub)
    }
}
