/**
 * Password Hashing
 *
 * bcrypt-based one-way hashing for stored credentials.
 *
 * # Concurrency
 *
 * bcrypt is deliberately slow. The async entry points run it on tokio's
 * blocking pool so a login never stalls other requests on the same worker.
 *
 * # Security
 *
 * - Every hash carries its own random salt
 * - Verification uses bcrypt's constant-time comparison
 * - `verify_dummy` burns the same amount of work as a real verification, so
 *   an unknown email costs the same as a wrong password
 */

use std::sync::Arc;

use crate::backend::error::BackendError;

/// Plaintext hashed once at construction to back `verify_dummy`
const DUMMY_PASSWORD: &str = "timing-equalizer-not-a-real-password";

/// bcrypt hasher with a fixed work factor
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)?;
        Ok(Self {
            cost,
            dummy_hash: dummy_hash.into(),
        })
    }

    /// Hash on the current thread
    pub fn hash_blocking(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(password, self.cost)
    }

    /// Verify on the current thread
    ///
    /// A malformed hash counts as a mismatch.
    pub fn verify_blocking(password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Password verification against malformed hash: {:?}", e);
                false
            }
        }
    }

    /// Hash a password on the blocking pool
    pub async fn hash(&self, password: String) -> Result<String, BackendError> {
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::internal(format!("password hashing task failed: {e}")))?
            .map_err(BackendError::from)
    }

    /// Verify a password against a stored hash on the blocking pool
    pub async fn verify(&self, password: String, hash: String) -> bool {
        tokio::task::spawn_blocking(move || Self::verify_blocking(&password, &hash))
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Password verification task failed: {:?}", e);
                false
            })
    }

    /// Run a full verification that can never succeed
    ///
    /// Always returns `false`.
    pub async fn verify_dummy(&self, password: String) -> bool {
        let _ = self.verify(password, self.dummy_hash.to_string()).await;
        false
    }
}
