//! Application configuration module
//!
//! Provides the configuration consumed by the server at startup. Values come
//! from the process environment (optionally seeded from a `.env` file by the
//! binary) and fall back to development defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite://events.db?mode=rwc` |
//! | `JWT_SECRET` | development secret (logged as a warning) |
//! | `ACCESS_TOKEN_EXPIRE_MINUTES` | `30` |
//! | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` | `8000` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Default SQLite database, created on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite://events.db?mode=rwc";

/// Signing secret used when `JWT_SECRET` is not set
pub const DEV_JWT_SECRET: &str = "dev-secret-change-me-in-production";

/// Access token lifetime when `ACCESS_TOKEN_EXPIRE_MINUTES` is not set
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Lowest bcrypt work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Accepted bcrypt work factors
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = MIN_BCRYPT_COST..=31;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection string
    pub database_url: String,
    /// HMAC secret for access tokens
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub token_ttl_minutes: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Interface to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// `from_env` is this function over `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        match lookup("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => {
                tracing::warn!("JWT_SECRET not set, using the development signing secret");
            }
        }

        if let Some(raw) = lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            let minutes = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidNumber("ACCESS_TOKEN_EXPIRE_MINUTES", raw))?;
            builder = builder.token_ttl_minutes(minutes);
        }

        if let Some(raw) = lookup("BCRYPT_COST") {
            let cost = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber("BCRYPT_COST", raw))?;
            builder = builder.bcrypt_cost(cost);
        }

        if let Some(raw) = lookup("SERVER_HOST") {
            let host = raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?;
            builder = builder.host(host);
        }

        if let Some(raw) = lookup("SERVER_PORT") {
            let port = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber("SERVER_PORT", raw))?;
            builder = builder.port(port);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::NonPositiveTtl(self.token_ttl_minutes));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::BcryptCost(self.bcrypt_cost));
        }
        Ok(())
    }

    /// Socket address the server listens on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_minutes: Option<i64>,
    bcrypt_cost: Option<u32>,
    host: Option<IpAddr>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the access token lifetime
    pub fn token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = Some(minutes);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the bind interface
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the bind port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            token_ttl_minutes: self.token_ttl_minutes.unwrap_or(defaults.token_ttl_minutes),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("{0} must be a number, got '{1}'")]
    InvalidNumber(&'static str, String),
    #[error("SERVER_HOST must be an IP address, got '{0}'")]
    InvalidHost(String),
    #[error("access token lifetime must be positive, got {0} minutes")]
    NonPositiveTtl(i64),
    #[error("bcrypt cost must be between 4 and 31, got {0}")]
    BcryptCost(u32),
}
