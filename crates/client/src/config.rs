//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PLANTA_API_BASE_URL` - Base URL of the backend REST API
//!   (e.g., `http://10.24.31.23:3000`)
//!
//! ## Optional
//! - `PLANTA_SESSION_USER` - User id whose profile and orders the session
//!   operates on (default: `1`)

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Base URL of the backend REST API.
    pub base_url: Url,
    /// User id the session's profile and order screens operate on.
    ///
    /// The original app matched plaintext credentials against the users
    /// collection to pick this; that flow is not carried forward, so the
    /// session user is plain configuration instead.
    pub session_user: String,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PLANTA_API_BASE_URL` is missing or not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(
            "PLANTA_API_BASE_URL",
            &get_required_env("PLANTA_API_BASE_URL")?,
        )?;
        let session_user = get_env_or_default("PLANTA_SESSION_USER", "1");

        Ok(Self {
            base_url,
            session_user,
        })
    }

    /// Build a configuration directly, bypassing the environment.
    #[must_use]
    pub fn new(base_url: Url, session_user: impl Into<String>) -> Self {
        Self {
            base_url,
            session_user: session_user.into(),
        }
    }
}

/// Parse and normalize a base URL value.
fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    Ok(url)
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
