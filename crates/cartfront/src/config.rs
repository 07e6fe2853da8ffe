//! Cartfront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_BASE_URL` - Base URL of the product catalog
//!   (default: `https://fakestoreapi.com`)
//! - `CARTFRONT_CART_ID` - Identifier of the cart to load (default: 2)
//! - `CATALOG_TIMEOUT_SECS` - Per-request timeout in seconds (default: 10)

use std::time::Duration;

use cartfront_core::CartId;
use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
const DEFAULT_CART_ID: &str = "2";
const DEFAULT_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cartfront application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog API configuration
    pub catalog: CatalogConfig,
    /// The cart this page displays
    pub cart_id: CartId,
}

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service
    pub base_url: Url,
    /// Timeout applied to each catalog request
    pub timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so a bare environment is valid.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = parse_base_url(
            "CATALOG_BASE_URL",
            &get_env_or_default("CATALOG_BASE_URL", DEFAULT_BASE_URL),
        )?;
        let timeout = parse_timeout(
            "CATALOG_TIMEOUT_SECS",
            &get_env_or_default("CATALOG_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        )?;
        let cart_id = parse_cart_id(
            "CARTFRONT_CART_ID",
            &get_env_or_default("CARTFRONT_CART_ID", DEFAULT_CART_ID),
        )?;

        Ok(Self {
            catalog: CatalogConfig { base_url, timeout },
            cart_id,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a base URL value.
fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a cart id value.
fn parse_cart_id(key: &str, value: &str) -> Result<CartId, ConfigError> {
    value
        .parse::<i32>()
        .map(CartId::new)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a timeout value in whole seconds.
fn parse_timeout(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_parses() {
        let url = parse_base_url("CATALOG_BASE_URL", DEFAULT_BASE_URL).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        let err = parse_base_url("CATALOG_BASE_URL", "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
        assert!(err.to_string().contains("CATALOG_BASE_URL"));
    }

    #[test]
    fn test_parse_cart_id() {
        assert_eq!(
            parse_cart_id("CARTFRONT_CART_ID", "2").unwrap(),
            CartId::new(2)
        );
        assert!(parse_cart_id("CARTFRONT_CART_ID", "two").is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(
            parse_timeout("CATALOG_TIMEOUT_SECS", "10").unwrap(),
            Duration::from_secs(10)
        );
        assert!(parse_timeout("CATALOG_TIMEOUT_SECS", "-1").is_err());
    }
}
