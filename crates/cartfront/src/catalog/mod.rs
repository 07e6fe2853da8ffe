//! Remote catalog API client.
//!
//! # Architecture
//!
//! - Plain REST endpoints returning JSON, fetched with `reqwest`
//! - The catalog is the source of truth - no local sync, no caching, one
//!   call per need
//! - [`CatalogApi`] abstracts the transport so the load sequence can run
//!   against deterministic test doubles
//!
//! # Endpoints
//!
//! - `GET {base}/carts/{cartId}` - a cart with its product references
//! - `GET {base}/products/{productId}` - details for a single product

pub mod types;

pub use types::{CartItem, CartRecord, Product};

use std::sync::Arc;

use async_trait::async_trait;
use cartfront_core::{CartId, ProductId};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use crate::config::CatalogConfig;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Capability to fetch carts and products.
///
/// The production implementation is [`CatalogClient`]; tests substitute
/// scripted doubles.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch a cart by id.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport fails or the catalog answers
    /// with a non-success status.
    async fn fetch_cart(&self, cart_id: CartId) -> Result<CartRecord, CatalogError>;

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport fails or the catalog answers
    /// with a non-success status.
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
}

#[async_trait]
impl<C: CatalogApi> CatalogApi for Arc<C> {
    async fn fetch_cart(&self, cart_id: CartId) -> Result<CartRecord, CatalogError> {
        self.as_ref().fetch_cart(cart_id).await
    }

    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.as_ref().fetch_product(product_id).await
    }
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the catalog REST API.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Execute a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    async fn fetch_cart(&self, cart_id: CartId) -> Result<CartRecord, CatalogError> {
        self.get_json(&format!("carts/{cart_id}")).await
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.get_json(&format!("products/{product_id}")).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;
    use url::Url;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Status {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog returned HTTP 404: Not Found");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = CatalogConfig {
            base_url: Url::parse("https://catalog.example.com/").unwrap(),
            timeout: Duration::from_secs(5),
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://catalog.example.com");
    }
}
