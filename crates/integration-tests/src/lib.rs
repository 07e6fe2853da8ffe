//! Integration tests for Cartfront.
//!
//! These tests run the real loader and HTTP client against a `wiremock`
//! catalog server, covering the full pipeline: config, client, load
//! sequence, render events.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartfront-integration-tests
//! ```
//!
//! This crate exports small builders for catalog-shaped JSON bodies and a
//! ready-made [`CatalogConfig`] pointed at a mock server.

use std::time::Duration;

use cartfront::config::CatalogConfig;
use serde_json::{Value, json};
use url::Url;

/// A `CatalogConfig` pointed at a test server.
///
/// # Panics
///
/// Panics if `base_url` is not a valid URL; test servers always hand out
/// valid ones.
#[must_use]
pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        base_url: Url::parse(base_url).expect("test server URL is valid"),
        timeout: Duration::from_secs(5),
    }
}

/// A catalog-shaped cart body: `items` is `(productId, quantity)` pairs.
#[must_use]
pub fn cart_json(id: i32, user_id: i32, date: &str, items: &[(i32, u32)]) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "date": date,
        "products": items
            .iter()
            .map(|&(product_id, quantity)| json!({
                "productId": product_id,
                "quantity": quantity,
            }))
            .collect::<Vec<_>>(),
    })
}

/// A catalog-shaped product body, including fields the page ignores.
#[must_use]
pub fn product_json(id: i32, title: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": "A product from the test catalog",
        "category": "test",
        "image": format!("https://catalog.test/img/{id}.jpg"),
        "rating": {"rate": 4.2, "count": 11},
    })
}
