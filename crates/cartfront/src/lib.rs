//! Cartfront - headless shopping cart page.
//!
//! Fetches a cart and the products it references from a remote catalog
//! service and renders the result through a pluggable display surface.
//!
//! # Architecture
//!
//! - [`config`] - environment-driven configuration
//! - [`catalog`] - REST client for the remote product catalog
//! - [`loader`] - orchestrates one cart fetch plus N parallel product
//!   fetches, degrading per-product failures into visible failure markers
//! - [`render`] - display states, view models, and the render-surface
//!   abstraction that keeps the orchestration headless
//!
//! # Example
//!
//! ```rust,ignore
//! use cartfront::catalog::CatalogClient;
//! use cartfront::config::AppConfig;
//! use cartfront::loader::CartLoader;
//! use cartfront::render::ConsoleRenderer;
//!
//! let config = AppConfig::from_env()?;
//! let catalog = CatalogClient::new(&config.catalog)?;
//! let loader = CartLoader::new(catalog, ConsoleRenderer::stdout(), config.cart_id);
//! let result = loader.load().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod loader;
pub mod render;
