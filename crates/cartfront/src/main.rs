//! Cartfront binary - renders a cart from the remote catalog to the terminal.
//!
//! # Architecture
//!
//! - Configuration from environment variables (`.env` supported)
//! - `tracing` for diagnostics, controlled via `RUST_LOG`
//! - The loader talks to the catalog through `CatalogClient` and renders
//!   through the terminal surface
//! - On a whole-load failure the user can trigger a manual reload; there are
//!   no automatic retries

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cartfront::catalog::CatalogClient;
use cartfront::config::AppConfig;
use cartfront::loader::{CartLoader, LoadError};
use cartfront::render::ConsoleRenderer;

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartfront=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = CatalogClient::new(&config.catalog).expect("Failed to build catalog client");
    let loader = CartLoader::new(catalog, ConsoleRenderer::stdout(), config.cart_id);

    tracing::info!(cart_id = %loader.cart_id(), "Loading cart");

    let mut result = loader.load().await;
    loop {
        match result {
            Ok(_) => break,
            // Single caller; nothing newer can exist
            Err(LoadError::Superseded) => break,
            Err(LoadError::CartFetch(_)) => {
                if !prompt_retry().await {
                    std::process::exit(1);
                }
                result = loader.retry().await;
            }
        }
    }
}

/// Ask on the terminal whether to reload after a failed attempt.
async fn prompt_retry() -> bool {
    {
        let mut err = std::io::stderr();
        let _ = write!(err, "Retry loading the cart? [y/N] ");
        let _ = err.flush();
    }

    let mut line = String::new();
    let mut stdin = tokio::io::BufReader::new(tokio::io::stdin());
    match stdin.read_line(&mut line).await {
        Ok(0) | Err(_) => false,
        Ok(_) => line.trim().eq_ignore_ascii_case("y"),
    }
}
