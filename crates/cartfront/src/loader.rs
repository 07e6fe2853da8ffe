//! Cart load orchestration.
//!
//! A load is one pass of: fetch the cart, show the summary and placeholder
//! slots, fan out one product fetch per cart line, and total the results
//! once every fetch has settled. A product failure degrades that one line to
//! a visible failure marker; only a cart failure aborts the load.
//!
//! Loads are generation-counted: starting a new load supersedes any load
//! still in flight, and a superseded load stops writing to the display.

use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::join_all;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

use cartfront_core::{CartId, CurrencyCode, Price, ProductId, UserId};

use crate::catalog::{CartItem, CartRecord, CatalogApi, CatalogError, Product};
use crate::render::{CartSummaryView, DisplayState, LineItemView, Renderer};

// =============================================================================
// Load Results
// =============================================================================

/// Header facts derived from a fetched cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Raw cart date as sent by the catalog; formatted at the view layer.
    pub date: String,
    /// Sum of quantities across all cart lines.
    pub total_items: u32,
    pub user_id: UserId,
}

impl CartSummary {
    fn of(cart: &CartRecord) -> Self {
        Self {
            date: cart.date.clone(),
            total_items: cart.items.iter().map(|item| item.quantity).sum(),
            user_id: cart.user_id,
        }
    }
}

/// One settled cart line: either the product with its computed line total,
/// or a failure marker holding what little the cart itself knew.
#[derive(Debug, Clone)]
pub enum LineItem {
    Loaded {
        product: Product,
        quantity: u32,
        line_total: Price,
    },
    Failed {
        product_id: ProductId,
        quantity: u32,
    },
}

impl LineItem {
    /// A settled line for a successfully fetched product.
    #[must_use]
    pub fn loaded(product: Product, quantity: u32) -> Self {
        let line_total = Price::new(product.price, CurrencyCode::USD).times(quantity);
        Self::Loaded {
            product,
            quantity,
            line_total,
        }
    }

    /// A failure marker for a product that could not be fetched.
    #[must_use]
    pub fn failed(product_id: ProductId, quantity: u32) -> Self {
        Self::Failed {
            product_id,
            quantity,
        }
    }

    #[must_use]
    pub fn product_id(&self) -> ProductId {
        match self {
            Self::Loaded { product, .. } => product.id,
            Self::Failed { product_id, .. } => *product_id,
        }
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        match self {
            Self::Loaded { quantity, .. } | Self::Failed { quantity, .. } => *quantity,
        }
    }

    /// The line total, absent for failure markers (they contribute zero).
    #[must_use]
    pub fn line_total(&self) -> Option<Price> {
        match self {
            Self::Loaded { line_total, .. } => Some(*line_total),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Everything one successful load produced, immutable once returned.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub summary: CartSummary,
    /// One entry per cart line, in cart order.
    pub line_items: Vec<LineItem>,
    /// Sum of line totals over loaded lines; failed lines contribute zero.
    pub total: Price,
}

/// Errors reported by [`CartLoader::load`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The cart itself could not be fetched; the whole load is aborted, the
    /// display shows the error state, and no product is requested.
    #[error("Failed to fetch cart: {0}")]
    CartFetch(#[source] CatalogError),

    /// A newer load started while this one was in flight; this load stopped
    /// writing to the display.
    #[error("Load superseded by a newer reload")]
    Superseded,
}

// =============================================================================
// CartLoader
// =============================================================================

/// Orchestrates loading one cart page.
///
/// Owns the catalog capability and the render surface; holds no per-load
/// state. Each [`load`](Self::load) builds a fresh [`LoadResult`] from
/// scratch, so reloads never see residue from earlier attempts.
pub struct CartLoader<C, R> {
    catalog: C,
    renderer: R,
    cart_id: CartId,
    generation: AtomicU64,
}

impl<C: CatalogApi, R: Renderer> CartLoader<C, R> {
    pub fn new(catalog: C, renderer: R, cart_id: CartId) -> Self {
        Self {
            catalog,
            renderer,
            cart_id,
            generation: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Load the cart and render it.
    ///
    /// Runs the full sequence: loading state, cart fetch, summary and
    /// placeholder emission, parallel product fetches with per-product
    /// failure degradation, settlement-order line rendering, and the total
    /// once every fetch has settled.
    ///
    /// # Errors
    ///
    /// - [`LoadError::CartFetch`] when the cart itself cannot be fetched.
    /// - [`LoadError::Superseded`] when another load started while this one
    ///   was in flight; the newer load owns the display.
    #[instrument(skip(self), fields(cart_id = %self.cart_id))]
    pub async fn load(&self) -> Result<LoadResult, LoadError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.renderer.set_display_state(DisplayState::Loading);

        let cart = match self.catalog.fetch_cart(self.cart_id).await {
            Ok(cart) => cart,
            Err(e) => {
                tracing::error!(cart_id = %self.cart_id, error = %e, "Failed to fetch cart");
                if !self.is_current(generation) {
                    return Err(LoadError::Superseded);
                }
                self.renderer.set_display_state(DisplayState::Error);
                return Err(LoadError::CartFetch(e));
            }
        };
        if !self.is_current(generation) {
            return Err(LoadError::Superseded);
        }

        let summary = CartSummary::of(&cart);
        self.renderer.set_display_state(DisplayState::Content);
        self.renderer
            .render_cart_summary(&CartSummaryView::from(&summary));

        // Placeholder slots go up before any product fetch starts, so the
        // layout is visible while product data streams in.
        let slots: Vec<ProductId> = cart.items.iter().map(|item| item.product_id).collect();
        self.renderer.render_placeholders(&slots);

        // One fetch per cart line; a failure in one never cancels the others.
        let line_items =
            join_all(cart.items.iter().map(|item| self.load_line(item, generation))).await;

        if !self.is_current(generation) {
            return Err(LoadError::Superseded);
        }

        let total_amount: Decimal = line_items
            .iter()
            .filter_map(LineItem::line_total)
            .map(|price| price.amount())
            .sum();
        let total = Price::new(total_amount, CurrencyCode::USD);
        self.renderer.render_total(&total.display());

        tracing::info!(
            cart_id = %self.cart_id,
            lines = line_items.len(),
            total = %total.display(),
            "Cart loaded"
        );

        Ok(LoadResult {
            summary,
            line_items,
            total,
        })
    }

    /// Re-run the full load sequence for the same cart.
    ///
    /// Nothing is carried over from earlier attempts: the display states are
    /// replayed, placeholders are rebuilt, and every product is fetched
    /// again.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub async fn retry(&self) -> Result<LoadResult, LoadError> {
        self.load().await
    }

    /// Fetch one cart line's product, degrade to a failure marker on error,
    /// and render the settled line into its slot.
    async fn load_line(&self, item: &CartItem, generation: u64) -> LineItem {
        let line = match self.catalog.fetch_product(item.product_id).await {
            Ok(product) => LineItem::loaded(product, item.quantity),
            Err(e) => {
                tracing::warn!(product_id = %item.product_id, error = %e, "Failed to fetch product");
                LineItem::failed(item.product_id, item.quantity)
            }
        };
        if self.is_current(generation) {
            self.renderer
                .render_line_item(line.product_id(), &LineItemView::from(&line));
        }
        line
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
