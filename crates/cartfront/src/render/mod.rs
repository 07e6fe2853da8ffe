//! Presentation layer: display states, the render-surface abstraction, and
//! the view models handed to it.
//!
//! The load sequence never touches a display surface directly - it emits
//! view data through [`Renderer`]. That keeps the orchestration headless:
//! the binary plugs in a terminal surface, tests plug in a recording one.

mod console;
mod recording;
mod views;

pub use console::ConsoleRenderer;
pub use recording::{RecordingRenderer, RenderEvent};
pub use views::{CartSummaryView, LineItemView, format_cart_date};

use std::sync::Arc;

use cartfront_core::ProductId;

/// The three mutually exclusive states of the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// The cart is being fetched; nothing else is visible yet.
    Loading,
    /// The cart fetch failed; a manual reload is the only way forward.
    Error,
    /// Cart content is visible (possibly with per-product failure cards).
    Content,
}

/// A display surface for the cart page.
///
/// Calls arrive in a fixed protocol per load: `set_display_state(Loading)`,
/// then either `set_display_state(Error)`, or `set_display_state(Content)`
/// followed by the summary, the placeholder slots in cart order, one
/// `render_line_item` per slot in settlement order, and finally the total.
pub trait Renderer: Send + Sync {
    /// Switch the page between loading, error, and content states.
    fn set_display_state(&self, state: DisplayState);

    /// Show the cart header: date, total item count, owning user.
    fn render_cart_summary(&self, summary: &CartSummaryView);

    /// Create one placeholder slot per cart line, in cart order.
    fn render_placeholders(&self, product_ids: &[ProductId]);

    /// Replace the slot for `product_id` with its settled line item.
    fn render_line_item(&self, product_id: ProductId, item: &LineItemView);

    /// Show the formatted cart total, e.g. `"$19.98"`.
    fn render_total(&self, total: &str);
}

impl<R: Renderer + ?Sized> Renderer for Arc<R> {
    fn set_display_state(&self, state: DisplayState) {
        self.as_ref().set_display_state(state);
    }

    fn render_cart_summary(&self, summary: &CartSummaryView) {
        self.as_ref().render_cart_summary(summary);
    }

    fn render_placeholders(&self, product_ids: &[ProductId]) {
        self.as_ref().render_placeholders(product_ids);
    }

    fn render_line_item(&self, product_id: ProductId, item: &LineItemView) {
        self.as_ref().render_line_item(product_id, item);
    }

    fn render_total(&self, total: &str) {
        self.as_ref().render_total(total);
    }
}
