//! Terminal render surface.
//!
//! A terminal appends rather than mutating in place, so placeholder slots
//! print once and each settled line prints against its slot's product id.
//! Output goes through an injected writer; the binary passes stdout.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use cartfront_core::ProductId;

use super::{CartSummaryView, DisplayState, LineItemView, Renderer};

/// Renders the cart page as plain text lines.
pub struct ConsoleRenderer<W> {
    out: Mutex<W>,
}

impl ConsoleRenderer<io::Stdout> {
    /// A renderer writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleRenderer<W> {
    /// A renderer writing to the given sink.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consume the renderer and return the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn line(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{text}");
        }
    }
}

impl<W: Write + Send> Renderer for ConsoleRenderer<W> {
    fn set_display_state(&self, state: DisplayState) {
        match state {
            DisplayState::Loading => self.line("Loading cart..."),
            DisplayState::Error => {
                self.line("Failed to load the cart. The catalog may be unreachable.");
            }
            DisplayState::Content => self.line("=== Your Cart ==="),
        }
    }

    fn render_cart_summary(&self, summary: &CartSummaryView) {
        self.line(&format!(
            "Date: {} | Total Items: {} | User ID: {}",
            summary.date, summary.total_items, summary.user_id
        ));
    }

    fn render_placeholders(&self, product_ids: &[ProductId]) {
        for product_id in product_ids {
            self.line(&format!("  [product {product_id}] loading..."));
        }
    }

    fn render_line_item(&self, product_id: ProductId, item: &LineItemView) {
        if item.failed {
            self.line(&format!(
                "  [product {product_id}] failed to load (qty: {})",
                item.quantity
            ));
        } else {
            let title = item.title.as_deref().unwrap_or("(untitled)");
            let unit = item.unit_price.as_deref().unwrap_or("-");
            let total = item.line_total.as_deref().unwrap_or("-");
            self.line(&format!(
                "  [product {product_id}] {title} - {unit} each x {} = {total}",
                item.quantity
            ));
        }
    }

    fn render_total(&self, total: &str) {
        self.line(&format!("Cart Total: {total}"));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cartfront_core::UserId;

    fn rendered(render: impl FnOnce(&ConsoleRenderer<Vec<u8>>)) -> String {
        let renderer = ConsoleRenderer::new(Vec::new());
        render(&renderer);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_renders_summary_line() {
        let out = rendered(|r| {
            r.render_cart_summary(&CartSummaryView {
                date: "May 1, 2023".to_string(),
                total_items: 3,
                user_id: UserId::new(1),
            });
        });
        assert_eq!(out, "Date: May 1, 2023 | Total Items: 3 | User ID: 1\n");
    }

    #[test]
    fn test_renders_failed_line_distinctly() {
        let out = rendered(|r| {
            r.render_line_item(
                ProductId::new(7),
                &LineItemView {
                    product_id: ProductId::new(7),
                    title: None,
                    quantity: 2,
                    unit_price: None,
                    line_total: None,
                    image_url: None,
                    failed: true,
                },
            );
        });
        assert_eq!(out, "  [product 7] failed to load (qty: 2)\n");
    }

    #[test]
    fn test_renders_total() {
        let out = rendered(|r| r.render_total("$19.98"));
        assert_eq!(out, "Cart Total: $19.98\n");
    }
}
