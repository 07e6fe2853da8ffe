//! Recording render surface.
//!
//! Records every render call instead of drawing, so tests can assert on the
//! exact sequence a load produced.

use std::sync::Mutex;

use cartfront_core::ProductId;

use super::{CartSummaryView, DisplayState, LineItemView, Renderer};

/// One recorded render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    State(DisplayState),
    Summary(CartSummaryView),
    Placeholders(Vec<ProductId>),
    LineItem(ProductId, LineItemView),
    Total(String),
}

/// A render surface that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in call order.
    #[must_use]
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: RenderEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Renderer for RecordingRenderer {
    fn set_display_state(&self, state: DisplayState) {
        self.push(RenderEvent::State(state));
    }

    fn render_cart_summary(&self, summary: &CartSummaryView) {
        self.push(RenderEvent::Summary(summary.clone()));
    }

    fn render_placeholders(&self, product_ids: &[ProductId]) {
        self.push(RenderEvent::Placeholders(product_ids.to_vec()));
    }

    fn render_line_item(&self, product_id: ProductId, item: &LineItemView) {
        self.push(RenderEvent::LineItem(product_id, item.clone()));
    }

    fn render_total(&self, total: &str) {
        self.push(RenderEvent::Total(total.to_string()));
    }
}
