//! View models handed to a [`Renderer`](super::Renderer).
//!
//! Prices and dates are preformatted here so render surfaces only print.

use cartfront_core::{CurrencyCode, Price, ProductId, UserId};
use chrono::DateTime;

use crate::loader::{CartSummary, LineItem};

/// Cart header display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryView {
    /// Human-readable cart date, e.g. "May 1, 2023".
    pub date: String,
    /// Sum of quantities across all cart lines.
    pub total_items: u32,
    pub user_id: UserId,
}

impl From<&CartSummary> for CartSummaryView {
    fn from(summary: &CartSummary) -> Self {
        Self {
            date: format_cart_date(&summary.date),
            total_items: summary.total_items,
            user_id: summary.user_id,
        }
    }
}

/// Line item display data.
///
/// For failure markers the product fields are absent and `failed` is set;
/// the slot still shows the product id and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemView {
    pub product_id: ProductId,
    pub title: Option<String>,
    pub quantity: u32,
    /// Formatted unit price, e.g. "$109.95".
    pub unit_price: Option<String>,
    /// Formatted line total (unit price times quantity).
    pub line_total: Option<String>,
    pub image_url: Option<String>,
    pub failed: bool,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        match item {
            LineItem::Loaded {
                product,
                quantity,
                line_total,
            } => Self {
                product_id: product.id,
                title: Some(product.title.clone()),
                quantity: *quantity,
                unit_price: Some(Price::new(product.price, CurrencyCode::USD).display()),
                line_total: Some(line_total.display()),
                image_url: Some(product.image.clone()),
                failed: false,
            },
            LineItem::Failed {
                product_id,
                quantity,
            } => Self {
                product_id: *product_id,
                title: None,
                quantity: *quantity,
                unit_price: None,
                line_total: None,
                image_url: None,
                failed: true,
            },
        }
    }
}

/// Format a cart date for display.
///
/// The catalog sends ISO-ish timestamps; anything unparseable is shown
/// verbatim rather than failing the page.
#[must_use]
pub fn format_cart_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_cart_date() {
        assert_eq!(format_cart_date("2023-05-01T00:00:00Z"), "May 1, 2023");
        assert_eq!(format_cart_date("2020-03-02T00:00:00.000Z"), "March 2, 2020");
    }

    #[test]
    fn test_format_cart_date_falls_back_to_raw() {
        assert_eq!(format_cart_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_view_from_loaded_line() {
        let product = Product {
            id: ProductId::new(1),
            title: "Backpack".to_string(),
            price: Decimal::new(999, 2),
            image: "https://img.example/1.jpg".to_string(),
        };
        let view = LineItemView::from(&LineItem::loaded(product, 2));

        assert!(!view.failed);
        assert_eq!(view.title.as_deref(), Some("Backpack"));
        assert_eq!(view.unit_price.as_deref(), Some("$9.99"));
        assert_eq!(view.line_total.as_deref(), Some("$19.98"));
        assert_eq!(view.quantity, 2);
    }

    #[test]
    fn test_view_from_failed_line_has_no_product_fields() {
        let view = LineItemView::from(&LineItem::failed(ProductId::new(7), 3));

        assert!(view.failed);
        assert_eq!(view.product_id, ProductId::new(7));
        assert_eq!(view.quantity, 3);
        assert!(view.title.is_none());
        assert!(view.unit_price.is_none());
        assert!(view.line_total.is_none());
        assert!(view.image_url.is_none());
    }
}
