//! Domain types for the catalog API.
//!
//! Field names mirror the catalog's JSON (camelCase on the wire); fields the
//! cart page does not use are ignored on deserialization.

use cartfront_core::{CartId, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cart as returned by `GET /carts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRecord {
    pub id: CartId,
    pub user_id: UserId,
    /// Cart date as an ISO-ish timestamp string; parsed for display only.
    pub date: String,
    /// Cart lines, in display order. The wire field is named `products`.
    #[serde(rename = "products")]
    pub items: Vec<CartItem>,
}

/// One line of a cart: a product reference and a quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A product as returned by `GET /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Unit price; the catalog serializes prices as JSON numbers.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_record_deserializes_from_catalog_json() {
        let cart: CartRecord = serde_json::from_str(
            r#"{
                "id": 2,
                "userId": 1,
                "date": "2020-03-02T00:00:00.000Z",
                "products": [
                    {"productId": 1, "quantity": 2},
                    {"productId": 9, "quantity": 1}
                ],
                "__v": 0
            }"#,
        )
        .unwrap();

        assert_eq!(cart.id, CartId::new(2));
        assert_eq!(cart.user_id, UserId::new(1));
        assert_eq!(cart.items.len(), 2);
        let first = cart.items.first().unwrap();
        assert_eq!(first.product_id, ProductId::new(1));
        assert_eq!(first.quantity, 2);
    }

    #[test]
    fn test_product_deserializes_numeric_price() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Fjallraven - Foldsack No. 1 Backpack",
                "price": 109.95,
                "description": "Your perfect pack for everyday use",
                "category": "men's clothing",
                "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
                "rating": {"rate": 3.9, "count": 120}
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert!(product.image.starts_with("https://"));
    }

    #[test]
    fn test_cart_item_rejects_negative_quantity() {
        let result: Result<CartItem, _> =
            serde_json::from_str(r#"{"productId": 1, "quantity": -1}"#);
        assert!(result.is_err());
    }
}
