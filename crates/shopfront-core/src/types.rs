//! # Catalog Types
//!
//! Types describing what the remote catalog knows about a product.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                       │
//! │  │    Product      │          │     Stock       │                       │
//! │  │  ─────────────  │          │  ─────────────  │                       │
//! │  │  id             │◄── same ─┤  id             │                       │
//! │  │  title          │    key   │  amount         │                       │
//! │  │  price_cents    │          │  (units the     │                       │
//! │  │  image          │          │   seller holds) │                       │
//! │  └─────────────────┘          └─────────────────┘                       │
//! │                                                                         │
//! │  Note: a Product carries NO quantity. Quantity exists only inside      │
//! │  cart entries (see cart::CartItem) and in the seller's Stock record.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Product identifier assigned by the remote catalog.
///
/// ## Why a plain integer?
/// The catalog keys both of its lookup endpoints (`products/{id}`,
/// `stock/{id}`) by a numeric id; we keep the same representation end to
/// end rather than minting local identifiers.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A product as the remote catalog describes it.
///
/// This is the catalog representation: price and presentation data only.
/// Cart-held quantity lives on [`crate::cart::CartItem`], never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier, shared with the matching Stock record.
    pub id: ProductId,

    /// Display title shown in the storefront.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image URL or path for display.
    pub image: String,
}

// =============================================================================
// Stock
// =============================================================================

/// Seller-side availability for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Stock {
    /// Catalog identifier, matches a Product id.
    pub id: ProductId,

    /// Units currently available from the seller.
    pub amount: i64,
}

impl Stock {
    /// Checks whether the seller can cover `requested` units.
    #[inline]
    pub const fn covers(&self, requested: i64) -> bool {
        requested <= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_covers() {
        let stock = Stock { id: 1, amount: 5 };

        assert!(stock.covers(1));
        assert!(stock.covers(5));
        assert!(!stock.covers(6));
    }

    #[test]
    fn test_product_json_shape() {
        // The wire format is camelCase, matching the remote catalog
        let json = r#"{"id":1,"title":"Trail Sneaker","priceCents":17999,"image":"sneaker.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.price_cents, 17_999);
    }
}
