//! # Cart
//!
//! The cart itself and its stock-bounded mutations.
//!
//! ## Cart Mutation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock-Bounded Mutations                              │
//! │                                                                         │
//! │  add_one(product, stock)                                               │
//! │       │                                                                 │
//! │       ├── already in cart?  candidate = entry.amount + 1               │
//! │       ├── not in cart?      candidate = 1                              │
//! │       │                                                                 │
//! │       ├── candidate > stock.amount ──► Err(InsufficientStock)          │
//! │       └── otherwise ──────────────────► bump entry / append new entry  │
//! │                                                                         │
//! │  set_amount(id, amount, stock)                                         │
//! │       │                                                                 │
//! │       ├── amount < 1 ─────────────► Err(InvalidAmount)                 │
//! │       ├── amount > stock.amount ──► Err(InsufficientStock)             │
//! │       ├── id not in cart ─────────► Ok(NotInCart)  (caller decides)    │
//! │       └── otherwise ──────────────► entry.amount = amount              │
//! │                                                                         │
//! │  remove(id)                                                            │
//! │       ├── id not in cart ──► Err(NotInCart)                            │
//! │       └── otherwise ───────► drop the entry, others untouched          │
//! │                                                                         │
//! │  Invariant: every entry has amount >= 1 and, at the last successful    │
//! │  mutation, amount <= the stock record it was checked against.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Product, ProductId, Stock};

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference to the catalog product
/// - Title, price and image are frozen copies of the product data at the
///   time of adding, so the cart displays consistent data even if the
///   catalog changes afterwards.
/// - `amount`: quantity held in the cart; exists only here, never on the
///   catalog representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Catalog product id.
    pub product_id: ProductId,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Image at time of adding (frozen).
    pub image: String,

    /// Quantity held in the cart. Always >= 1.
    pub amount: i64,

    /// When this item was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart item from a catalog product with amount 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes,
    /// this cart item retains the original price.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id,
            title: product.title.clone(),
            price_cents: product.price_cents,
            image: product.image.clone(),
            amount: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × amount).
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.amount
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Outcome of [`Cart::set_amount`] when the bound check passes.
///
/// The absent-id case is deliberately NOT an error: the manager silently
/// ignores amount changes for products that were never added. It is a
/// distinct outcome so the caller can skip persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountChange {
    /// The entry's amount was updated.
    Updated,

    /// The product has no entry; nothing changed.
    NotInCart,
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id`
/// - Insertion order is preserved for display stability
/// - Every entry's amount is >= 1 and was covered by the stock record
///   checked at its last successful mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Returns the entry for a product, if present.
    pub fn find(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Adds one unit of a product, bounded by the stock record.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: candidate = amount + 1
    /// - If not: candidate = 1
    /// - Candidate above `stock.amount` fails without touching the cart
    ///
    /// ## Returns
    /// - `Ok(())` on commit
    /// - `Err(CoreError::InsufficientStock)` if the seller cannot cover it
    pub fn add_one(&mut self, product: &Product, stock: &Stock) -> CoreResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let candidate = item.amount + 1;
            if !stock.covers(candidate) {
                return Err(CoreError::InsufficientStock {
                    product_id: product.id,
                    available: stock.amount,
                    requested: candidate,
                });
            }
            item.amount = candidate;
            return Ok(());
        }

        if !stock.covers(1) {
            return Err(CoreError::InsufficientStock {
                product_id: product.id,
                available: stock.amount,
                requested: 1,
            });
        }

        self.items.push(CartItem::from_product(product));
        Ok(())
    }

    /// Sets the amount of an existing entry, bounded by the stock record.
    ///
    /// ## Behavior
    /// - Amounts below 1 are rejected outright, keeping every entry at
    ///   `amount >= 1`. The manager filters these before the stock
    ///   lookup; the check here covers direct callers.
    /// - The stock bound is checked before cart membership, so an
    ///   over-stock request fails even for products not in the cart
    /// - An absent id yields `Ok(AmountChange::NotInCart)`: nothing
    ///   changed, and the caller decides whether that is worth reporting
    pub fn set_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
        stock: &Stock,
    ) -> CoreResult<AmountChange> {
        if amount < 1 {
            return Err(CoreError::InvalidAmount {
                product_id,
                requested: amount,
            });
        }

        if !stock.covers(amount) {
            return Err(CoreError::InsufficientStock {
                product_id,
                available: stock.amount,
                requested: amount,
            });
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.amount = amount;
                Ok(AmountChange::Updated)
            }
            None => Ok(AmountChange::NotInCart),
        }
    }

    /// Removes the entry for a product.
    ///
    /// ## Returns
    /// - `Ok(())` if the entry existed and was dropped
    /// - `Err(CoreError::NotInCart)` if the id was absent
    pub fn remove(&mut self, product_id: ProductId) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::NotInCart { product_id })
        } else {
            Ok(())
        }
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Calculates the subtotal across all items.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for consumer-facing views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
