//! # Cart Manager
//!
//! The stateful orchestrator: one in-memory [`Cart`] behind a mutex,
//! write-through persistence to a snapshot slot, and remote validation
//! before every mutation.
//!
//! ## Mutation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Mutation Pipeline                                  │
//! │                                                                         │
//! │  add(id)                                                               │
//! │    1. stock_by_id(id)     ── lookup fails ──► notify(AddFailed)        │
//! │    2. product_by_id(id)   ── lookup fails ──► notify(AddFailed)        │
//! │    3. cart.add_one(..)    ── bound hit    ──► notify(OutOfStock)       │
//! │    4. persist snapshot    ── write fails  ──► warn! (cart keeps state) │
//! │                                                                         │
//! │  set_amount(id, n<=0) ──► ignored, no lookup, no notice                │
//! │  set_amount(id, n)    ──► stock check first, absent id silently no-ops │
//! │  remove(id)         ──► no lookups; absent id ──► notify(RemoveFailed) │
//! │                                                                         │
//! │  On any failure the in-memory cart and the snapshot slot are           │
//! │  left exactly as they were.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! The mutex guards only the in-memory mutation and the clone taken for
//! persistence; it is never held across an await point.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use shopfront_catalog::Catalog;
use shopfront_core::{AmountChange, Cart, CartItem, CartTotals, ProductId};
use shopfront_store::SnapshotStore;

use crate::error::{CartError, CartResult};
use crate::notify::{Notice, Notifier};

/// Default snapshot slot name for the cart.
pub const CART_SLOT_KEY: &str = "cart";

// =============================================================================
// Cart Manager
// =============================================================================

/// Owns the cart state and coordinates catalog, store and notifier.
///
/// ## Error Surface
/// The mutating operations return `()`. Every failure is reported as one
/// [`Notice`] through the notifier; the consumer never branches on a
/// returned error. Only [`CartManager::open`] returns a `Result`, because
/// without a readable store there is nothing to manage.
pub struct CartManager {
    /// In-memory cart state. Guarded mutation, clone-out reads.
    cart: Mutex<Cart>,

    /// Remote product and stock lookups.
    catalog: Arc<dyn Catalog>,

    /// Durable snapshot slots.
    store: SnapshotStore,

    /// Side-channel for user-facing failure notices.
    notifier: Arc<dyn Notifier>,

    /// Slot the cart snapshot lives in.
    slot_key: String,
}

impl CartManager {
    /// Opens a manager on the default cart slot.
    ///
    /// Reads the snapshot slot once and hydrates the in-memory cart from
    /// it. An empty slot yields an empty cart; an unreadable payload is
    /// logged and also yields an empty cart rather than failing startup.
    pub async fn open(
        catalog: Arc<dyn Catalog>,
        store: SnapshotStore,
        notifier: Arc<dyn Notifier>,
    ) -> CartResult<Self> {
        Self::open_with_slot(catalog, store, notifier, CART_SLOT_KEY).await
    }

    /// Opens a manager on a named snapshot slot.
    pub async fn open_with_slot(
        catalog: Arc<dyn Catalog>,
        store: SnapshotStore,
        notifier: Arc<dyn Notifier>,
        slot_key: impl Into<String>,
    ) -> CartResult<Self> {
        let slot_key = slot_key.into();

        let cart = match store.get(&slot_key).await? {
            Some(payload) => match serde_json::from_str::<Cart>(&payload) {
                Ok(cart) => {
                    info!(
                        slot = %slot_key,
                        items = cart.item_count(),
                        "Hydrated cart from snapshot"
                    );
                    cart
                }
                Err(err) => {
                    warn!(
                        slot = %slot_key,
                        error = %err,
                        "Snapshot payload unreadable, starting with empty cart"
                    );
                    Cart::new()
                }
            },
            None => {
                debug!(slot = %slot_key, "No snapshot, starting with empty cart");
                Cart::new()
            }
        };

        Ok(CartManager {
            cart: Mutex::new(cart),
            catalog,
            store,
            notifier,
            slot_key,
        })
    }

    // ====== Views ======

    /// Returns a copy of the cart's items, in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.cart.lock().expect("Cart mutex poisoned").items.clone()
    }

    /// Returns a copy of the whole cart.
    pub fn cart(&self) -> Cart {
        self.cart.lock().expect("Cart mutex poisoned").clone()
    }

    /// Returns the cart totals summary.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&*self.cart.lock().expect("Cart mutex poisoned"))
    }

    // ====== Mutations ======

    /// Adds one unit of a product to the cart.
    ///
    /// Validates against the live stock record first; a product not yet in
    /// the cart enters with amount 1, an existing entry is bumped by 1.
    /// Failures are reported through the notifier.
    pub async fn add(&self, product_id: ProductId) {
        debug!(product_id, "Add to cart");

        if let Err(err) = self.try_add(product_id).await {
            self.report(Notice::AddFailed, &err);
        }
    }

    /// Removes a product's entry from the cart entirely.
    ///
    /// No remote lookups: removal needs no stock validation. An absent id
    /// is reported as a failed removal.
    pub async fn remove(&self, product_id: ProductId) {
        debug!(product_id, "Remove from cart");

        let committed = {
            let mut cart = self.cart.lock().expect("Cart mutex poisoned");
            cart.remove(product_id).map(|()| cart.clone())
        };

        match committed {
            Ok(snapshot) => self.persist(&snapshot).await,
            Err(err) => self.report(Notice::RemoveFailed, &CartError::from(err)),
        }
    }

    /// Sets the quantity of a product already in the cart.
    ///
    /// ## Behavior
    /// - `amount <= 0` is ignored outright: no lookup, no change, no
    ///   notice. Entries always hold an amount of at least 1.
    /// - The stock bound is checked before cart membership
    /// - An absent id is a silent no-op once the bound check passes
    pub async fn set_amount(&self, product_id: ProductId, amount: i64) {
        debug!(product_id, amount, "Set cart amount");

        if amount <= 0 {
            debug!(product_id, amount, "Ignoring non-positive amount update");
            return;
        }

        if let Err(err) = self.try_set_amount(product_id, amount).await {
            self.report(Notice::UpdateFailed, &err);
        }
    }

    // ====== Internals ======

    async fn try_add(&self, product_id: ProductId) -> CartResult<()> {
        let stock = self.catalog.stock_by_id(product_id).await?;
        let product = self.catalog.product_by_id(product_id).await?;

        let snapshot = {
            let mut cart = self.cart.lock().expect("Cart mutex poisoned");
            cart.add_one(&product, &stock)?;
            cart.clone()
        };

        self.persist(&snapshot).await;
        Ok(())
    }

    async fn try_set_amount(&self, product_id: ProductId, amount: i64) -> CartResult<()> {
        let stock = self.catalog.stock_by_id(product_id).await?;

        let snapshot = {
            let mut cart = self.cart.lock().expect("Cart mutex poisoned");
            match cart.set_amount(product_id, amount, &stock)? {
                AmountChange::Updated => Some(cart.clone()),
                // Amount changes for products never added are ignored
                AmountChange::NotInCart => None,
            }
        };

        if let Some(snapshot) = snapshot {
            self.persist(&snapshot).await;
        } else {
            debug!(product_id, "Amount change for absent entry, ignoring");
        }

        Ok(())
    }

    /// Writes the committed cart through to the snapshot slot.
    ///
    /// A failed write is logged, not reported: the in-memory cart already
    /// holds the committed state and stays authoritative for the session.
    async fn persist(&self, cart: &Cart) {
        let payload = match serde_json::to_string(cart) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "Cart snapshot serialization failed");
                return;
            }
        };

        if let Err(err) = self.store.set(&self.slot_key, &payload).await {
            warn!(slot = %self.slot_key, error = %err, "Snapshot write failed");
        }
    }

    /// Resolves a failed mutation into exactly one notice.
    ///
    /// A stock-bound violation is reported as [`Notice::OutOfStock`]
    /// regardless of operation; everything else falls back to the
    /// per-operation notice.
    fn report(&self, fallback: Notice, err: &CartError) {
        let notice = match err {
            CartError::Domain(shopfront_core::CoreError::InsufficientStock { .. }) => {
                Notice::OutOfStock
            }
            _ => fallback,
        };

        warn!(error = %err, notice = ?notice, "Cart operation failed");
        self.notifier.notify(notice);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use shopfront_catalog::{CatalogError, CatalogResult};
    use shopfront_core::{Product, Stock};
    use shopfront_store::StoreConfig;

    // ====== Test Doubles ======

    /// Scripted catalog: records keyed by id, plus a kill switch that
    /// makes every lookup fail.
    struct FakeCatalog {
        products: HashMap<ProductId, Product>,
        stock: HashMap<ProductId, Stock>,
        fail_lookups: AtomicBool,
    }

    impl FakeCatalog {
        fn new() -> Self {
            FakeCatalog {
                products: HashMap::new(),
                stock: HashMap::new(),
                fail_lookups: AtomicBool::new(false),
            }
        }

        fn with_product(mut self, product: Product, stock_amount: i64) -> Self {
            self.stock.insert(
                product.id,
                Stock {
                    id: product.id,
                    amount: stock_amount,
                },
            );
            self.products.insert(product.id, product);
            self
        }

        fn fail_all_lookups(&self) {
            self.fail_lookups.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn product_by_id(&self, product_id: ProductId) -> CatalogResult<Product> {
            if self.fail_lookups.load(Ordering::SeqCst) {
                return Err(CatalogError::NotFound { product_id });
            }
            self.products
                .get(&product_id)
                .cloned()
                .ok_or(CatalogError::NotFound { product_id })
        }

        async fn stock_by_id(&self, product_id: ProductId) -> CatalogResult<Stock> {
            if self.fail_lookups.load(Ordering::SeqCst) {
                return Err(CatalogError::NotFound { product_id });
            }
            self.stock
                .get(&product_id)
                .copied()
                .ok_or(CatalogError::NotFound { product_id })
        }
    }

    /// Captures every notice for assertions.
    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        fn taken(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    // ====== Helpers ======

    fn sneaker() -> Product {
        Product {
            id: 1,
            title: "Trail Sneaker".to_string(),
            price_cents: 17_999,
            image: "sneaker.jpg".to_string(),
        }
    }

    async fn manager_with(
        catalog: FakeCatalog,
    ) -> (CartManager, Arc<FakeCatalog>, Arc<RecordingNotifier>) {
        let catalog = Arc::new(catalog);
        let notifier = Arc::new(RecordingNotifier::default());
        let store = SnapshotStore::new(StoreConfig::in_memory()).await.unwrap();

        let manager = CartManager::open(catalog.clone(), store, notifier.clone())
            .await
            .unwrap();

        (manager, catalog, notifier)
    }

    // ====== Tests ======

    #[tokio::test]
    async fn test_add_puts_product_in_cart_with_amount_one() {
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.add(1).await;

        let items = manager.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, 1);
        assert_eq!(items[0].amount, 1);
        assert_eq!(items[0].price_cents, 17_999);
        assert!(notifier.taken().is_empty());
    }

    #[tokio::test]
    async fn test_add_persists_snapshot() {
        let (manager, _, _) = manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.add(1).await;

        let payload = manager.store.get(CART_SLOT_KEY).await.unwrap().unwrap();
        let persisted: Cart = serde_json::from_str(&payload).unwrap();
        assert_eq!(persisted, manager.cart());
    }

    #[tokio::test]
    async fn test_add_beyond_stock_emits_out_of_stock() {
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 1)).await;

        manager.add(1).await;
        manager.add(1).await;

        assert_eq!(manager.items()[0].amount, 1);
        assert_eq!(notifier.taken(), vec![Notice::OutOfStock]);
    }

    #[tokio::test]
    async fn test_add_with_failing_lookup_leaves_everything_untouched() {
        let (manager, catalog, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        catalog.fail_all_lookups();
        manager.add(1).await;

        assert!(manager.cart().is_empty());
        assert_eq!(manager.store.get(CART_SLOT_KEY).await.unwrap(), None);
        assert_eq!(notifier.taken(), vec![Notice::AddFailed]);
    }

    #[tokio::test]
    async fn test_remove_drops_entry_and_persists() {
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.add(1).await;
        manager.remove(1).await;

        assert!(manager.cart().is_empty());

        let payload = manager.store.get(CART_SLOT_KEY).await.unwrap().unwrap();
        let persisted: Cart = serde_json::from_str(&payload).unwrap();
        assert!(persisted.is_empty());
        assert!(notifier.taken().is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_id_emits_remove_failed() {
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.remove(42).await;

        assert_eq!(notifier.taken(), vec![Notice::RemoveFailed]);
        // Nothing was committed, so nothing was persisted
        assert_eq!(manager.store.get(CART_SLOT_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_amount_updates_entry_and_persists() {
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.add(1).await;
        manager.set_amount(1, 4).await;

        assert_eq!(manager.items()[0].amount, 4);

        let payload = manager.store.get(CART_SLOT_KEY).await.unwrap().unwrap();
        let persisted: Cart = serde_json::from_str(&payload).unwrap();
        assert_eq!(persisted.items[0].amount, 4);
        assert!(notifier.taken().is_empty());
    }

    #[tokio::test]
    async fn test_set_amount_zero_is_ignored_without_lookup() {
        let catalog = FakeCatalog::new().with_product(sneaker(), 5);
        let (manager, catalog, notifier) = manager_with(catalog).await;

        manager.add(1).await;

        // Even a dead catalog cannot fail a zero-amount update, because
        // the request is dropped before any lookup happens
        catalog.fail_all_lookups();
        manager.set_amount(1, 0).await;

        assert_eq!(manager.items()[0].amount, 1);
        assert!(notifier.taken().is_empty());
    }

    #[tokio::test]
    async fn test_set_amount_negative_is_ignored_and_never_committed() {
        let (manager, catalog, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.add(1).await;

        // Like the zero case, a negative amount is dropped before any
        // lookup; the entry keeps amount >= 1 in memory and on disk
        catalog.fail_all_lookups();
        manager.set_amount(1, -3).await;

        assert_eq!(manager.items()[0].amount, 1);
        assert!(notifier.taken().is_empty());

        let payload = manager.store.get(CART_SLOT_KEY).await.unwrap().unwrap();
        let persisted: Cart = serde_json::from_str(&payload).unwrap();
        assert_eq!(persisted.items[0].amount, 1);
    }

    #[tokio::test]
    async fn test_set_amount_beyond_stock_emits_out_of_stock() {
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.add(1).await;
        manager.set_amount(1, 6).await;

        assert_eq!(manager.items()[0].amount, 1);
        assert_eq!(notifier.taken(), vec![Notice::OutOfStock]);
    }

    #[tokio::test]
    async fn test_set_amount_for_absent_id_is_silently_ignored() {
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.set_amount(1, 2).await;

        assert!(manager.cart().is_empty());
        assert!(notifier.taken().is_empty());
        assert_eq!(manager.store.get(CART_SLOT_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_amount_with_failing_lookup_emits_update_failed() {
        let (manager, catalog, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        manager.add(1).await;
        catalog.fail_all_lookups();
        manager.set_amount(1, 3).await;

        assert_eq!(manager.items()[0].amount, 1);
        assert_eq!(notifier.taken(), vec![Notice::UpdateFailed]);
    }

    #[tokio::test]
    async fn test_stock_of_five_walkthrough() {
        // stock amount 5: five adds succeed, the sixth is refused and the
        // cart stays at 5
        let (manager, _, notifier) =
            manager_with(FakeCatalog::new().with_product(sneaker(), 5)).await;

        for _ in 0..5 {
            manager.add(1).await;
        }
        assert_eq!(manager.items()[0].amount, 5);
        assert!(notifier.taken().is_empty());

        manager.add(1).await;

        assert_eq!(manager.items()[0].amount, 5);
        assert_eq!(notifier.taken(), vec![Notice::OutOfStock]);
    }

    #[tokio::test]
    async fn test_reopen_restores_cart_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.db");

        let catalog = Arc::new(FakeCatalog::new().with_product(sneaker(), 5));
        let notifier = Arc::new(RecordingNotifier::default());

        {
            let store = SnapshotStore::new(StoreConfig::new(&path)).await.unwrap();
            let manager = CartManager::open(catalog.clone(), store, notifier.clone())
                .await
                .unwrap();
            manager.add(1).await;
            manager.add(1).await;
            manager.store.close().await;
        }

        let store = SnapshotStore::new(StoreConfig::new(&path)).await.unwrap();
        let manager = CartManager::open(catalog, store, notifier).await.unwrap();

        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.items()[0].amount, 2);
        assert_eq!(manager.items()[0].title, "Trail Sneaker");
    }

    #[tokio::test]
    async fn test_open_with_corrupt_snapshot_starts_empty() {
        let catalog = Arc::new(FakeCatalog::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let store = SnapshotStore::new(StoreConfig::in_memory()).await.unwrap();

        store.set(CART_SLOT_KEY, "not json at all").await.unwrap();

        let manager = CartManager::open(catalog, store, notifier).await.unwrap();

        assert!(manager.cart().is_empty());
    }

    #[tokio::test]
    async fn test_totals_track_mutations() {
        let catalog = FakeCatalog::new()
            .with_product(sneaker(), 5)
            .with_product(
                Product {
                    id: 2,
                    title: "Canvas Tote".to_string(),
                    price_cents: 4_500,
                    image: "tote.jpg".to_string(),
                },
                3,
            );
        let (manager, _, _) = manager_with(catalog).await;

        manager.add(1).await;
        manager.add(1).await;
        manager.add(2).await;

        let totals = manager.totals();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal_cents, 2 * 17_999 + 4_500);
    }
}
