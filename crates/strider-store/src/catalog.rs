//! # Catalog Provider
//!
//! The read-only reference data contract: products and shops. The sales
//! portal fetches both at session start and re-fetches products after
//! admin catalog edits.
//!
//! The trait is async because a real provider is a network hop away; the
//! in-memory one answers immediately (optionally after a simulated delay
//! for exercising loading states).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use strider_core::types::{Product, ProductId, Shop, ShopId};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::seed;

// =============================================================================
// Contract
// =============================================================================

/// Source of catalog reference data.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All products currently in the catalog.
    async fn fetch_products(&self) -> StoreResult<Vec<Product>>;

    /// All shops a rep can sell to.
    async fn fetch_shops(&self) -> StoreResult<Vec<Shop>>;

    /// One product by id.
    async fn get_product(&self, id: ProductId) -> StoreResult<Product> {
        self.fetch_products()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("product", id))
    }

    /// One shop by id.
    async fn get_shop(&self, id: ShopId) -> StoreResult<Shop> {
        self.fetch_shops()
            .await?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("shop", id))
    }
}

// =============================================================================
// In-Memory Implementation
// =============================================================================

/// Catalog served from process memory, seeded with the reference data.
///
/// Products are behind a `Mutex` because the admin portal edits them at
/// runtime; shops are fixed for the life of the process.
pub struct InMemoryCatalog {
    products: Mutex<Vec<Product>>,
    shops: Vec<Shop>,
    /// Simulated fetch latency, for exercising callers' loading states.
    latency: Option<Duration>,
}

impl InMemoryCatalog {
    /// Creates a catalog pre-loaded with the seed data.
    pub fn new() -> Self {
        InMemoryCatalog {
            products: Mutex::new(seed::seed_products()),
            shops: seed::seed_shops(),
            latency: None,
        }
    }

    /// Creates an empty catalog (admin tests build their own products).
    pub fn empty() -> Self {
        InMemoryCatalog {
            products: Mutex::new(Vec::new()),
            shops: Vec::new(),
            latency: None,
        }
    }

    /// Adds a simulated delay before every fetch.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Replaces the product list wholesale.
    ///
    /// The admin-side [`crate::products::ProductStore`] owns catalog edits
    /// and pushes the updated list here so the sales side sees them.
    pub fn replace_products(&self, products: Vec<Product>) {
        let mut guard = self
            .products
            .lock()
            .expect("catalog products mutex poisoned");
        debug!(count = products.len(), "catalog products replaced");
        *guard = products;
    }

    /// Runs a closure against the live product list.
    ///
    /// Edits made here are immediately visible to `fetch_products`; the
    /// admin-side product store is built on this.
    pub(crate) fn edit_products<T>(&self, f: impl FnOnce(&mut Vec<Product>) -> T) -> T {
        let mut guard = self
            .products
            .lock()
            .expect("catalog products mutex poisoned");
        f(&mut guard)
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn fetch_products(&self) -> StoreResult<Vec<Product>> {
        self.simulate_latency().await;
        let products = self
            .products
            .lock()
            .expect("catalog products mutex poisoned")
            .clone();
        debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    async fn fetch_shops(&self) -> StoreResult<Vec<Shop>> {
        self.simulate_latency().await;
        Ok(self.shops.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
