//! # Product Store
//!
//! Admin-side catalog mutation. Wraps the shared [`InMemoryCatalog`] so
//! that every edit made here is visible to the sales portal's next fetch.
//!
//! ## Price Input
//! Prices arrive as strings from the admin form and go through the strict
//! [`Money::parse`]. A price like `"abc"` or `"$15.99"` is rejected with a
//! validation error rather than silently coerced to zero.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strider_core::types::{Product, ProductId, SizeStock};
use strider_core::validation::{validate_product_name, validate_size, validate_stock};
use strider_core::{Money, PLACEHOLDER_IMAGE};
use tracing::info;

use crate::catalog::InMemoryCatalog;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Product Form
// =============================================================================

/// Raw admin form input for creating or updating a product.
///
/// Strings stay strings until validation; the store converts them into a
/// proper [`Product`] or rejects the whole form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// Decimal price text, e.g. `"15.99"`.
    pub price: String,
    /// Image reference; empty means use the placeholder.
    #[serde(default)]
    pub image_url: String,
    pub sizes: Vec<SizeStock>,
}

impl ProductForm {
    /// Validates the form and builds the product it describes.
    fn into_product(self, id: ProductId) -> StoreResult<Product> {
        validate_product_name(&self.name).map_err(strider_core::CoreError::from)?;
        let price = Money::parse(&self.price).map_err(strider_core::CoreError::from)?;

        let mut sizes = Vec::with_capacity(self.sizes.len());
        for entry in self.sizes {
            let label = validate_size(&entry.size).map_err(strider_core::CoreError::from)?;
            validate_stock(entry.stock).map_err(strider_core::CoreError::from)?;
            sizes.push(SizeStock {
                size: label,
                stock: entry.stock,
            });
        }

        let image_url = if self.image_url.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            self.image_url.trim().to_string()
        };

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url,
            sizes,
        })
    }
}

// =============================================================================
// Product Store
// =============================================================================

/// Admin catalog editor backed by the shared catalog.
pub struct ProductStore {
    catalog: Arc<InMemoryCatalog>,
}

impl ProductStore {
    /// Creates a store editing the given catalog in place.
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        ProductStore { catalog }
    }

    /// All products in catalog order.
    pub fn list(&self) -> Vec<Product> {
        self.catalog.edit_products(|products| products.clone())
    }

    /// One product by id.
    pub fn get(&self, id: ProductId) -> StoreResult<Product> {
        self.catalog.edit_products(|products| {
            products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| StoreError::not_found("product", id))
        })
    }

    /// Creates a product from a validated form. Ids are assigned as
    /// `max + 1`, so deleting the highest product can recycle its id; ids
    /// are display handles here, not durable foreign keys.
    pub fn add(&self, form: ProductForm) -> StoreResult<Product> {
        self.catalog.edit_products(|products| {
            let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let product = form.into_product(next_id)?;
            info!(product_id = product.id, name = %product.name, "product added");
            products.push(product.clone());
            Ok(product)
        })
    }

    /// Replaces an existing product's fields from a validated form.
    pub fn update(&self, id: ProductId, form: ProductForm) -> StoreResult<Product> {
        self.catalog.edit_products(|products| {
            let slot = products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| StoreError::not_found("product", id))?;
            let product = form.into_product(id)?;
            info!(product_id = id, name = %product.name, "product updated");
            *slot = product.clone();
            Ok(product)
        })
    }

    /// Removes a product from the catalog.
    ///
    /// Past orders are untouched: their lines snapshot name and price at
    /// submission time.
    pub fn delete(&self, id: ProductId) -> StoreResult<Product> {
        self.catalog.edit_products(|products| {
            let index = products
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| StoreError::not_found("product", id))?;
            let removed = products.remove(index);
            info!(product_id = id, name = %removed.name, "product deleted");
            Ok(removed)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
