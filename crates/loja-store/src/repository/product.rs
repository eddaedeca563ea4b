//! # Product Repository
//!
//! Catalog maintenance plus the inventory ledger over the `products`
//! collection.
//!
//! ## Key Operations
//! - Validated insert/update/delete
//! - Name/category search
//! - Stock queries and the checkout-time decrement
//!
//! Stock changes are deltas against the stored count, never absolute writes,
//! and a decrement that would go below zero is refused before anything is
//! touched.

use tracing::debug;

use loja_core::validation::validate_product;
use loja_core::{CoreError, CoreResult, InventoryLedger, Product};

use crate::collection::{Collection, Record};
use crate::error::{StoreError, StoreResult};
use crate::Tables;

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Catalog Operations
// =============================================================================

impl Tables {
    /// Inserts a product after validating it.
    pub fn insert_product(&mut self, product: Product) -> StoreResult<()> {
        validate_product(&product)?;
        debug!(id = %product.id, name = %product.name, "Inserting product");
        self.products.add(product)
    }

    /// Applies a partial update to a product.
    ///
    /// The update is validated against a copy first, so an edit that would
    /// produce an invalid record leaves the stored one untouched.
    pub fn update_product(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut Product),
    ) -> StoreResult<()> {
        let current = self
            .products
            .get(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        let mut updated = current.clone();
        f(&mut updated);
        updated.touch();
        validate_product(&updated)?;

        debug!(id = %id, "Updating product");
        self.products.update(id, |product| *product = updated);
        Ok(())
    }

    /// Deletes a product from the catalog.
    pub fn delete_product(&mut self, id: &str) -> StoreResult<()> {
        if !self.products.delete(id) {
            return Err(StoreError::not_found("Product", id));
        }
        debug!(id = %id, "Deleted product");
        Ok(())
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Case-insensitive search over product name and category.
    pub fn find_products(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&query)
                    || product.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Current stock count for a product.
    pub fn get_stock(&self, id: &str) -> StoreResult<i64> {
        self.products
            .get(id)
            .map(|product| product.stock)
            .ok_or_else(|| StoreError::not_found("Product", id))
    }
}

// =============================================================================
// Inventory Ledger
// =============================================================================

/// The product collection is the live inventory ledger consulted and
/// decremented by checkout.
impl InventoryLedger for Collection<Product> {
    fn stock_of(&self, product_id: &str) -> Option<i64> {
        self.get(product_id).map(|product| product.stock)
    }

    fn decrement(&mut self, product_id: &str, amount: i64) -> CoreResult<()> {
        let product = self
            .get_mut(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        if amount > product.stock {
            return Err(CoreError::InsufficientStock {
                product_id: product_id.to_string(),
                available: product.stock,
                requested: amount,
            });
        }

        product.stock -= amount;
        product.touch();
        debug!(id = %product_id, amount = %amount, stock = %product.stock, "Decremented stock");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
