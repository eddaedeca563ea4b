//! # Inventory Ledger
//!
//! Stock levels as seen by the cart and the checkout transaction.
//!
//! The trait is the seam between pure checkout logic and whatever holds the
//! product records; the store crate implements it over its product
//! collection. The contract is strict: stock is a non-negative integer and
//! `decrement` refuses any amount that would take it below zero.

use crate::error::CoreResult;

/// Read/write access to per-product stock counts.
pub trait InventoryLedger {
    /// Current stock for a product, or `None` for an unknown id.
    fn stock_of(&self, product_id: &str) -> Option<i64>;

    /// Removes `amount` units from a product's stock.
    ///
    /// ## Errors
    /// - [`crate::error::CoreError::ProductNotFound`] for an unknown id
    /// - [`crate::error::CoreError::InsufficientStock`] when `amount`
    ///   exceeds the current stock; the count is left untouched
    fn decrement(&mut self, product_id: &str, amount: i64) -> CoreResult<()>;

    /// Checks whether `amount` units could be taken from stock.
    fn has_sufficient_stock(&self, product_id: &str, amount: i64) -> bool {
        self.stock_of(product_id)
            .map(|stock| amount <= stock)
            .unwrap_or(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::collections::HashMap;

    /// Minimal in-memory ledger used by core tests.
    impl InventoryLedger for HashMap<String, i64> {
        fn stock_of(&self, product_id: &str) -> Option<i64> {
            self.get(product_id).copied()
        }

        fn decrement(&mut self, product_id: &str, amount: i64) -> CoreResult<()> {
            let stock = self
                .get_mut(product_id)
                .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
            if amount > *stock {
                return Err(CoreError::InsufficientStock {
                    product_id: product_id.to_string(),
                    available: *stock,
                    requested: amount,
                });
            }
            *stock -= amount;
            Ok(())
        }
    }

    #[test]
    fn test_decrement_never_goes_negative() {
        let mut ledger: HashMap<String, i64> = HashMap::new();
        ledger.insert("p1".to_string(), 3);

        let err = ledger.decrement("p1", 4).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 3,
                requested: 4,
                ..
            }
        ));
        assert_eq!(ledger.stock_of("p1"), Some(3));

        ledger.decrement("p1", 3).unwrap();
        assert_eq!(ledger.stock_of("p1"), Some(0));
    }

    #[test]
    fn test_has_sufficient_stock() {
        let mut ledger: HashMap<String, i64> = HashMap::new();
        ledger.insert("p1".to_string(), 2);

        assert!(ledger.has_sufficient_stock("p1", 2));
        assert!(!ledger.has_sufficient_stock("p1", 3));
        assert!(!ledger.has_sufficient_stock("missing", 1));
    }

    #[test]
    fn test_decrement_unknown_product() {
        let mut ledger: HashMap<String, i64> = HashMap::new();
        assert!(matches!(
            ledger.decrement("ghost", 1),
            Err(CoreError::ProductNotFound(_))
        ));
    }
}
