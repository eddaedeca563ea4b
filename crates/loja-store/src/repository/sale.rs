//! # Sales Ledger
//!
//! Append-only store of committed sales.
//!
//! The ledger type exposes `append` and reads only - no update, no delete -
//! so a committed sale cannot be edited after the fact. Ordering follows
//! commit order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use loja_core::Sale;

use crate::collection::{Collection, Record};
use crate::error::StoreResult;

impl Record for Sale {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The append-only sales ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesLedger {
    entries: Collection<Sale>,
}

impl SalesLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        SalesLedger {
            entries: Collection::new(),
        }
    }

    /// Appends a committed sale.
    pub fn append(&mut self, sale: Sale) -> StoreResult<()> {
        debug!(id = %sale.id, total = %sale.total(), items = sale.items.len(), "Appending sale");
        self.entries.add(sale)
    }

    /// All sales, in commit order.
    #[inline]
    pub fn get_all(&self) -> &[Sale] {
        self.entries.get_all()
    }

    /// Looks up a sale by id.
    pub fn get(&self, id: &str) -> Option<&Sale> {
        self.entries.get(id)
    }

    /// Iterates sales in commit order.
    pub fn iter(&self) -> impl Iterator<Item = &Sale> {
        self.entries.iter()
    }

    /// Number of committed sales.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the ledger is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
