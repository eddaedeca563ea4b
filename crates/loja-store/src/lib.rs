//! # loja-store: Record Store for Loja POS
//!
//! The persistence collaborator: an in-memory, insertion-ordered keyed
//! record store with one named collection per entity, repositories layered
//! on top, and a JSON snapshot format.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Loja POS Data Flow                            │
//! │                                                                     │
//! │  Terminal operation (complete_sale, insert_product, ...)            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   loja-store (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   │   │
//! │  │   │    Store     │   │    Tables    │   │ Repositories │   │   │
//! │  │   │ Arc<RwLock>  │──►│  products    │◄──│ product.rs   │   │   │
//! │  │   │ with()       │   │  sales       │   │ sale.rs      │   │   │
//! │  │   │ with_mut()   │   │  employees   │   │ employee.rs  │   │   │
//! │  │   └──────────────┘   │  cashRegs    │   │ register.rs  │   │   │
//! │  │                      └──────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  JSON snapshot (to_json / from_json)                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Contract
//!
//! Every access goes through `with` (shared) or `with_mut` (exclusive).
//! A `with_mut` closure holds the write lock for its whole body, which makes
//! it the transaction scope: the sale-completion transaction performs its
//! validate-then-apply sequence inside a single `with_mut`, so no reader
//! ever observes a sale recorded without its stock and cash effects.
//!
//! ## Usage
//!
//! ```rust
//! use loja_core::{Money, Product};
//! use loja_store::Store;
//!
//! let store = Store::new();
//! store.with_mut(|tables| {
//!     tables.insert_product(Product::new(
//!         "Coca-Cola 2L",
//!         Money::from_cents(999),
//!         12,
//!         "Bebidas",
//!     ))
//! }).unwrap();
//!
//! let count = store.with(|tables| tables.products.len());
//! assert_eq!(count, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use collection::{Collection, Record};
pub use error::{StoreError, StoreResult};
pub use repository::SalesLedger;

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use loja_core::{CashSession, Employee, Product};

// =============================================================================
// Tables
// =============================================================================

/// The full set of named collections.
///
/// Snapshot keys match the collection names callers know: `products`,
/// `sales`, `employees`, `cashRegisters`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tables {
    pub products: Collection<Product>,
    pub sales: SalesLedger,
    pub employees: Collection<Employee>,
    pub cash_registers: Collection<CashSession>,
}

// =============================================================================
// Store
// =============================================================================

/// Shared handle to the record store.
///
/// Cloning is cheap and every clone addresses the same tables, so multiple
/// terminals can share one store.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Tables>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            inner: Arc::new(RwLock::new(Tables::default())),
        }
    }

    /// Executes a closure with shared read access to the tables.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let stock = store.with(|tables| tables.get_stock(&id))?;
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Tables) -> R,
    {
        let tables = self.inner.read().expect("store lock poisoned");
        f(&tables)
    }

    /// Executes a closure with exclusive write access to the tables.
    ///
    /// The closure body is a serializable transaction: nothing else can
    /// read or write the tables until it returns.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store.with_mut(|tables| tables.insert_product(product))?;
    /// ```
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Tables) -> R,
    {
        let mut tables = self.inner.write().expect("store lock poisoned");
        f(&mut tables)
    }

    /// Serializes the whole store to a JSON snapshot document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        self.with(|tables| serde_json::to_string_pretty(tables))
    }

    /// Restores a store from a JSON snapshot document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tables: Tables = serde_json::from_str(json)?;
        Ok(Store {
            inner: Arc::new(RwLock::new(tables)),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
