//! # loja-terminal: Operator Surface for Loja POS
//!
//! The orchestration layer between a front end and the core + store crates.
//!
//! ## Module Organization
//! ```text
//! loja_terminal/
//! ├── lib.rs          ◄─── Crate exports
//! ├── terminal.rs     ◄─── Terminal context + operation surface
//! └── error.rs        ◄─── Unified error funnel
//! ```
//!
//! A [`Terminal`] is one operator's context - cart, identity, store handle.
//! Spin up one per register; they share the [`loja_store::Store`] and the
//! store's write lock keeps their commits serialized.
//!
//! ## Usage
//!
//! ```rust
//! use loja_core::{Money, PaymentMethod, Product};
//! use loja_store::Store;
//! use loja_terminal::Terminal;
//!
//! let store = Store::new();
//! let coke = Product::new("Coca-Cola 2L", Money::from_cents(999), 12, "Bebidas");
//! let coke_id = coke.id.clone();
//! store.with_mut(|tables| tables.insert_product(coke)).unwrap();
//!
//! let terminal = Terminal::new(store, "op-1");
//! terminal.open_cash_session(Money::from_cents(5000)).unwrap();
//! terminal.add_to_cart(&coke_id).unwrap();
//!
//! let sale = terminal.complete_sale(PaymentMethod::Pix).unwrap();
//! assert_eq!(sale.total(), Money::from_cents(999));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod terminal;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{TerminalError, TerminalResult};
pub use terminal::Terminal;
