//! # loja-core: Pure Business Logic for Loja POS
//!
//! This crate is the heart of Loja POS. It contains all business logic as
//! pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Loja POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Front end (out of scope)                   │   │
//! │  │     Catalog UI ──► POS UI ──► Drawer UI ──► Reports UI      │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                      loja-terminal                          │   │
//! │  │     add_to_cart, complete_sale, open_cash_session, ...      │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ loja-core (THIS CRATE) ★                     │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐           │   │
//! │  │  │  types  │ │  money  │ │  cart   │ │ checkout │           │   │
//! │  │  │ Product │ │  Money  │ │  Cart   │ │ complete │           │   │
//! │  │  │  Sale   │ │ (cents) │ │CartLine │ │  _sale   │           │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘           │   │
//! │  │  ┌─────────┐ ┌──────────┐ ┌─────────────┐                   │   │
//! │  │  │ session │ │  report  │ │ validation  │                   │   │
//! │  │  └─────────┘ └──────────┘ └─────────────┘                   │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO STORAGE • NO LOGGING • PURE FUNCTIONS          │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                       loja-store                            │   │
//! │  │        keyed record collections, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Employee, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Record validation rules
//! - [`cart`] - The pending-sale working set
//! - [`inventory`] - Stock ledger trait
//! - [`session`] - Cash-drawer session lifecycle
//! - [`checkout`] - The sale-completion transaction
//! - [`report`] - Monthly aggregation over the sales ledger
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; effects only through
//!    values handed in by the caller
//! 2. **No I/O**: storage, network, and file access are forbidden here
//! 3. **Integer Money**: all monetary values are centavos (i64)
//! 4. **Explicit Errors**: typed errors for everything recoverable; panics
//!    only for documented caller-contract violations

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod inventory;
pub mod money;
pub mod report;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use loja_core::Money` instead of
// `use loja_core::money::Money`

pub use cart::{Cart, CartLine};
pub use checkout::complete_sale;
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::InventoryLedger;
pub use money::Money;
pub use report::{monthly_report, DailySales, MonthlyReport, ProductSales};
pub use session::CashSession;
pub use types::*;
