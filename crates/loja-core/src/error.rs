//! # Error Types
//!
//! Domain-specific error types for loja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  loja-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  loja-store errors (separate crate)                                 │
//! │  └── StoreError       - Record store failures                       │
//! │                                                                     │
//! │  loja-terminal errors (separate crate)                              │
//! │  └── TerminalError    - Funnel over both of the above               │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every CoreError variant is recoverable: the triggering operation aborts
//! with zero side effects and the caller may correct the precondition and
//! retry. Contract violations (e.g. recording a sale on a closed cash
//! session) are NOT errors - they panic, see [`crate::session`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product has zero stock and cannot enter the cart.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// Requested quantity exceeds the available stock.
    ///
    /// Raised both when growing a cart line past the shelf count and when
    /// checkout re-validates lines against live stock at commit time.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    StockExceeded {
        name: String,
        available: i64,
        requested: i64,
    },

    /// An inventory decrement would push stock below zero.
    #[error("Cannot take {requested} of {product_id}: only {available} in stock")]
    InsufficientStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// Checkout was attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout or close was attempted with no open cash session.
    #[error("No cash session is open")]
    RegisterClosed,

    /// A cash session is already open; only one may be open at a time.
    #[error("A cash session is already open")]
    SessionAlreadyOpen,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before business logic runs; nothing has been mutated when one of
/// these surfaces.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
