//! # Terminal Error Type
//!
//! Unified error funnel for terminal operations.
//!
//! Both lower layers keep their own error types; the terminal joins them so
//! a caller handles one kind. Every variant is recoverable - the operation
//! that raised it left the cart and every ledger untouched.

use thiserror::Error;

use loja_core::CoreError;
use loja_store::StoreError;

/// Error returned from terminal operations.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Business rule violation (cart, checkout, session).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Record store failure (missing record, duplicate id, validation).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for terminal operations.
pub type TerminalResult<T> = Result<T, TerminalError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through_transparently() {
        let err: TerminalError = CoreError::EmptyCart.into();
        assert_eq!(err.to_string(), "Cart is empty");

        let err: TerminalError = StoreError::not_found("Product", "p1").into();
        assert_eq!(err.to_string(), "Product not found: p1");
    }
}
