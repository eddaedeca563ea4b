//! # Cash Session
//!
//! One bounded period during which a cash drawer is open and accumulating
//! sales.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cash Session Lifecycle                          │
//! │                                                                     │
//! │        open(initial, operator)                                      │
//! │  Closed ──────────────────────────► Open                            │
//! │                                      │                              │
//! │                                      │ record_sale(amount)          │
//! │                                      │ (checkout only, repeatable)  │
//! │                                      │                              │
//! │        close(final_count)            ▼                              │
//! │  Closed ◄────────────────────────── Open                            │
//! │                                                                     │
//! │  variance = final_count - (initial + total_sales)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `record_sale` and `close` on an already-closed session are caller logic
//! errors, not user mistakes, and panic. The recoverable "register closed" /
//! "session already open" cases are raised by the terminal layer, which can
//! see the system-wide session state before touching a session value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Cash Session
// =============================================================================

/// A cash-drawer session.
///
/// ## Invariants
/// - `total_sales_cents` only grows while the session is open, and freezes
///   at close
/// - At most one session is open system-wide at any time (enforced by the
///   terminal layer under the store's write lock)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashSession {
    pub id: String,

    pub opened_at: DateTime<Utc>,

    /// Set exactly once, by `close`.
    pub closed_at: Option<DateTime<Utc>>,

    /// Drawer contents declared when the session was opened, in centavos.
    pub initial_cents: i64,

    /// Drawer contents counted at close, in centavos.
    pub final_cents: Option<i64>,

    /// Running total of committed sales, in centavos.
    pub total_sales_cents: i64,

    /// Operator who opened the session.
    pub employee_id: String,

    pub is_open: bool,
}

impl CashSession {
    /// Opens a new session with a declared initial amount.
    pub fn open(initial: Money, employee_id: impl Into<String>) -> Self {
        CashSession {
            id: Uuid::new_v4().to_string(),
            opened_at: Utc::now(),
            closed_at: None,
            initial_cents: initial.cents(),
            final_cents: None,
            total_sales_cents: 0,
            employee_id: employee_id.into(),
            is_open: true,
        }
    }

    /// Adds a committed sale total to the running sum.
    ///
    /// Called exclusively by the checkout transaction, never directly from a
    /// user action.
    ///
    /// # Panics
    /// Panics when the session is closed: recording a sale against a closed
    /// drawer is a logic error in the caller.
    pub fn record_sale(&mut self, amount: Money) {
        assert!(self.is_open, "record_sale called on a closed cash session");
        self.total_sales_cents += amount.cents();
    }

    /// Closes the session with the operator-counted drawer amount and
    /// returns the variance against the expected amount.
    ///
    /// # Panics
    /// Panics when the session is already closed.
    pub fn close(&mut self, final_count: Money) -> Money {
        assert!(self.is_open, "close called on a closed cash session");
        self.is_open = false;
        self.closed_at = Some(Utc::now());
        self.final_cents = Some(final_count.cents());
        final_count - self.expected()
    }

    /// Declared opening amount.
    #[inline]
    pub fn initial(&self) -> Money {
        Money::from_cents(self.initial_cents)
    }

    /// Accumulated sales total.
    #[inline]
    pub fn total_sales(&self) -> Money {
        Money::from_cents(self.total_sales_cents)
    }

    /// Counted closing amount, once closed.
    #[inline]
    pub fn final_count(&self) -> Option<Money> {
        self.final_cents.map(Money::from_cents)
    }

    /// What the drawer should hold: initial amount plus all sales.
    #[inline]
    pub fn expected(&self) -> Money {
        self.initial() + self.total_sales()
    }

    /// Discrepancy between the counted and expected closing amounts.
    ///
    /// `None` while the session is open; zero when the counts reconcile,
    /// negative when the drawer came up short.
    pub fn variance(&self) -> Option<Money> {
        self.final_count().map(|counted| counted - self.expected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_starts_with_zero_sales() {
        let session = CashSession::open(Money::from_cents(10000), "op-1");

        assert!(session.is_open);
        assert!(session.closed_at.is_none());
        assert_eq!(session.initial(), Money::from_cents(10000));
        assert_eq!(session.total_sales(), Money::zero());
        assert_eq!(session.variance(), None);
    }

    #[test]
    fn test_record_sale_accumulates() {
        let mut session = CashSession::open(Money::from_cents(5000), "op-1");

        session.record_sale(Money::from_cents(1000));
        session.record_sale(Money::from_cents(2000));

        assert_eq!(session.total_sales(), Money::from_cents(3000));
        assert_eq!(session.expected(), Money::from_cents(8000));
    }

    #[test]
    fn test_close_with_exact_count_reconciles() {
        // Open with R$ 50,00, sell R$ 30,00, count R$ 80,00
        let mut session = CashSession::open(Money::from_cents(5000), "op-1");
        session.record_sale(Money::from_cents(3000));

        let variance = session.close(Money::from_cents(8000));

        assert_eq!(variance, Money::zero());
        assert!(!session.is_open);
        assert!(session.closed_at.is_some());
        assert_eq!(session.final_count(), Some(Money::from_cents(8000)));
        assert_eq!(session.variance(), Some(Money::zero()));
    }

    #[test]
    fn test_close_short_drawer_has_negative_variance() {
        // Same session, but the drawer counts R$ 75,00
        let mut session = CashSession::open(Money::from_cents(5000), "op-1");
        session.record_sale(Money::from_cents(3000));

        let variance = session.close(Money::from_cents(7500));

        assert_eq!(variance, Money::from_cents(-500));
        assert!(variance.is_negative());
    }

    #[test]
    fn test_totals_freeze_at_close() {
        let mut session = CashSession::open(Money::from_cents(5000), "op-1");
        session.record_sale(Money::from_cents(3000));
        session.close(Money::from_cents(8000));

        assert_eq!(session.total_sales(), Money::from_cents(3000));
    }

    #[test]
    #[should_panic(expected = "record_sale called on a closed cash session")]
    fn test_record_sale_on_closed_session_panics() {
        let mut session = CashSession::open(Money::from_cents(5000), "op-1");
        session.close(Money::from_cents(5000));
        session.record_sale(Money::from_cents(100));
    }

    #[test]
    #[should_panic(expected = "close called on a closed cash session")]
    fn test_double_close_panics() {
        let mut session = CashSession::open(Money::from_cents(5000), "op-1");
        session.close(Money::from_cents(5000));
        session.close(Money::from_cents(5000));
    }
}
