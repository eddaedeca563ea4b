//! # Terminal
//!
//! One operator's point-of-sale context: a cart, the operator identity, and
//! a handle to the shared store.
//!
//! ## Operation Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Terminal                                    │
//! │                                                                     │
//! │  Cart              add_to_cart, set_cart_quantity,                  │
//! │                    remove_from_cart, cart_total, clear_cart         │
//! │                                                                     │
//! │  Cash drawer       open_cash_session, close_cash_session            │
//! │                                                                     │
//! │  Checkout          complete_sale                                    │
//! │                                                                     │
//! │  Reporting         monthly_report                                   │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Terminals are explicit context objects: each holds its own cart and
//! operator, while every terminal created over the same [`Store`] sees the
//! same catalog, ledgers, and cash session. Session opening and the
//! sale-completion commit each run inside one store write lock, so
//! concurrent terminals cannot double-open a drawer or oversell a shelf.

use std::sync::Mutex;

use tracing::{debug, info};

use loja_core::{
    checkout, monthly_report, Cart, CartLine, CashSession, CoreError, Money, MonthlyReport,
    PaymentMethod, Sale,
};
use loja_store::Store;

use crate::error::TerminalResult;

// =============================================================================
// Terminal
// =============================================================================

/// A point-of-sale terminal bound to one operator.
#[derive(Debug)]
pub struct Terminal {
    store: Store,
    operator_id: String,
    /// The terminal's working cart. Mutex because a front end may drive the
    /// same terminal from more than one thread.
    cart: Mutex<Cart>,
}

impl Terminal {
    /// Creates a terminal with an empty cart.
    pub fn new(store: Store, operator_id: impl Into<String>) -> Self {
        Terminal {
            store,
            operator_id: operator_id.into(),
            cart: Mutex::new(Cart::new()),
        }
    }

    /// The operator this terminal is bound to.
    #[inline]
    pub fn operator_id(&self) -> &str {
        &self.operator_id
    }

    /// The shared store behind this terminal.
    #[inline]
    pub fn store(&self) -> &Store {
        &self.store
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// The stock check here runs against the catalog as of this call;
    /// [`Terminal::complete_sale`] re-validates every line at commit time.
    pub fn add_to_cart(&self, product_id: &str) -> TerminalResult<()> {
        debug!(product_id = %product_id, "add_to_cart");

        let product = self
            .store
            .with(|tables| tables.product(product_id).cloned())
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        self.with_cart_mut(|cart| cart.add(&product))?;
        Ok(())
    }

    /// Replaces the quantity of a cart line; zero or less removes it.
    pub fn set_cart_quantity(&self, product_id: &str, quantity: i64) -> TerminalResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "set_cart_quantity");

        if quantity <= 0 {
            self.with_cart_mut(|cart| cart.remove(product_id));
            return Ok(());
        }

        let product = self
            .store
            .with(|tables| tables.product(product_id).cloned())
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        self.with_cart_mut(|cart| cart.set_quantity(&product, quantity))?;
        Ok(())
    }

    /// Removes a cart line unconditionally.
    pub fn remove_from_cart(&self, product_id: &str) {
        debug!(product_id = %product_id, "remove_from_cart");
        self.with_cart_mut(|cart| cart.remove(product_id));
    }

    /// Sum of all cart line totals.
    pub fn cart_total(&self) -> Money {
        self.with_cart(|cart| cart.total())
    }

    /// Current cart lines, in the order they were added.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.with_cart(|cart| cart.lines().to_vec())
    }

    /// Empties the cart (sale cancelled).
    pub fn clear_cart(&self) {
        debug!("clear_cart");
        self.with_cart_mut(|cart| cart.clear());
    }

    // =========================================================================
    // Cash Session Operations
    // =========================================================================

    /// Opens a cash session with the declared drawer amount.
    ///
    /// The open check and the insert run under one store write lock, so of
    /// two racing opens exactly one wins.
    ///
    /// ## Errors
    /// - [`CoreError::SessionAlreadyOpen`] when any terminal already has an
    ///   open session
    pub fn open_cash_session(&self, initial: Money) -> TerminalResult<CashSession> {
        let session = self.store.with_mut(|tables| -> TerminalResult<CashSession> {
            if tables.current_session().is_some() {
                return Err(CoreError::SessionAlreadyOpen.into());
            }
            let session = CashSession::open(initial, &self.operator_id);
            let snapshot = session.clone();
            tables.add_session(session)?;
            Ok(snapshot)
        })?;

        info!(session_id = %session.id, initial = %initial, "Cash session opened");
        Ok(session)
    }

    /// Closes the open cash session with the counted drawer amount and
    /// returns it, variance included.
    ///
    /// ## Errors
    /// - [`CoreError::RegisterClosed`] when no session is open
    pub fn close_cash_session(&self, final_count: Money) -> TerminalResult<CashSession> {
        let (session, variance) =
            self.store
                .with_mut(|tables| -> TerminalResult<(CashSession, Money)> {
                    let session = tables
                        .current_session_mut()
                        .ok_or(CoreError::RegisterClosed)?;
                    let variance = session.close(final_count);
                    Ok((session.clone(), variance))
                })?;

        info!(
            session_id = %session.id,
            final_count = %final_count,
            variance = %variance,
            "Cash session closed"
        );
        Ok(session)
    }

    /// The currently open session, when one exists.
    pub fn current_session(&self) -> Option<CashSession> {
        self.store.with(|tables| tables.current_session().cloned())
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Commits the cart as a sale.
    ///
    /// Holds the cart lock and then a single store write lock across the
    /// whole validate-then-apply sequence, so the sale append, the stock
    /// decrements, and the session total move as one unit - all of them or
    /// none.
    pub fn complete_sale(&self, payment_method: PaymentMethod) -> TerminalResult<Sale> {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");

        let sale = self.store.with_mut(|tables| -> TerminalResult<Sale> {
            // Field-level borrows: the open session and the product ledger
            // are disjoint tables handed to checkout together.
            let session = tables.cash_registers.iter_mut().find(|s| s.is_open);

            let sale = checkout::complete_sale(
                &mut cart,
                session,
                &mut tables.products,
                &self.operator_id,
                payment_method,
            )?;

            tables.sales.append(sale.clone())?;
            Ok(sale)
        })?;

        info!(
            sale_id = %sale.id,
            total = %sale.total(),
            items = sale.items.len(),
            method = ?payment_method,
            "Sale completed"
        );
        Ok(sale)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Monthly figures derived from the sales ledger (`month` is 1-12).
    pub fn monthly_report(&self, month: u32, year: i32) -> MonthlyReport {
        self.store
            .with(|tables| monthly_report(tables.sales.get_all(), month, year))
    }

    // =========================================================================
    // Cart Lock Helpers
    // =========================================================================

    fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
