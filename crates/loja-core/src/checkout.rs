//! # Checkout
//!
//! The sale-completion transaction: turns a cart into a committed [`Sale`]
//! plus its ledger effects, all-or-nothing.
//!
//! ## Transaction Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    complete_sale                                    │
//! │                                                                     │
//! │  PRECONDITIONS (checked in order, any failure aborts with           │
//! │  zero side effects):                                                │
//! │                                                                     │
//! │   1. cart not empty ─────────────────► EmptyCart                    │
//! │   2. cash session open ──────────────► RegisterClosed               │
//! │   3. every line qty <= live stock ───► StockExceeded(product)       │
//! │                                                                     │
//! │  EFFECTS (only after all checks pass):                              │
//! │                                                                     │
//! │   • Sale built from by-value line snapshots (total = exact sum)     │
//! │   • stock decremented per line                                      │
//! │   • session.record_sale(total)                                      │
//! │   • cart cleared                                                    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Precondition 3 runs against live stock at commit time, not the counts
//! seen when lines were added: when stock changed in between, the sale
//! fails with `StockExceeded` rather than silently clamping quantities.
//!
//! The caller provides exclusivity (one write lock around the whole call
//! plus the ledger append) and appends the returned sale to the sales
//! ledger inside that same critical section.

use chrono::Utc;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::inventory::InventoryLedger;
use crate::money::Money;
use crate::session::CashSession;
use crate::types::{PaymentMethod, Sale, SaleLine};

/// Completes the sale held in `cart`.
///
/// On success the cart is cleared, stock and the session total are updated,
/// and the committed sale is returned for the caller to append to the sales
/// ledger. On any error the cart, the inventory, and the session are left
/// exactly as they were.
///
/// ## Errors
/// - [`CoreError::EmptyCart`] - nothing to sell
/// - [`CoreError::RegisterClosed`] - no open cash session
/// - [`CoreError::StockExceeded`] - a line outgrew the live stock since it
///   was added (first committer wins; this caller lost the race)
/// - [`CoreError::ProductNotFound`] - a line references a product that has
///   left the catalog
pub fn complete_sale(
    cart: &mut Cart,
    session: Option<&mut CashSession>,
    inventory: &mut impl InventoryLedger,
    employee_id: &str,
    payment_method: PaymentMethod,
) -> CoreResult<Sale> {
    // Precondition 1: a sale needs at least one line.
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    // Precondition 2: a sale needs an open drawer to settle into.
    let session = match session {
        Some(session) if session.is_open => session,
        _ => return Err(CoreError::RegisterClosed),
    };

    // Precondition 3: re-validate every line against live stock.
    for line in cart.lines() {
        let available = inventory
            .stock_of(&line.product_id)
            .ok_or_else(|| CoreError::ProductNotFound(line.product_id.clone()))?;
        if line.quantity > available {
            return Err(CoreError::StockExceeded {
                name: line.product_name.clone(),
                available,
                requested: line.quantity,
            });
        }
    }

    // All checks passed; from here on nothing can fail.
    let items: Vec<SaleLine> = cart.lines().iter().map(SaleLine::from).collect();
    let total: Money = items.iter().map(SaleLine::total).sum();

    let sale = Sale {
        id: Uuid::new_v4().to_string(),
        items,
        total_cents: total.cents(),
        payment_method,
        employee_id: employee_id.to_string(),
        created_at: Utc::now(),
    };

    for line in sale.items.iter() {
        // Cannot fail: quantities were validated above under the caller's
        // exclusive lock.
        inventory.decrement(&line.product_id, line.quantity)?;
    }

    session.record_sale(sale.total());
    cart.clear();

    Ok(sale)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use std::collections::HashMap;

    fn product(name: &str, price_cents: i64, stock: i64) -> Product {
        Product::new(name, Money::from_cents(price_cents), stock, "Mercearia")
    }

    fn ledger_for(products: &[&Product]) -> HashMap<String, i64> {
        products
            .iter()
            .map(|p| (p.id.clone(), p.stock))
            .collect()
    }

    #[test]
    fn test_successful_sale_applies_all_three_effects() {
        // Product at R$ 10,00 with stock 5, added three times
        let coke = product("Coca-Cola 2L", 1000, 5);
        let mut ledger = ledger_for(&[&coke]);
        let mut cart = Cart::new();
        cart.add(&coke).unwrap();
        cart.add(&coke).unwrap();
        cart.add(&coke).unwrap();
        assert_eq!(cart.total(), Money::from_cents(3000));

        let mut session = CashSession::open(Money::from_cents(10000), "op-1");

        let sale = complete_sale(
            &mut cart,
            Some(&mut session),
            &mut ledger,
            "op-1",
            PaymentMethod::Cash,
        )
        .unwrap();

        assert_eq!(sale.total(), Money::from_cents(3000));
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].quantity, 3);
        assert_eq!(ledger.stock_of(&coke.id), Some(2));
        assert_eq!(session.total_sales(), Money::from_cents(3000));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_is_exact_sum_of_line_totals() {
        let a = product("Arroz 5kg", 2490, 10);
        let b = product("Leite 1L", 549, 10);
        let mut ledger = ledger_for(&[&a, &b]);
        let mut cart = Cart::new();
        cart.add(&a).unwrap();
        cart.add(&b).unwrap();
        cart.set_quantity(&b, 3).unwrap();

        let mut session = CashSession::open(Money::zero(), "op-1");
        let sale = complete_sale(
            &mut cart,
            Some(&mut session),
            &mut ledger,
            "op-1",
            PaymentMethod::Pix,
        )
        .unwrap();

        let line_sum: i64 = sale.items.iter().map(|l| l.total_cents).sum();
        assert_eq!(sale.total_cents, line_sum);
        assert_eq!(sale.total_cents, 2490 + 3 * 549);
    }

    #[test]
    fn test_empty_cart_mutates_nothing() {
        let mut ledger: HashMap<String, i64> = HashMap::new();
        let mut cart = Cart::new();
        let mut session = CashSession::open(Money::from_cents(5000), "op-1");

        let err = complete_sale(
            &mut cart,
            Some(&mut session),
            &mut ledger,
            "op-1",
            PaymentMethod::Card,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::EmptyCart));
        assert_eq!(session.total_sales(), Money::zero());
    }

    #[test]
    fn test_no_session_mutates_nothing() {
        let coke = product("Coca-Cola 2L", 1000, 5);
        let mut ledger = ledger_for(&[&coke]);
        let mut cart = Cart::new();
        cart.add(&coke).unwrap();

        let err = complete_sale(
            &mut cart,
            None,
            &mut ledger,
            "op-1",
            PaymentMethod::Cash,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::RegisterClosed));
        assert_eq!(ledger.stock_of(&coke.id), Some(5));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_closed_session_mutates_nothing() {
        let coke = product("Coca-Cola 2L", 1000, 5);
        let mut ledger = ledger_for(&[&coke]);
        let mut cart = Cart::new();
        cart.add(&coke).unwrap();

        let mut session = CashSession::open(Money::from_cents(5000), "op-1");
        session.close(Money::from_cents(5000));

        let err = complete_sale(
            &mut cart,
            Some(&mut session),
            &mut ledger,
            "op-1",
            PaymentMethod::Cash,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::RegisterClosed));
        assert_eq!(ledger.stock_of(&coke.id), Some(5));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(session.total_sales(), Money::zero());
    }

    #[test]
    fn test_empty_cart_outranks_closed_register() {
        let mut ledger: HashMap<String, i64> = HashMap::new();
        let mut cart = Cart::new();

        let err = complete_sale(
            &mut cart,
            None,
            &mut ledger,
            "op-1",
            PaymentMethod::Cash,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_stock_revalidated_at_commit_time() {
        let coke = product("Coca-Cola 2L", 1000, 5);
        let mut ledger = ledger_for(&[&coke]);
        let mut cart = Cart::new();
        cart.add(&coke).unwrap();
        cart.add(&coke).unwrap();
        cart.add(&coke).unwrap();

        // A concurrent sale drained the shelf after the lines were added
        ledger.insert(coke.id.clone(), 2);

        let mut session = CashSession::open(Money::from_cents(5000), "op-1");
        let err = complete_sale(
            &mut cart,
            Some(&mut session),
            &mut ledger,
            "op-1",
            PaymentMethod::Cash,
        )
        .unwrap_err();

        match err {
            CoreError::StockExceeded {
                name,
                available,
                requested,
            } => {
                assert_eq!(name, "Coca-Cola 2L");
                assert_eq!(available, 2);
                assert_eq!(requested, 3);
            }
            other => panic!("unexpected error: {other}"),
        }

        // Nothing moved
        assert_eq!(ledger.stock_of(&coke.id), Some(2));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(session.total_sales(), Money::zero());
    }

    #[test]
    fn test_vanished_product_fails_before_any_effect() {
        let coke = product("Coca-Cola 2L", 1000, 5);
        let rice = product("Arroz 5kg", 2490, 5);
        let mut ledger = ledger_for(&[&coke]); // rice never made it in
        let mut cart = Cart::new();
        cart.add(&coke).unwrap();
        cart.add(&rice).unwrap();

        let mut session = CashSession::open(Money::zero(), "op-1");
        let err = complete_sale(
            &mut cart,
            Some(&mut session),
            &mut ledger,
            "op-1",
            PaymentMethod::Cash,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert_eq!(ledger.stock_of(&coke.id), Some(5));
        assert_eq!(session.total_sales(), Money::zero());
    }

    #[test]
    fn test_sale_snapshot_survives_later_price_edits() {
        let mut coke = product("Coca-Cola 2L", 1000, 5);
        let mut ledger = ledger_for(&[&coke]);
        let mut cart = Cart::new();
        cart.add(&coke).unwrap();

        let mut session = CashSession::open(Money::zero(), "op-1");
        let sale = complete_sale(
            &mut cart,
            Some(&mut session),
            &mut ledger,
            "op-1",
            PaymentMethod::Cash,
        )
        .unwrap();

        // Catalog edits after commit cannot reach the sale
        coke.price_cents = 9999;
        coke.name = "renamed".to_string();

        assert_eq!(sale.items[0].unit_price_cents, 1000);
        assert_eq!(sale.items[0].product_name, "Coca-Cola 2L");
        assert_eq!(sale.total_cents, 1000);
    }
}
