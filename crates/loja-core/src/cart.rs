//! # Cart
//!
//! The in-memory working set of line items for one pending sale.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Operator Action            Cart Change                             │
//! │  ───────────────            ───────────                             │
//! │                                                                     │
//! │  Scan product ────────────► add(product)        qty 1 or +1         │
//! │                                                                     │
//! │  Edit quantity ───────────► set_quantity(p, n)  n <= 0 removes      │
//! │                                                                     │
//! │  Remove line ─────────────► remove(product_id)  unconditional       │
//! │                                                                     │
//! │  Checkout / cancel ───────► clear()                                 │
//! │                                                                     │
//! │  Every mutation is bounded by the product's live stock; a failed    │
//! │  operation leaves the cart exactly as it was.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is ephemeral: it never outlives the checkout flow that owns it,
//! and its lines reference products by id without owning them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, SaleLine};

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the cart.
///
/// The unit price is frozen when the product first enters the cart, so a
/// catalog price edit mid-sale does not reprice lines already rung up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Product id (non-owning reference).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub product_name: String,

    /// Unit price in centavos at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line for one unit of a product at its current price.
    fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity), recomputed on demand.
    #[inline]
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }
}

/// Snapshot conversion used when a sale is committed.
impl From<&CartLine> for SaleLine {
    fn from(line: &CartLine) -> Self {
        SaleLine {
            product_id: line.product_id.clone(),
            product_name: line.product_name.clone(),
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
            total_cents: line.total_cents(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again grows
///   its quantity)
/// - Every line quantity is >= 1 and <= the product's stock at the time the
///   mutation was applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product, or grows an existing line by one.
    ///
    /// ## Errors
    /// - [`CoreError::OutOfStock`] when the product has zero stock
    /// - [`CoreError::StockExceeded`] when one more unit would pass the
    ///   product's stock
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        if !product.in_stock() {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.line_mut(&product.id) {
            let requested = line.quantity + 1;
            if !product.has_stock_for(requested) {
                return Err(CoreError::StockExceeded {
                    name: product.name.clone(),
                    available: product.stock,
                    requested,
                });
            }
            line.quantity = requested;
            return Ok(());
        }

        self.lines.push(CartLine::from_product(product));
        Ok(())
    }

    /// Replaces the quantity of a product's line.
    ///
    /// ## Behavior
    /// - `quantity <= 0` removes the line
    /// - Otherwise the line's quantity is replaced and its total follows
    ///   (`quantity × unit price`)
    /// - A product with no line in the cart is left alone
    ///
    /// ## Errors
    /// - [`CoreError::StockExceeded`] when `quantity` passes the product's
    ///   stock; the line keeps its previous quantity
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(&product.id);
            return Ok(());
        }

        if !product.has_stock_for(quantity) {
            return Err(CoreError::StockExceeded {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Removes a product's line unconditionally. Absent lines are a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line totals; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Lines in the order they were added.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for a product, if present.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product_id)
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price_cents: i64, stock: i64) -> Product {
        Product::new(name, Money::from_cents(price_cents), stock, "Mercearia")
    }

    #[test]
    fn test_add_new_line_starts_at_one() {
        let mut cart = Cart::new();
        let coke = product("Coca-Cola 2L", 999, 5);

        cart.add(&coke).unwrap();

        assert_eq!(cart.line_count(), 1);
        let line = cart.line(&coke.id).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price_cents, 999);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let coke = product("Coca-Cola 2L", 999, 5);

        cart.add(&coke).unwrap();
        cart.add(&coke).unwrap();
        cart.add(&coke).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(&coke.id).unwrap().quantity, 3);
        assert_eq!(cart.total(), Money::from_cents(2997));
    }

    #[test]
    fn test_add_out_of_stock_leaves_cart_empty() {
        let mut cart = Cart::new();
        let sold_out = product("Pão Francês", 75, 0);

        let err = cart.add(&sold_out).unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_past_stock_keeps_quantity() {
        let mut cart = Cart::new();
        let scarce = product("Azeite 500ml", 2890, 2);

        cart.add(&scarce).unwrap();
        cart.add(&scarce).unwrap();

        let err = cart.add(&scarce).unwrap_err();
        assert!(matches!(
            err,
            CoreError::StockExceeded {
                available: 2,
                requested: 3,
                ..
            }
        ));
        assert_eq!(cart.line(&scarce.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_set_quantity_replaces_and_recomputes() {
        let mut cart = Cart::new();
        let coke = product("Coca-Cola 2L", 1000, 5);

        cart.add(&coke).unwrap();
        cart.set_quantity(&coke, 4).unwrap();

        let line = cart.line(&coke.id).unwrap();
        assert_eq!(line.quantity, 4);
        assert_eq!(line.total(), Money::from_cents(4000));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let coke = product("Coca-Cola 2L", 1000, 5);

        cart.add(&coke).unwrap();
        cart.set_quantity(&coke, 0).unwrap();
        assert!(cart.is_empty());

        cart.add(&coke).unwrap();
        cart.set_quantity(&coke, -3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_past_stock_fails_without_mutation() {
        let mut cart = Cart::new();
        let coke = product("Coca-Cola 2L", 1000, 5);

        cart.add(&coke).unwrap();
        let err = cart.set_quantity(&coke, 6).unwrap_err();
        assert!(matches!(err, CoreError::StockExceeded { .. }));
        assert_eq!(cart.line(&coke.id).unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_is_unconditional() {
        let mut cart = Cart::new();
        let coke = product("Coca-Cola 2L", 1000, 5);

        cart.add(&coke).unwrap();
        cart.remove(&coke.id);
        assert!(cart.is_empty());

        // Removing an absent line is a no-op
        cart.remove("no-such-id");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_total_matches_line_sums_after_mutations() {
        let mut cart = Cart::new();
        let coke = product("Coca-Cola 2L", 999, 10);
        let rice = product("Arroz 5kg", 2490, 4);

        cart.add(&coke).unwrap();
        cart.add(&rice).unwrap();
        cart.set_quantity(&coke, 3).unwrap();

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.quantity * l.unit_price_cents)
            .sum();
        assert_eq!(cart.total().cents(), expected);

        cart.remove(&rice.id);
        assert_eq!(cart.total(), Money::from_cents(3 * 999));
    }

    #[test]
    fn test_line_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut coke = product("Coca-Cola 2L", 999, 10);

        cart.add(&coke).unwrap();

        // Catalog price change after the line exists does not reprice it
        coke.price_cents = 1299;
        cart.set_quantity(&coke, 2).unwrap();

        assert_eq!(cart.line(&coke.id).unwrap().unit_price_cents, 999);
        assert_eq!(cart.total(), Money::from_cents(1998));
    }
}
