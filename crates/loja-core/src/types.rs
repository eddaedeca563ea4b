//! # Domain Types
//!
//! Core domain types used throughout Loja POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │      Sale       │   │    Employee     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │   │
//! │  │  price_cents    │   │  items          │   │  role           │   │
//! │  │  unit_kind      │   │  total_cents    │   │  is_active      │   │
//! │  │  stock          │   │  payment_method │   │                 │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    UnitKind     │   │  PaymentMethod  │   │      Role       │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  Unit           │   │  Cash           │   │  Admin          │   │
//! │  │  Weight         │   │  Card           │   │  Manager        │   │
//! │  └─────────────────┘   │  Pix            │   │  Cashier        │   │
//! │                        └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `SaleLine` is a by-value snapshot: once a sale is committed, later price
//! or stock edits cannot retroactively alter it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Unit Kind
// =============================================================================

/// How a product is priced and dispensed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Sold by the piece.
    Unit,
    /// Sold by weight; carries a price per kilogram.
    Weight,
}

impl Default for UnitKind {
    fn default() -> Self {
        UnitKind::Unit
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Tender used to settle a sale.
///
/// `Pix` is the Brazilian instant-payment rail; the system treats it as an
/// opaque tag with no special processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Pix,
}

// =============================================================================
// Employee Role
// =============================================================================

/// Access level of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Cashier,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Invariants
/// - `stock >= 0` at all times; only checkout decrements it
/// - `unit_kind == Weight` implies a positive `price_per_kg_cents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown to the operator.
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Price per unit in centavos.
    pub price_cents: i64,

    /// Price per kilogram in centavos, for weight-priced products.
    pub price_per_kg_cents: Option<i64>,

    /// Whether the product is sold by the piece or by weight.
    pub unit_kind: UnitKind,

    /// Current stock level.
    pub stock: i64,

    /// Category used for browsing and search.
    pub category: String,

    /// Barcode (EAN-13 etc.), when the product carries one.
    pub barcode: Option<String>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a unit-priced product with a fresh id and timestamps.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            price_cents: price.cents(),
            price_per_kg_cents: None,
            unit_kind: UnitKind::Unit,
            stock,
            category: category.into(),
            barcode: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a weight-priced product (price per kilogram required).
    pub fn by_weight(
        name: impl Into<String>,
        price: Money,
        price_per_kg: Money,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        let mut product = Product::new(name, price, stock, category);
        product.unit_kind = UnitKind::Weight;
        product.price_per_kg_cents = Some(price_per_kg.cents());
        product
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the per-kilogram price, when the product has one.
    #[inline]
    pub fn price_per_kg(&self) -> Option<Money> {
        self.price_per_kg_cents.map(Money::from_cents)
    }

    /// Checks whether any stock is left.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks whether `quantity` units could be taken from stock.
    #[inline]
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }

    /// Bumps the modification timestamp after an edit.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A store employee; referenced by sales and cash sessions as the
/// responsible operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Creates an active employee with a fresh id.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Employee {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            role,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Checks whether this employee is an active administrator.
    #[inline]
    pub fn is_active_admin(&self) -> bool {
        self.is_active && self.role == Role::Admin
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// A line item in a committed sale.
///
/// Snapshot pattern: product name and unit price are copied by value at
/// commit time and frozen thereafter. `product_id` is a non-owning back
/// reference kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    /// Quantity sold.
    pub quantity: i64,
    /// Unit price in centavos at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Line total (unit price × quantity).
    pub total_cents: i64,
}

impl SaleLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A committed sale.
///
/// Immutable once created: sales are only ever appended to the sales
/// ledger, never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    /// Line items in the order they sat in the cart.
    pub items: Vec<SaleLine>,
    /// Exact sum of all line totals, in centavos.
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    /// Operator who completed the sale.
    pub employee_id: String,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
