//! # Validation Module
//!
//! Field validation for catalog and staff records.
//!
//! Validators run before any record reaches the store, so a failure here
//! guarantees nothing was written.
//!
//! ## Usage
//! ```rust
//! use loja_core::money::Money;
//! use loja_core::types::Product;
//! use loja_core::validation::validate_product;
//!
//! let product = Product::new("Café 500g", Money::from_cents(1890), 12, "Mercearia");
//! assert!(validate_product(&product).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::{Employee, Product, UnitKind};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a string field is non-empty after trimming.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a price in centavos.
///
/// ## Rules
/// - Must be strictly positive; free items are not sold here
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a stock count.
///
/// ## Rules
/// - Must be zero or greater; stock never goes negative
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a product before it enters the catalog.
///
/// ## Rules
/// - Name and category are required
/// - Unit price must be positive
/// - Stock must not be negative
/// - Weight-priced products must carry a positive price per kilogram
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_required("name", &product.name)?;
    validate_price_cents("price", product.price_cents)?;
    validate_stock(product.stock)?;
    validate_required("category", &product.category)?;

    if product.unit_kind == UnitKind::Weight {
        match product.price_per_kg_cents {
            Some(cents) if cents > 0 => {}
            _ => {
                return Err(ValidationError::MustBePositive {
                    field: "price_per_kg".to_string(),
                })
            }
        }
    }

    Ok(())
}

/// Validates an employee record.
///
/// ## Rules
/// - Name and email are required
/// - Email must at least look like an address
pub fn validate_employee(employee: &Employee) -> ValidationResult<()> {
    validate_required("name", &employee.name)?;
    validate_required("email", &employee.email)?;

    if !employee.email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must contain '@'".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
