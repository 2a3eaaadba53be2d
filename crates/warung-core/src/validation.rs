//! # Validation Module
//!
//! Input validation for the ledger's invariants.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation layer                                            │
//! │  ├── Format checks, immediate user feedback                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Ledger facade (warung-db)                                     │
//! │  └── THIS MODULE: invariant validation, caller-independent              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  ├── NOT NULL constraints                                               │
//! │  └── CHECK (price >= 0), CHECK (total_amount > 0)                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The original system validated only in its forms; the store re-checks
//! here so the invariants hold no matter who the caller is.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name: must be non-empty after trimming.
pub fn validate_menu_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "menu name".to_string(),
        });
    }
    Ok(())
}

/// Validates a menu category: must be non-empty after trimming.
///
/// The value itself is free-form; [`crate::types::MENU_CATEGORIES`] is
/// only a suggestion list.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }
    Ok(())
}

/// Validates the customer name captured on a payment: non-empty after
/// trimming.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Money Validators
// =============================================================================

/// Validates a menu price: zero is allowed (free add-ons), negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates a payment total: must be strictly positive.
pub fn validate_total_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "total amount".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_menu_name() {
        assert!(validate_menu_name("Nasi Gudeg").is_ok());
        assert!(validate_menu_name("").is_err());
        assert!(validate_menu_name("   ").is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Makanan Utama").is_ok());
        assert!(validate_category("Menu Spesial").is_ok()); // free-form is fine
        assert!(validate_category("").is_err());
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Budi").is_ok());
        assert!(validate_customer_name(" \t").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_rupiah(15_000)).is_ok());
        assert!(validate_price(Money::zero()).is_ok()); // free item
        assert!(validate_price(Money::from_rupiah(-1)).is_err());
    }

    #[test]
    fn test_validate_total_amount() {
        assert!(validate_total_amount(Money::from_rupiah(25_000)).is_ok());
        assert!(validate_total_amount(Money::zero()).is_err());
        assert!(validate_total_amount(Money::from_rupiah(-100)).is_err());
    }
}
