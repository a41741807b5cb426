//! # Validation Module
//!
//! Validating constructors: the only way a record enters a store.
//!
//! ## Validation Strategy
//! ```text
//! Layer 1: Input boundary (CLI parse)
//! ├── numeric range checks (non-negative quantity and unit price,
//! │   amount and price ceilings)
//! └── date and amount syntax
//!          │
//!          ▼
//! Layer 2: THIS MODULE
//! ├── required text fields, trimmed
//! ├── strictly positive transaction amounts
//! └── email shape
//! ```
//!
//! Each function is pure: it either returns the constructed entity with
//! a freshly minted id, or a typed error and nothing is constructed.
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use munshi_core::money::Money;
//! use munshi_core::types::RecordKind;
//! use munshi_core::validation::validate_financial;
//!
//! let record = validate_financial(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     "  Steel sheet sale  ",
//!     Money::from_paisa(10_000),
//!     RecordKind::Income,
//! )
//! .unwrap();
//! assert_eq!(record.description, "Steel sheet sale");
//! ```

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{Customer, FinancialRecord, InventoryItem, RecordKind};

// =============================================================================
// Field Helpers
// =============================================================================

/// Trims a required text field, rejecting blank input.
fn required_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(value.to_string())
}

/// Trims an optional email and checks its shape: empty is fine, anything
/// else must contain both `@` and `.`.
fn optional_email(value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if !value.is_empty() && !(value.contains('@') && value.contains('.')) {
        return Err(ValidationError::InvalidEmail {
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Entity Constructors
// =============================================================================

/// Validates and constructs a financial record.
///
/// Fails with `EmptyField` on a blank description and
/// `NonPositiveAmount` on an amount of zero or less.
pub fn validate_financial(
    date: NaiveDate,
    description: &str,
    amount: Money,
    kind: RecordKind,
) -> ValidationResult<FinancialRecord> {
    let description = required_text("description", description)?;
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(FinancialRecord {
        id: new_id(),
        date,
        description,
        amount,
        kind,
    })
}

/// Validates and constructs an inventory item.
///
/// Fails with `EmptyField` on a blank product name. Quantity and unit
/// price arrive range-constrained (non-negative) from the input
/// boundary and are not re-checked here; supplier may be empty.
pub fn validate_inventory(
    name: &str,
    quantity: i64,
    unit_price: Money,
    supplier: &str,
    last_updated: NaiveDate,
) -> ValidationResult<InventoryItem> {
    let name = required_text("product name", name)?;

    Ok(InventoryItem {
        id: new_id(),
        name,
        quantity,
        unit_price,
        supplier: supplier.trim().to_string(),
        last_updated,
    })
}

/// Validates and constructs a customer record.
///
/// Fails with `EmptyField` on a blank name, contact number, or address,
/// and with `InvalidEmail` on a non-empty email missing `@` or `.`.
pub fn validate_customer(
    name: &str,
    contact_number: &str,
    address: &str,
    email: &str,
) -> ValidationResult<Customer> {
    let name = required_text("customer name", name)?;
    let contact_number = required_text("contact number", contact_number)?;
    let address = required_text("address", address)?;
    let email = optional_email(email)?;

    Ok(Customer {
        id: new_id(),
        name,
        contact_number,
        address,
        email,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_financial_trims_and_constructs() {
        let record = validate_financial(
            day(2024, 1, 1),
            "  Girder sale  ",
            Money::from_paisa(50_000),
            RecordKind::Income,
        )
        .unwrap();
        assert_eq!(record.description, "Girder sale");
        assert_eq!(record.amount.paisa(), 50_000);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_financial_rejects_blank_description() {
        let err = validate_financial(
            day(2024, 1, 1),
            "   ",
            Money::from_paisa(100),
            RecordKind::Expense,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: "description"
            }
        );
    }

    #[test]
    fn test_financial_amount_bounds() {
        let zero = validate_financial(day(2024, 1, 1), "x", Money::zero(), RecordKind::Income);
        assert_eq!(zero.unwrap_err(), ValidationError::NonPositiveAmount);

        let negative = validate_financial(
            day(2024, 1, 1),
            "x",
            Money::from_paisa(-100),
            RecordKind::Income,
        );
        assert_eq!(negative.unwrap_err(), ValidationError::NonPositiveAmount);

        // One paisa is the smallest bookable amount.
        let smallest = validate_financial(
            day(2024, 1, 1),
            "x",
            "0.01".parse().unwrap(),
            RecordKind::Income,
        );
        assert!(smallest.is_ok());
    }

    #[test]
    fn test_inventory_requires_name_only() {
        let err =
            validate_inventory("", 5, Money::from_paisa(100), "Any", day(2024, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyField {
                field: "product name"
            }
        );

        // Supplier may be blank, and zero quantity/price are acceptable.
        let item = validate_inventory("Angle iron", 0, Money::zero(), "  ", day(2024, 1, 1));
        let item = item.unwrap();
        assert_eq!(item.supplier, "");
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_customer_required_fields() {
        for (name, contact, address, field) in [
            ("", "0300", "Lahore", "customer name"),
            ("Asad", " ", "Lahore", "contact number"),
            ("Asad", "0300", "", "address"),
        ] {
            let err = validate_customer(name, contact, address, "").unwrap_err();
            assert_eq!(err, ValidationError::EmptyField { field });
        }
    }

    #[test]
    fn test_customer_email_shape() {
        // Missing the dot.
        let err = validate_customer("Asad", "0300", "Lahore", "a@b").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail { .. }));

        // Missing the at sign.
        assert!(validate_customer("Asad", "0300", "Lahore", "a.b").is_err());

        // Both present.
        let ok = validate_customer("Asad", "0300", "Lahore", "a@b.c").unwrap();
        assert_eq!(ok.email, "a@b.c");

        // Email is optional.
        let none = validate_customer("Asad", "0300", "Lahore", "").unwrap();
        assert_eq!(none.email, "");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = validate_customer("A", "1", "x", "").unwrap();
        let b = validate_customer("A", "1", "x", "").unwrap();
        assert_ne!(a.id, b.id);
    }
}
