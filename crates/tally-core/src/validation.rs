//! # Validation Module
//!
//! Receipt acceptance rules for Tally.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP API (apps/api)                                           │
//! │  ├── JSON shape checks (deserialization)                                │
//! │  └── Missing/mistyped fields rejected as format errors                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── retailer: non-empty, allow-listed characters                       │
//! │  ├── items: at least one, each item well-formed                         │
//! │  └── price: parses as a decimal, strictly positive                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Points Rules (crate::points)                                  │
//! │  └── Assume a validated receipt; unparsable date/time/total             │
//! │      degrade single rules to zero instead of erroring                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `purchaseDate`, `purchaseTime`, and `total` are not format-checked here.
//! A receipt whose date, time, or total fails to parse still validates; each
//! points rule reading one of those fields scores zero when it cannot parse.
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::validate_receipt;
//!
//! # let receipt = tally_core::Receipt {
//! #     retailer: "Target".to_string(),
//! #     purchase_date: "2022-01-01".to_string(),
//! #     purchase_time: "13:01".to_string(),
//! #     items: vec![tally_core::Item {
//! #         short_description: "Gatorade".to_string(),
//! #         price: "2.25".to_string(),
//! #     }],
//! #     total: "2.25".to_string(),
//! # };
//! // Validate before scoring
//! validate_receipt(&receipt)?;
//! # Ok::<(), tally_core::ValidationError>(())
//! ```

use crate::error::ValidationError;
use crate::types::{Item, Receipt};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Character Allow-Lists
// =============================================================================

/// Characters permitted in a retailer name: ASCII letters, digits,
/// underscores, whitespace, hyphens, and ampersands.
fn is_retailer_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace() || c == '-' || c == '&'
}

/// Characters permitted in an item description: ASCII letters, digits,
/// underscores, whitespace, and hyphens. No ampersand, unlike retailers.
fn is_description_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace() || c == '-'
}

// =============================================================================
// Amount Parsing
// =============================================================================

/// Parses a textual monetary amount into a float.
///
/// Returns `None` when the text is not float-parseable or parses to a
/// non-finite value (infinities and NaN are not monetary amounts).
pub(crate) fn parse_amount(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

// =============================================================================
// Receipt Validators
// =============================================================================

/// Validates a single line item.
///
/// ## Rules
/// - `shortDescription` must be non-empty and allow-listed
/// - `price` must parse as a decimal number
/// - `price` must be strictly positive
///
/// ## Example
/// ```rust
/// use tally_core::types::Item;
/// use tally_core::validation::validate_item;
///
/// let item = Item {
///     short_description: "Mountain Dew 12PK".to_string(),
///     price: "6.49".to_string(),
/// };
/// assert!(validate_item(&item).is_ok());
/// ```
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    if item.short_description.is_empty() {
        return Err(ValidationError::Required {
            field: "shortDescription".to_string(),
        });
    }

    if !item.short_description.chars().all(is_description_char) {
        return Err(ValidationError::InvalidFormat {
            field: "shortDescription".to_string(),
            reason: "must contain only letters, numbers, underscores, whitespace, and hyphens"
                .to_string(),
        });
    }

    match parse_amount(&item.price) {
        None => Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a decimal number".to_string(),
        }),
        Some(price) if price <= 0.0 => Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Validates a whole receipt.
///
/// ## Rules
/// - `retailer` must be non-empty and allow-listed
/// - `items` must contain at least one entry
/// - Every item must pass [`validate_item`]
///
/// `purchaseDate`, `purchaseTime`, and `total` are intentionally left
/// unchecked; see the module docs.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    if receipt.retailer.is_empty() {
        return Err(ValidationError::Required {
            field: "retailer".to_string(),
        });
    }

    if !receipt.retailer.chars().all(is_retailer_char) {
        return Err(ValidationError::InvalidFormat {
            field: "retailer".to_string(),
            reason: "must contain only letters, numbers, underscores, whitespace, hyphens, and ampersands"
                .to_string(),
        });
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for item in &receipt.items {
        validate_item(item)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn test_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![item("Gatorade", "2.25")],
            total: "2.25".to_string(),
        }
    }

    #[test]
    fn test_validate_receipt_accepts_typical() {
        assert!(validate_receipt(&test_receipt()).is_ok());
    }

    #[test]
    fn test_validate_receipt_requires_retailer() {
        let mut receipt = test_receipt();
        receipt.retailer = String::new();

        let err = validate_receipt(&receipt).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_validate_receipt_retailer_charset() {
        let mut receipt = test_receipt();

        receipt.retailer = "Target".to_string();
        assert!(validate_receipt(&receipt).is_ok());

        receipt.retailer = "A&W_Store - 7".to_string();
        assert!(validate_receipt(&receipt).is_ok());

        receipt.retailer = "Target!".to_string();
        assert!(validate_receipt(&receipt).is_err());

        receipt.retailer = "Café".to_string();
        assert!(validate_receipt(&receipt).is_err());
    }

    #[test]
    fn test_validate_receipt_requires_items() {
        let mut receipt = test_receipt();
        receipt.items.clear();

        let err = validate_receipt(&receipt).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_validate_receipt_rejects_invalid_item() {
        let mut receipt = test_receipt();
        receipt.items.push(item("Gatorade", "not-a-price"));

        assert!(validate_receipt(&receipt).is_err());
    }

    #[test]
    fn test_validate_item_requires_description() {
        let err = validate_item(&item("", "2.25")).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_validate_item_description_charset() {
        assert!(validate_item(&item("Emils Cheese Pizza", "12.25")).is_ok());
        assert!(validate_item(&item("Klarbrunn 12-PK 12 FL OZ", "12.00")).is_ok());
        assert!(validate_item(&item("protein_bar", "1.00")).is_ok());

        // Ampersand is allowed for retailers but not item descriptions.
        assert!(validate_item(&item("Chips & Dip", "3.50")).is_err());
        assert!(validate_item(&item("Pizza!", "12.25")).is_err());
    }

    #[test]
    fn test_validate_item_whitespace_only_description_passes() {
        // Whitespace is allow-listed, so a blank-but-nonempty description
        // is accepted.
        assert!(validate_item(&item("   ", "2.25")).is_ok());
    }

    #[test]
    fn test_validate_item_price_must_parse() {
        let err = validate_item(&item("Gatorade", "abc")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        assert!(validate_item(&item("Gatorade", "")).is_err());
        assert!(validate_item(&item("Gatorade", "12..3")).is_err());
        assert!(validate_item(&item("Gatorade", "$2.25")).is_err());
    }

    #[test]
    fn test_validate_item_price_must_be_positive() {
        let err = validate_item(&item("Gatorade", "0.00")).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));

        assert!(validate_item(&item("Gatorade", "0")).is_err());
        assert!(validate_item(&item("Gatorade", "-1.25")).is_err());
    }

    #[test]
    fn test_validate_item_rejects_nonfinite_price() {
        assert!(validate_item(&item("Gatorade", "NaN")).is_err());
        assert!(validate_item(&item("Gatorade", "inf")).is_err());
        assert!(validate_item(&item("Gatorade", "-inf")).is_err());
    }

    #[test]
    fn test_validate_item_accepts_positive_price() {
        assert!(validate_item(&item("Gatorade", "0.01")).is_ok());
        assert!(validate_item(&item("Gatorade", "6.49")).is_ok());

        // Any float-parseable form is tolerated, including exponents.
        assert!(validate_item(&item("Gatorade", "1e2")).is_ok());
    }

    #[test]
    fn test_unparsable_date_time_and_total_still_validate() {
        let mut receipt = test_receipt();
        receipt.purchase_date = "01/02/2022".to_string();
        receipt.purchase_time = "99:99".to_string();
        receipt.total = "not-a-number".to_string();

        assert!(validate_receipt(&receipt).is_ok());
    }
}
