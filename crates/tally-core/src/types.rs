//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Receipt        │        │        Item         │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  retailer           │ 1    * │  short_description  │                │
//! │  │  purchase_date      ├───────►│  price              │                │
//! │  │  purchase_time      │        └─────────────────────┘                │
//! │  │  items              │                                               │
//! │  │  total              │        ┌─────────────────────┐                │
//! │  └─────────────────────┘        │       Points        │                │
//! │                                 │  ─────────────────  │                │
//! │                                 │  u64 (never neg.)   │                │
//! │                                 └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Text-First Fields
//! Every scalar field on a receipt is kept as the text the client sent.
//! Dates, times, and amounts are parsed on demand by [`crate::validation`]
//! and [`crate::points`], so a field that fails to parse can degrade a
//! single rule instead of poisoning the whole document.

use serde::{Deserialize, Serialize};

// =============================================================================
// Points
// =============================================================================

/// Reward points awarded to a processed receipt.
///
/// Every rule contributes a non-negative amount, so the total is unsigned.
pub type Points = u64;

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt submitted for points processing.
///
/// ## Wire Format
/// Serialized with camelCase keys:
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
///   "total": "35.35"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name as printed on the receipt.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time of day, 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Purchased line items. Must contain at least one entry to validate.
    pub items: Vec<Item>,

    /// Grand total as a decimal string, e.g. `"35.35"`.
    pub total: String,
}

// =============================================================================
// Item
// =============================================================================

/// One line item on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Product description as printed on the receipt.
    pub short_description: String,

    /// Line price as a decimal string, e.g. `"6.49"`.
    pub price: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price, "6.49");
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_receipt_rejects_missing_fields() {
        // A body without `total` must fail to decode rather than default.
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": []
        }"#;

        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Gatorade".to_string(),
                price: "2.25".to_string(),
            }],
            total: "2.25".to_string(),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["purchaseDate"], "2022-01-01");
        assert_eq!(json["items"][0]["shortDescription"], "Gatorade");
    }
}
