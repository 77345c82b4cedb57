//! # Points Rules
//!
//! The rules engine that turns a validated receipt into reward points.
//!
//! ## Rule Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Points Rules                                    │
//! │                                                                         │
//! │  Rule                    Condition                         Award        │
//! │  ──────────────────────  ────────────────────────────────  ──────────   │
//! │  Retailer name           per alphanumeric character        +1 each      │
//! │  Round dollar total      total is a whole amount           +50          │
//! │  Quarter multiple total  total divides evenly by $0.25     +25          │
//! │  Item pairs              per two items                     +5 per pair  │
//! │  Description length      trimmed length divisible by 3     ceil(p*0.2)  │
//! │  Odd purchase day        day-of-month is odd               +6           │
//! │  Afternoon purchase      hour in [14, 16)                  +10          │
//! │                                                                         │
//! │  Rules are independent and additive; the score is their sum.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail-Soft Parsing
//! Rules that read `total`, `purchaseDate`, or `purchaseTime` return an
//! optional contribution. A field that fails to parse makes its rules
//! contribute nothing; it never aborts the computation. Contributions
//! accumulate with saturating addition, so scoring always produces a
//! defined integer for a validated receipt, clamping at `Points::MAX`
//! instead of overflowing.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::types::{Item, Points, Receipt};
use crate::validation::parse_amount;

// =============================================================================
// Rule Constants
// =============================================================================

/// Award for a total with no fractional part.
pub const ROUND_DOLLAR_POINTS: Points = 50;

/// Award for a total that is a multiple of a quarter dollar.
pub const QUARTER_MULTIPLE_POINTS: Points = 25;

/// Award for each pair of items on the receipt.
pub const POINTS_PER_ITEM_PAIR: Points = 5;

/// Award when the day-of-month of the purchase date is odd.
pub const ODD_DAY_POINTS: Points = 6;

/// Award when the purchase time falls inside the afternoon window.
pub const AFTERNOON_POINTS: Points = 10;

/// Price multiplier for items with a qualifying description length.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Afternoon window start hour, inclusive (2:00 PM).
pub const AFTERNOON_START_HOUR: u32 = 14;

/// Afternoon window end hour, exclusive (4:00 PM).
pub const AFTERNOON_END_HOUR: u32 = 16;

const CENTS_PER_QUARTER: i64 = 25;

// =============================================================================
// Rule Evaluators
// =============================================================================

/// One point for every ASCII alphanumeric character in the retailer name.
fn retailer_name_points(retailer: &str) -> Points {
    retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as Points
}

/// Flat award when the total parses and is a whole-dollar amount.
///
/// Returns `None` when the total does not parse or has a fractional part.
fn round_dollar_points(total: &str) -> Option<Points> {
    let total = parse_amount(total)?;
    if total.fract() == 0.0 {
        Some(ROUND_DOLLAR_POINTS)
    } else {
        None
    }
}

/// Flat award when the total parses and is a multiple of a quarter dollar.
///
/// The amount is converted to whole cents by truncation before the
/// divisibility check.
fn quarter_multiple_points(total: &str) -> Option<Points> {
    let cents = parse_amount(total)? * 100.0;
    if cents as i64 % CENTS_PER_QUARTER == 0 {
        Some(QUARTER_MULTIPLE_POINTS)
    } else {
        None
    }
}

/// Flat award per pair of items; an odd item out contributes nothing.
fn item_pair_points(items: &[Item]) -> Points {
    (items.len() as Points / 2) * POINTS_PER_ITEM_PAIR
}

/// Per-item award for descriptions whose trimmed length divides by three.
///
/// Each qualifying item contributes `ceil(price * 0.2)` points. An item
/// whose price does not parse is skipped rather than failing the rule.
/// Validation accepts any finite positive price, so contributions are
/// clamped with saturating addition rather than summed.
fn description_length_points(items: &[Item]) -> Points {
    items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .filter_map(|item| parse_amount(&item.price))
        .map(|price| (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as Points)
        .fold(0, Points::saturating_add)
}

/// Shape gate for the fixed-width date grammar `YYYY-MM-DD`.
///
/// chrono alone tolerates unpadded numeric fields ("2022-1-3"); the wire
/// grammar is fixed-width.
fn is_date_shaped(text: &str) -> bool {
    text.len() == 10
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Shape gate for the fixed-width time grammar `HH:MM`.
fn is_time_shaped(text: &str) -> bool {
    text.len() == 5
        && text.bytes().enumerate().all(|(i, b)| match i {
            2 => b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Flat award when the purchase date parses and its day-of-month is odd.
///
/// Returns `None` unless the date is exactly `YYYY-MM-DD` and names a real
/// calendar day.
fn odd_day_points(purchase_date: &str) -> Option<Points> {
    if !is_date_shaped(purchase_date) {
        return None;
    }
    let date = NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d").ok()?;
    if date.day() % 2 == 1 {
        Some(ODD_DAY_POINTS)
    } else {
        None
    }
}

/// Flat award when the purchase time parses and falls inside the afternoon
/// window, 2:00 PM inclusive to 4:00 PM exclusive.
///
/// Returns `None` unless the time is exactly 24-hour `HH:MM`.
fn afternoon_points(purchase_time: &str) -> Option<Points> {
    if !is_time_shaped(purchase_time) {
        return None;
    }
    let time = NaiveTime::parse_from_str(purchase_time, "%H:%M").ok()?;
    let hour = time.hour();
    if hour >= AFTERNOON_START_HOUR && hour < AFTERNOON_END_HOUR {
        Some(AFTERNOON_POINTS)
    } else {
        None
    }
}

// =============================================================================
// Score Calculation
// =============================================================================

/// Calculates the reward points for a receipt.
///
/// Callers are expected to run [`crate::validation::validate_receipt`]
/// first; this function does not re-validate. It is deterministic and
/// total: every rule either contributes its award or nothing, so a score
/// is always produced. Accumulation saturates at `Points::MAX`.
///
/// ## Example
/// ```rust
/// use tally_core::points::calculate_points;
/// use tally_core::types::{Item, Receipt};
///
/// let gatorade = Item {
///     short_description: "Gatorade".to_string(),
///     price: "2.25".to_string(),
/// };
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     items: vec![gatorade; 4],
///     total: "9.00".to_string(),
/// };
///
/// // 14 retailer characters + 50 round dollar + 25 quarter multiple
/// // + 10 for two pairs + 10 for the afternoon purchase = 109
/// assert_eq!(calculate_points(&receipt), 109);
/// ```
pub fn calculate_points(receipt: &Receipt) -> Points {
    let mut points = retailer_name_points(&receipt.retailer);

    points = points.saturating_add(round_dollar_points(&receipt.total).unwrap_or(0));
    points = points.saturating_add(quarter_multiple_points(&receipt.total).unwrap_or(0));
    points = points.saturating_add(item_pair_points(&receipt.items));
    points = points.saturating_add(description_length_points(&receipt.items));
    points = points.saturating_add(odd_day_points(&receipt.purchase_date).unwrap_or(0));
    points = points.saturating_add(afternoon_points(&receipt.purchase_time).unwrap_or(0));

    points
}

// =============================================================================
// Unit Tests
// =============================================================================
