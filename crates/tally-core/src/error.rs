//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                          │
//! │  └── ValidationError  - Receipt/item validation failures                │
//! │                                                                         │
//! │  HTTP API errors (in apps/api)                                          │
//! │  └── ApiError         - What clients see (serialized)                   │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → HTTP response                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, reason)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation errors.
///
/// These errors occur when a decoded receipt doesn't meet the acceptance
/// rules. The field names in messages use the wire-format spelling
/// (`shortDescription`, not `short_description`) so they line up with the
/// payload the client actually sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value contains characters outside its allow-list, or fails
    /// to parse under its expected format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "retailer".to_string(),
        };
        assert_eq!(err.to_string(), "retailer is required");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a decimal number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "price has invalid format: must be a decimal number"
        );

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
    }
}
