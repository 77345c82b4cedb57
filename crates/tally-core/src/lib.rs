//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains all receipt-points
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      HTTP Clients                               │   │
//! │  │    POST /receipts/process ──► GET /receipts/:id/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum)                               │   │
//! │  │    routing, decoding, identifier generation, error mapping      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │  points   │  │   store   │  │   │
//! │  │   │  Receipt  │  │  receipt  │  │   rules   │  │ScoreStore │  │   │
//! │  │   │   Item    │  │   item    │  │  engine   │  │ id→points │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS + ONE GUARDED MAP       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, Points)
//! - [`validation`] - Receipt acceptance rules
//! - [`points`] - The points rules engine
//! - [`store`] - Thread-safe score storage
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Validation and scoring are deterministic - same
//!    input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Fail-Soft Scoring**: A validated receipt always scores; unparsable
//!    fields degrade single rules to zero instead of erroring
//! 4. **Explicit Errors**: Validation failures are typed, never strings or
//!    panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{calculate_points, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item {
//!         short_description: "Mountain Dew 12PK".to_string(),
//!         price: "6.49".to_string(),
//!     }],
//!     total: "6.49".to_string(),
//! };
//!
//! // Validate first, then score.
//! validate_receipt(&receipt)?;
//! let points = calculate_points(&receipt);
//!
//! // 6 retailer characters + 6 for the odd purchase day = 12
//! assert_eq!(points, 12);
//! # Ok::<(), tally_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod points;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Receipt` instead of
// `use tally_core::types::Receipt`

pub use error::ValidationError;
pub use points::calculate_points;
pub use store::ScoreStore;
pub use types::{Item, Points, Receipt};
pub use validation::{validate_item, validate_receipt, ValidationResult};
