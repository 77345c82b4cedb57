//! # Score Store
//!
//! In-memory mapping from receipt identifier to awarded points.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Score Store Operations                               │
//! │                                                                         │
//! │  HTTP Request              Handler                Store Change          │
//! │  ────────────              ───────                ────────────          │
//! │                                                                         │
//! │  POST /receipts/process ─► process_receipt() ───► put(id, points)      │
//! │                                                                         │
//! │  GET /receipts/:id/points► get_points() ────────► get(id)  (read only) │
//! │                                                                         │
//! │  Records are written once and never mutated or deleted afterwards.      │
//! │  Everything lives in process memory for the process lifetime.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The map is wrapped in a `Mutex` because handlers run concurrently and
//! every read and write must be mutually exclusive with every other.
//!
//! ## Why Not RwLock?
//! Both operations are single map lookups that hold the lock for nanoseconds.
//! A RwLock would add complexity with minimal benefit at this scale.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::Points;

/// Thread-safe identifier → points mapping.
///
/// Constructed once at startup and shared by reference (typically behind
/// an `Arc`) with every request handler.
#[derive(Debug, Default)]
pub struct ScoreStore {
    scores: Mutex<HashMap<String, Points>>,
}

impl ScoreStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        ScoreStore {
            scores: Mutex::new(HashMap::new()),
        }
    }

    /// Records the points for an identifier.
    ///
    /// ## Behavior
    /// - Inserts the record, overwriting any previous value for the same
    ///   identifier. Uniqueness is the identifier generator's concern.
    pub fn put(&self, id: String, points: Points) {
        let mut scores = self.scores.lock().expect("Score store mutex poisoned");
        scores.insert(id, points);
    }

    /// Looks up the points for an identifier.
    ///
    /// Returns `None` when the identifier has never been stored.
    pub fn get(&self, id: &str) -> Option<Points> {
        let scores = self.scores.lock().expect("Score store mutex poisoned");
        scores.get(id).copied()
    }

    /// Returns the number of stored records.
    pub fn record_count(&self) -> usize {
        let scores = self.scores.lock().expect("Score store mutex poisoned");
        scores.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
