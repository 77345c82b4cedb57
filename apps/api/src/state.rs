//! # Application State
//!
//! Shared state handed to every route handler.
//!
//! ## Thread Safety
//! axum clones the state for each handler invocation, so `AppState` must be
//! cheap to clone. The score store sits behind an `Arc`; every clone points
//! at the same underlying map.

use std::sync::Arc;

use tally_core::ScoreStore;

/// Shared application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Receipt identifier → points mapping
    pub scores: Arc<ScoreStore>,
}

impl AppState {
    /// Creates fresh state with an empty score store.
    pub fn new() -> Self {
        AppState {
            scores: Arc::new(ScoreStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new();
        let clone = state.clone();

        state.scores.put("receipt-1".to_string(), 28);

        assert_eq!(clone.scores.get("receipt-1"), Some(28));
    }
}
