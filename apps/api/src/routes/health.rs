//! # Health Route
//!
//! Liveness probe for deployments and smoke tests.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,

    /// Number of receipts scored since startup.
    pub stored_receipts: usize,
}

/// Handles `GET /health`.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        stored_receipts: state.scores.record_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_store_size() {
        let state = AppState::new();
        state.scores.put("receipt-1".to_string(), 28);

        let Json(health) = health_check(State(state)).await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.stored_receipts, 1);
    }
}
