//! # Receipt Routes
//!
//! Handlers for receipt processing and points lookup.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               POST /receipts/process                                    │
//! │                                                                         │
//! │  JSON body ──► decode ──► validate ──► calculate ──► store ──► { id }  │
//! │                  │            │                                         │
//! │                  │            └── 400 INVALID_RECEIPT_DATA              │
//! │                  └── 400 INVALID_RECEIPT_FORMAT                         │
//! │                                                                         │
//! │               GET /receipts/:id/points                                  │
//! │                                                                         │
//! │  id ──► store lookup ──► { points }                                     │
//! │               │                                                         │
//! │               └── 404 RECEIPT_NOT_FOUND                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use tally_core::{calculate_points, validate_receipt, Points, Receipt};

use crate::error::ApiError;
use crate::state::AppState;

/// Response for a successfully processed receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Identifier under which the points were stored.
    pub id: String,
}

/// Response for a points lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    /// Points awarded to the receipt.
    pub points: Points,
}

/// Handles `POST /receipts/process`.
///
/// Decodes the body into a receipt, validates it, scores it, stores the
/// score under a freshly generated identifier, and returns the identifier.
///
/// ## Errors
/// - `400 INVALID_RECEIPT_FORMAT` when the body is not a decodable receipt
/// - `400 INVALID_RECEIPT_DATA` when the receipt fails validation
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|err| {
        debug!("receipt body rejected: {}", err);
        ApiError::invalid_format()
    })?;

    validate_receipt(&receipt)?;

    let points = calculate_points(&receipt);
    let id = Uuid::new_v4().to_string();
    state.scores.put(id.clone(), points);

    info!(%id, points, retailer = %receipt.retailer, "receipt processed");

    Ok(Json(ProcessResponse { id }))
}

/// Handles `GET /receipts/:id/points`.
///
/// ## Errors
/// - `404 RECEIPT_NOT_FOUND` when the identifier was never stored
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    debug!(%id, "points lookup");

    match state.scores.get(&id) {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => Err(ApiError::not_found()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{Request, StatusCode};
    use tally_core::Item;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
            total: "9.00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_process_then_lookup_round_trips() {
        let state = AppState::new();

        let Json(processed) =
            process_receipt(State(state.clone()), Ok(Json(corner_market_receipt())))
                .await
                .unwrap();
        assert!(!processed.id.is_empty());

        let Json(looked_up) = get_points(State(state), Path(processed.id))
            .await
            .unwrap();
        assert_eq!(looked_up.points, 109);
    }

    #[tokio::test]
    async fn test_process_rejects_invalid_receipt() {
        let state = AppState::new();
        let mut receipt = corner_market_receipt();
        receipt.retailer = String::new();

        let err = process_receipt(State(state.clone()), Ok(Json(receipt)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidReceiptData);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        // Nothing is stored for a rejected receipt.
        assert_eq!(state.scores.record_count(), 0);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_a_format_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let rejection = Json::<Receipt>::from_request(request, &())
            .await
            .unwrap_err();

        let state = AppState::new();
        let err = process_receipt(State(state.clone()), Err(rejection))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidReceiptFormat);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.scores.record_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_unknown_id_is_not_found() {
        let state = AppState::new();

        let err = get_points(State(state), Path("never-stored".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ReceiptNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_each_process_call_generates_fresh_id() {
        let state = AppState::new();

        let Json(first) = process_receipt(State(state.clone()), Ok(Json(corner_market_receipt())))
            .await
            .unwrap();
        let Json(second) = process_receipt(State(state.clone()), Ok(Json(corner_market_receipt())))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(state.scores.record_count(), 2);
    }
}
