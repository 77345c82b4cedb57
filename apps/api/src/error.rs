//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Error Flow in Tally                               │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<Json<T>, ApiError>                              │  │
//! │  │         │                                                        │  │
//! │  │  Body fails to decode? ── INVALID_RECEIPT_FORMAT (400) ────────► │  │
//! │  │         │                                                        │  │
//! │  │  ValidationError? ─────── INVALID_RECEIPT_DATA (400) ──────────► │  │
//! │  │         │                                                        │  │
//! │  │  Store lookup miss? ───── RECEIPT_NOT_FOUND (404) ─────────────► │  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Errors serialize with a machine-readable `code` and a stable
//! human-readable `message`. The message text is part of the API contract,
//! so field-level validation detail goes to the logs, not the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tally_core::ValidationError;

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "RECEIPT_NOT_FOUND",
///   "message": "Receipt not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body could not be decoded as a receipt (400)
    InvalidReceiptFormat,

    /// Receipt decoded but failed validation (400)
    InvalidReceiptData,

    /// Identifier has no stored points (404)
    ReceiptNotFound,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// The request body was not a decodable receipt.
    pub fn invalid_format() -> Self {
        ApiError::new(ErrorCode::InvalidReceiptFormat, "Invalid receipt format")
    }

    /// The receipt decoded but failed the acceptance rules.
    pub fn invalid_data() -> Self {
        ApiError::new(ErrorCode::InvalidReceiptData, "Invalid receipt data")
    }

    /// No points are stored under the requested identifier.
    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::ReceiptNotFound, "Receipt not found")
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidReceiptFormat | ErrorCode::InvalidReceiptData => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::ReceiptNotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        // Log the precise rule that failed; clients get the stable message.
        tracing::debug!("receipt validation failed: {}", err);
        ApiError::invalid_data()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
