//! # HTTP Routes
//!
//! Route registration for the Tally API.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                    Handler                    Status      │
//! │  ──────  ──────────────────────  ─────────────────────────  ──────────  │
//! │  POST    /receipts/process       receipts::process_receipt  200/400     │
//! │  GET     /receipts/:id/points    receipts::get_points       200/404     │
//! │  GET     /health                 health::health_check       200         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod health;
pub mod receipts;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Builds the application router with all routes registered.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(receipts::process_receipt))
        .route("/receipts/:id/points", get(receipts::get_points))
        .route("/health", get(health::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
