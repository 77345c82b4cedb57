//! # Tally API
//!
//! HTTP server exposing the receipt points service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally API Layers                               │
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  routes    POST /receipts/process   GET /receipts/:id/points   │    │
//! │  │            GET  /health                                        │    │
//! │  └───────────────────────────────┬────────────────────────────────┘    │
//! │                                  │                                      │
//! │  ┌───────────────────────────────▼────────────────────────────────┐    │
//! │  │  state     AppState { scores: Arc<ScoreStore> }                │    │
//! │  └───────────────────────────────┬────────────────────────────────┘    │
//! │                                  │                                      │
//! │  ┌───────────────────────────────▼────────────────────────────────┐    │
//! │  │  tally-core    validate_receipt ──► calculate_points           │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_LISTEN_ADDR` - listen address (default: 0.0.0.0)
//! - `HTTP_PORT` - HTTP server port (default: 8080)
//! - `RUST_LOG` - tracing filter (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ErrorCode};
pub use state::AppState;
