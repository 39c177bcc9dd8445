//! Sliding-window action counting: how many actions happened in the 300 seconds
//! ending at a given timestamp. [`ActionCounter`] is the core; the rest wires one
//! counter into a small HTTP service.

pub mod config;
pub mod counter;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod state;
pub mod telemetry;

use axum::{Router, routing::{get, post}};
use std::sync::Arc;

pub use counter::{ActionCounter, WINDOW_SECS};
use crate::handlers::{count_handler, health_handler, metrics_handler, record_handler};
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/actions", post(record_handler))
        .route("/api/actions/count", get(count_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
