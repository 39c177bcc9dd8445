use axum::{Json, extract::{Query, State}, http::StatusCode};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use crate::counter::WINDOW_SECS;
use crate::metrics::{ACTIONS_RECORDED, DISTINCT_TIMESTAMPS, REQUEST_LATENCY, WINDOW_QUERIES};
use crate::models::{CountQuery, CountResponse, RecordRequest, RecordResponse, now_secs};
use crate::state::AppState;

pub async fn record_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RecordRequest>,
) -> (StatusCode, Json<RecordResponse>) {
    let start_time = Instant::now();
    let timestamp = payload.timestamp.unwrap_or_else(now_secs);

    let distinct = {
        let mut counter = state.counter.lock().await;
        counter.record(timestamp);
        counter.distinct_timestamps()
    };

    ACTIONS_RECORDED.inc();
    DISTINCT_TIMESTAMPS.set(distinct as f64);
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    debug!(timestamp, distinct, "action recorded");

    (StatusCode::CREATED, Json(RecordResponse { timestamp }))
}

pub async fn count_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountQuery>,
) -> Json<CountResponse> {
    let start_time = Instant::now();
    let timestamp = query.timestamp.unwrap_or_else(now_secs);

    let count = state.counter.lock().await.count_in_window(timestamp);

    WINDOW_QUERIES.inc();
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    debug!(timestamp, count, "window queried");

    Json(CountResponse {
        timestamp,
        window_secs: WINDOW_SECS,
        count,
    })
}
