use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref ACTIONS_RECORDED: Counter =
        register_counter!("action_counter_actions_recorded_total", "Total number of recorded actions")
            .expect("register action_counter_actions_recorded_total");
    pub static ref WINDOW_QUERIES: Counter =
        register_counter!("action_counter_window_queries_total", "Total number of window count queries")
            .expect("register action_counter_window_queries_total");
    pub static ref DISTINCT_TIMESTAMPS: Gauge = register_gauge!(
        "action_counter_distinct_timestamps",
        "Number of distinct timestamps held by the counter"
    )
    .expect("register action_counter_distinct_timestamps");
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "action_counter_request_latency_seconds",
        "Request latency in seconds"
    )
    .expect("register action_counter_request_latency_seconds");
}
