mod actions;
mod health;
mod metrics;

pub use actions::{count_handler, record_handler};
pub use health::health_handler;
pub use metrics::metrics_handler;
