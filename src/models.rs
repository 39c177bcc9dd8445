use serde::{Deserialize, Serialize};

// POST /api/actions body, timestamp defaults to now
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct RecordRequest {
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct RecordResponse {
    pub timestamp: i64,
}

// GET /api/actions/count query string
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct CountQuery {
    pub timestamp: Option<i64>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CountResponse {
    pub timestamp: i64,
    pub window_secs: i64,
    pub count: u64,
}

// Current UNIX time in seconds
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}
