use tokio::sync::Mutex;
use crate::counter::ActionCounter;

// app's shared state
// the counter has no locking of its own, every handler goes through this mutex
#[derive(Debug, Default)]
pub struct AppState {
    pub counter: Mutex<ActionCounter>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
