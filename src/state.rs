use crate::client::HttpBackend;
use crate::tracker::Tracker;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker<HttpBackend>>,
}

impl AppState {
    pub fn new(tracker: Arc<Tracker<HttpBackend>>) -> Self {
        Self { tracker }
    }
}
