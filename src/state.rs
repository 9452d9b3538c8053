use std::sync::Arc;

use crate::store::{KeyValueStore, RelationalStore};

/// Store handles shared by every request. Built once at startup and cloned
/// into each handler by axum.
#[derive(Clone)]
pub struct AppState {
    pub counters: Arc<dyn KeyValueStore>,
    pub database: Arc<dyn RelationalStore>,
}

impl AppState {
    pub fn new(counters: Arc<dyn KeyValueStore>, database: Arc<dyn RelationalStore>) -> Self {
        Self { counters, database }
    }
}
