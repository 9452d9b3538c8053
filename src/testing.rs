// In-memory stand-ins for the store capabilities plus a small request helper

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::error::StoreError;
use crate::state::AppState;
use crate::store::{KeyValueStore, RelationalStore, SqlParams};

/// Counter store backed by a `HashMap`, optionally failing every call.
#[derive(Default)]
pub struct InMemoryCounters {
    values: Mutex<HashMap<String, i64>>,
    calls: AtomicUsize,
    failure: Option<String>,
}

impl InMemoryCounters {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryCounters {
    async fn incr_by(&self, key: &str, delta: i64) -> Result<i64, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.failure {
            return Err(StoreError::key_value(message.clone()));
        }

        let mut values = self.values.lock().unwrap();
        let current = values.entry(key.to_string()).or_insert(0);
        *current = current
            .checked_add(delta)
            .ok_or_else(|| StoreError::key_value("increment or decrement would overflow"))?;
        Ok(*current)
    }
}

/// Relational store that records every statement it receives and hands out
/// sequential ids from `query_scalar`.
#[derive(Default)]
pub struct RecordingDatabase {
    statements: Mutex<Vec<String>>,
    params: Mutex<Vec<Vec<String>>>,
    next_id: AtomicI64,
    execute_failure: Option<String>,
    query_failure: Option<String>,
}

impl RecordingDatabase {
    pub fn failing_execute(message: &str) -> Self {
        Self {
            execute_failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_query(message: &str) -> Self {
        Self {
            query_failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn params(&self) -> Vec<Vec<String>> {
        self.params.lock().unwrap().clone()
    }

    fn record(&self, statement: &str, params: SqlParams<'_>) {
        self.statements.lock().unwrap().push(statement.to_string());
        self.params
            .lock()
            .unwrap()
            .push(params.iter().map(|p| format!("{:?}", p)).collect());
    }
}

#[async_trait]
impl RelationalStore for RecordingDatabase {
    async fn execute(&self, statement: &str, params: SqlParams<'_>) -> Result<u64, StoreError> {
        self.record(statement, params);

        match self.execute_failure {
            Some(ref message) => Err(StoreError::relational(message.clone())),
            None => Ok(0),
        }
    }

    async fn query_scalar(&self, statement: &str, params: SqlParams<'_>) -> Result<i64, StoreError> {
        self.record(statement, params);

        match self.query_failure {
            Some(ref message) => Err(StoreError::relational(message.clone())),
            None => Ok(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
        }
    }
}

pub fn state_with(counters: Arc<InMemoryCounters>, database: Arc<RecordingDatabase>) -> AppState {
    AppState::new(counters, database)
}

pub fn default_state() -> AppState {
    state_with(
        Arc::new(InMemoryCounters::default()),
        Arc::new(RecordingDatabase::default()),
    )
}

/// Sends `body` as a JSON POST through the router and returns the status and
/// the parsed JSON response.
pub async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}
