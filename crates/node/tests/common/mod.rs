//! Shared test doubles for the dispatcher and request-table tests.
#![allow(dead_code)] // not every test binary uses every helper

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use helium_node::{HttpClient, ParameterResolver, RequestSpec, TransportFailure};

/// In-memory parameter resolver: the same named values for every item.
#[derive(Debug, Default)]
pub struct MapResolver {
    values: HashMap<String, Value>,
}

impl MapResolver {
    pub fn new(pairs: &[(&str, Value)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.clone()))
                .collect(),
        }
    }
}

impl ParameterResolver for MapResolver {
    fn resolve(&self, key: &str, _item_index: usize) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

/// Scripted HTTP client: pops one queued result per call and records
/// every spec it was sent.
#[derive(Default)]
pub struct StubClient {
    results: Mutex<VecDeque<Result<Value, TransportFailure>>>,
    sent: Mutex<Vec<RequestSpec>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, value: Value) -> Self {
        self.results.lock().unwrap().push_back(Ok(value));
        self
    }

    pub fn fail(self, failure: TransportFailure) -> Self {
        self.results.lock().unwrap().push_back(Err(failure));
        self
    }

    /// Every spec sent so far, in order.
    pub fn sent(&self) -> Vec<RequestSpec> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubClient {
    async fn send(&self, spec: &RequestSpec) -> Result<Value, TransportFailure> {
        self.sent.lock().unwrap().push(spec.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Null))
    }
}
