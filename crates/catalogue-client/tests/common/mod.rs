//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use catalogue_client::{CatalogueError, Operation, QueryDocument, Result, Transport};
use serde_json::{Value, json};

/// A request as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: Operation,
    pub variables: Option<Value>,
}

/// Answers requests from a queue of scripted responses and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, data: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(data));
        self
    }

    pub fn fail(self, error: CatalogueError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_variables(&self) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .and_then(|call| call.variables.clone())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, document: &QueryDocument, variables: Option<Value>) -> Result<Value> {
        let call = RecordedCall {
            operation: document.operation,
            variables,
        };
        self.calls.lock().unwrap().push(call);
        let next = self.responses.lock().unwrap().pop_front();
        let exhausted = CatalogueError::Transport("no scripted response".to_string());
        next.unwrap_or(Err(exhausted))
    }
}

pub fn lifecycle_json() -> Value {
    json!({"resource": {"acronym": "LifeCycle"}, "version": "1.0.0"})
}

pub fn variables_data(names: &[&str], count: u64) -> Value {
    let variables: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "release": lifecycle_json(),
                "label": format!("{name} label"),
                "repeats": []
            })
        })
        .collect();
    json!({"Variables": variables, "Variables_agg": {"count": count}})
}
