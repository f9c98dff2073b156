use super::Transport;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

/// One request as seen by a [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

enum Reply {
    Ok(Value),
    Remote { status: u16, message: String },
}

/// In-memory transport for testing.
///
/// Records every request and answers from a FIFO of canned replies; once the
/// queue is empty every call resolves to `Value::Null`.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    replies: Arc<RwLock<VecDeque<Reply>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, value: Value) -> &Self {
        self.replies.write().unwrap().push_back(Reply::Ok(value));
        self
    }

    pub fn push_error(&self, status: u16, message: impl Into<String>) -> &Self {
        self.replies.write().unwrap().push_back(Reply::Remote {
            status,
            message: message.into(),
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.read().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.requests.write().unwrap().clear();
        self.replies.write().unwrap().clear();
    }

    fn record(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        self.requests.write().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            query: query.to_vec(),
            body: body.cloned(),
        });
        match self.replies.write().unwrap().pop_front() {
            Some(Reply::Ok(value)) => Ok(value),
            Some(Reply::Remote { status, message }) => Err(Error::Remote { status, message }),
            None => Ok(Value::Null),
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.record(Method::GET, path, query, None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.record(Method::POST, path, &[], Some(body))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.record(Method::PUT, path, &[], Some(body))
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.record(Method::DELETE, path, &[], None)
    }
}
