//! 传输层：资源客户端借用的 HTTP 能力。
//!
//! Transport capability borrowed by every resource client.
//!
//! The transport owns connection handling, authentication headers and query
//! serialization. Resource clients only decide the method, the path, the query
//! pairs and the body.

mod http;
mod memory;

pub use http::{join_url, HttpTransport};
pub use memory::{RecordedRequest, RecordingTransport};

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A flattened query string: ordered `(key, value)` pairs, keys may repeat.
pub type QueryPairs = Vec<(String, String)>;

/// The four verbs a resource client needs from the host's HTTP client.
///
/// Implementations must be cheap to share; clients hold `&dyn Transport`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;
    async fn put(&self, path: &str, body: &Value) -> Result<Value>;
    async fn delete(&self, path: &str) -> Result<Value>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
