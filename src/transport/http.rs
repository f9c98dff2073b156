use super::{Transport, TransportError};
use crate::config::ClientConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use keyring::Entry;
use reqwest::{Method, Proxy};
use serde_json::Value;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

const KEYRING_SERVICE: &str = "dispatch";
const KEYRING_USER: &str = "web-token";

/// Join an API root and a resource path, collapsing the slashes between them.
///
/// Mirrors how the web client's HTTP library combines `baseURL` with a
/// relative path: `signals` and `/signals` address the same URL, and any
/// trailing slash on `path` is kept.
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return base_url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// reqwest-backed [`Transport`].
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone().or_else(Self::stored_token),
        })
    }

    /// Shorthand for [`ClientConfig::from_env`] followed by [`HttpTransport::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    fn stored_token() -> Option<String> {
        // 1. Try Keyring
        if let Ok(entry) = Entry::new(KEYRING_SERVICE, KEYRING_USER) {
            if let Ok(token) = entry.get_password() {
                return Some(token);
            }
        }

        // 2. Try Environment Variable
        env::var("DISPATCH_API_TOKEN").ok()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = join_url(&self.base_url, path);
        let request_id = uuid::Uuid::new_v4().to_string();
        debug!(%method, %url, %request_id, "dispatching request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("accept", "application/json")
            .header("x-request-id", &request_id);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            warn!(%method, %url, %request_id, status = status.as_u16(), "request failed");
            return Err(Error::Remote {
                status: status.as_u16(),
                message: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        // Non-JSON bodies are passed through as a string rather than rejected.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.execute(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(Method::DELETE, path, &[], None).await
    }
}
