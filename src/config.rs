//! 客户端配置：默认值、环境变量覆盖与 YAML 文件加载。
//!
//! Client configuration.
//!
//! Defaults are production-friendly and every knob can be overridden from the
//! environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `DISPATCH_API_URL` | `base_url` | (required) |
//! | `DISPATCH_API_TOKEN` | `token` | none |
//! | `DISPATCH_HTTP_TIMEOUT_SECS` | `timeout_secs` | 30 |
//! | `DISPATCH_HTTP_POOL_MAX_IDLE_PER_HOST` | `pool_max_idle_per_host` | 32 |
//! | `DISPATCH_PROXY_URL` | `proxy_url` | none |

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Settings for [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. `https://dispatch.example.com/api/v1/default`.
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_pool_max_idle_per_host() -> usize {
    DEFAULT_POOL_MAX_IDLE_PER_HOST
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            proxy_url: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Build a config purely from environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("DISPATCH_API_URL").map_err(|_| {
            Error::configuration_with_context(
                "DISPATCH_API_URL is not set",
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_source("config_env"),
            )
        })?;
        let mut config = Self::new(base_url);
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document, then apply environment overrides.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let mut config: ClientConfig = serde_yaml::from_str(raw)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    /// Overlay any `DISPATCH_*` variables that are set on top of the current values.
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var("DISPATCH_API_URL") {
            self.base_url = url;
        }
        if let Ok(token) = env::var("DISPATCH_API_TOKEN") {
            self.token = Some(token);
        }
        if let Some(secs) = env::var("DISPATCH_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.timeout_secs = secs;
        }
        if let Some(n) = env::var("DISPATCH_HTTP_POOL_MAX_IDLE_PER_HOST")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.pool_max_idle_per_host = n;
        }
        if let Ok(proxy) = env::var("DISPATCH_PROXY_URL") {
            self.proxy_url = Some(proxy);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "base URL is required",
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_source("config_validator"),
            ));
        }
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone())
                    .with_source("config_validator"),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("unsupported URL scheme: {}", parsed.scheme()),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_source("config_validator"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "timeout must be at least one second",
                ErrorContext::new()
                    .with_field_path("config.timeout_secs")
                    .with_source("config_validator"),
            ));
        }
        Ok(())
    }
}
