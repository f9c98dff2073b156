//! # dispatch-client
//!
//! Dispatch 事件/案例管理服务的 Rust 客户端：资源客户端、表单校验与正则试验场。
//!
//! Typed client for the REST API of the Dispatch incident and case management
//! server.
//!
//! ## Overview
//!
//! Every business entity on the server (priorities, severities, signals, data
//! sources, ...) is a [`ResourceDescriptor`] in a static catalog. One generic
//! [`ResourceClient`] turns any descriptor plus a borrowed [`Transport`] into
//! `list/get/create/update/delete` calls. Requests and responses pass through
//! unchanged: no caching, no retries, no reinterpretation of failures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dispatch_client::resource::catalog;
//! use dispatch_client::{ClientConfig, HttpTransport, ListOptions};
//!
//! #[tokio::main]
//! async fn main() -> dispatch_client::Result<()> {
//!     let config = ClientConfig::new("https://dispatch.example.com/api/v1/default")
//!         .with_token("your-token");
//!     let transport = HttpTransport::new(&config)?;
//!
//!     let priorities = catalog::INCIDENT_PRIORITIES.client(&transport);
//!     let page = priorities
//!         .list(&ListOptions::new().items_per_page(-1).sort("view_order", false))
//!         .await?;
//!     println!("{}", page);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`resource`] | Descriptors, the generic client, the catalog and custom verbs |
//! | [`transport`] | Transport trait, reqwest transport, recording transport |
//! | [`store`] | Regex playground state |
//! | [`validation`] | `required` and `email` form validators |
//! | [`config`] | Client configuration from code, env or YAML |

pub mod config;
pub mod resource;
pub mod store;
pub mod transport;
pub mod validation;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use resource::{ListOptions, Page, ResourceClient, ResourceDescriptor, Verb};
pub use store::{MatchSet, Playground};
pub use transport::{HttpTransport, RecordingTransport, Transport};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
