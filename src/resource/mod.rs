//! 资源客户端：由描述符驱动的通用 CRUD 客户端。
//!
//! Descriptor-driven REST resource clients.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`ResourceDescriptor`] | Base path, slash convention and enabled verbs of one entity |
//! | [`ResourceClient`] | Generic `list/get/create/update/delete` over a borrowed transport |
//! | [`catalog`] | Every entity the server exposes |
//! | [`ListOptions`] | Typed pagination/sort/filter options |
//! | [`SearchClient`], [`AiClient`], [`PluginClient`], [`IncidentRoleClient`] | Non-CRUD verbs |

pub mod catalog;
mod client;
mod custom;
mod descriptor;
mod options;
mod page;

pub use client::ResourceClient;
pub use custom::{AiClient, IncidentRoleClient, PluginClient, SearchClient};
pub use descriptor::{ResourceDescriptor, Verb, CRUD, LIST_ONLY, NO_VERBS};
pub use options::{ListOptions, QueryValue};
pub use page::Page;
