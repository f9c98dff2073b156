//! Resources with verbs outside plain CRUD.
//!
//! Each wrapper forwards its extra parameters into the path or the query
//! string and otherwise behaves like [`ResourceClient`].

use super::catalog;
use super::client::ResourceClient;
use super::options::ListOptions;
use crate::transport::Transport;
use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::debug;

/// Global search over `/search/`.
#[derive(Clone, Copy)]
pub struct SearchClient<'t> {
    transport: &'t dyn Transport,
}

impl<'t> SearchClient<'t> {
    pub fn new(transport: &'t dyn Transport) -> Self {
        Self { transport }
    }

    /// `GET /search/?q=<query>&type[]=<model>...`
    pub async fn search<M: AsRef<str>>(&self, query: &str, models: &[M]) -> Result<Value> {
        let mut pairs = vec![("q".to_string(), query.to_string())];
        pairs.extend(
            models
                .iter()
                .map(|m| ("type[]".to_string(), m.as_ref().to_string())),
        );
        let path = catalog::SEARCH.list_path();
        debug!(%path, models = models.len(), "search");
        self.transport.get(&path, &pairs).await
    }
}

/// `/ai` prompts, plus the server-side defaults.
#[derive(Clone, Copy)]
pub struct AiClient<'t> {
    inner: ResourceClient<'t>,
}

impl<'t> AiClient<'t> {
    pub fn new(transport: &'t dyn Transport) -> Self {
        Self {
            inner: catalog::AI.client(transport),
        }
    }

    pub fn resource(&self) -> &ResourceClient<'t> {
        &self.inner
    }

    /// `GET /ai/defaults`
    pub async fn get_defaults(&self) -> Result<Value> {
        let path = catalog::AI.item_path("defaults");
        self.inner.transport().get(&path, &[]).await
    }
}

/// `plugins` and their configured `plugins/instances`.
#[derive(Clone, Copy)]
pub struct PluginClient<'t> {
    plugins: ResourceClient<'t>,
    instances: ResourceClient<'t>,
}

impl<'t> PluginClient<'t> {
    pub fn new(transport: &'t dyn Transport) -> Self {
        Self {
            plugins: catalog::PLUGINS.client(transport),
            instances: catalog::PLUGIN_INSTANCES.client(transport),
        }
    }

    pub fn resource(&self) -> &ResourceClient<'t> {
        &self.plugins
    }

    pub async fn get_all_instances(&self, options: &ListOptions) -> Result<Value> {
        self.instances.list(options).await
    }

    pub async fn get_instance(&self, id: impl Display) -> Result<Value> {
        self.instances.get(id).await
    }

    pub async fn create_instance<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Value> {
        self.instances.create(payload).await
    }

    pub async fn update_instance<P: Serialize + ?Sized>(
        &self,
        id: impl Display,
        payload: &P,
    ) -> Result<Value> {
        self.instances.update(id, payload).await
    }

    pub async fn delete_instance(&self, id: impl Display) -> Result<Value> {
        self.instances.delete(id).await
    }
}

/// `/incident_roles`, keyed by role name rather than id.
#[derive(Clone, Copy)]
pub struct IncidentRoleClient<'t> {
    transport: &'t dyn Transport,
}

impl<'t> IncidentRoleClient<'t> {
    pub fn new(transport: &'t dyn Transport) -> Self {
        Self { transport }
    }

    /// Role policies for `role` (e.g. `"incident_commander"`).
    pub async fn get(&self, role: &str, options: &ListOptions) -> Result<Value> {
        let path = catalog::INCIDENT_ROLES.item_path(role);
        debug!(%path, "get incident role");
        self.transport.get(&path, &options.to_query_pairs()).await
    }

    pub async fn update<P: Serialize + ?Sized>(&self, role: &str, payload: &P) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        let path = catalog::INCIDENT_ROLES.item_path(role);
        debug!(%path, "update incident role");
        self.transport.put(&path, &body).await
    }
}
