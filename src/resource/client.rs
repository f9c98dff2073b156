//! Generic CRUD client over a [`ResourceDescriptor`].

use super::descriptor::{ResourceDescriptor, Verb};
use super::options::ListOptions;
use super::page::Page;
use crate::transport::Transport;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::debug;

/// A stateless client for one REST entity.
///
/// Holds nothing but its descriptor and a borrowed transport; every call is a
/// single request whose outcome is returned unchanged.
#[derive(Clone, Copy)]
pub struct ResourceClient<'t> {
    descriptor: ResourceDescriptor,
    transport: &'t dyn Transport,
}

impl<'t> ResourceClient<'t> {
    pub fn new(descriptor: ResourceDescriptor, transport: &'t dyn Transport) -> Self {
        Self {
            descriptor,
            transport,
        }
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub(crate) fn transport(&self) -> &'t dyn Transport {
        self.transport
    }

    fn ensure(&self, verb: Verb) -> Result<()> {
        if self.descriptor.supports(verb) {
            Ok(())
        } else {
            Err(Error::Unsupported {
                resource: self.descriptor.name,
                verb,
            })
        }
    }

    /// `GET base_path` with the options as query parameters.
    pub async fn list(&self, options: &ListOptions) -> Result<Value> {
        self.ensure(Verb::List)?;
        let path = self.descriptor.list_path();
        debug!(resource = self.descriptor.name, %path, "list");
        self.transport.get(&path, &options.to_query_pairs()).await
    }

    /// [`list`](Self::list), decoded into the server's page envelope.
    pub async fn list_as<T: DeserializeOwned>(&self, options: &ListOptions) -> Result<Page<T>> {
        let value = self.list(options).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get(&self, id: impl Display) -> Result<Value> {
        self.ensure(Verb::Get)?;
        let path = self.descriptor.item_path(&id.to_string());
        debug!(resource = self.descriptor.name, %path, "get");
        self.transport.get(&path, &[]).await
    }

    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Value> {
        self.ensure(Verb::Create)?;
        let body = serde_json::to_value(payload)?;
        let path = self.descriptor.create_path();
        debug!(resource = self.descriptor.name, %path, "create");
        self.transport.post(&path, &body).await
    }

    pub async fn update<P: Serialize + ?Sized>(&self, id: impl Display, payload: &P) -> Result<Value> {
        self.ensure(Verb::Update)?;
        let body = serde_json::to_value(payload)?;
        let path = self.descriptor.item_path(&id.to_string());
        debug!(resource = self.descriptor.name, %path, "update");
        self.transport.put(&path, &body).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<Value> {
        self.ensure(Verb::Delete)?;
        let path = self.descriptor.item_path(&id.to_string());
        debug!(resource = self.descriptor.name, %path, "delete");
        self.transport.delete(&path).await
    }

    /// `DELETE base_path/parent_id/child_id`
    pub async fn delete_composite(
        &self,
        parent_id: impl Display,
        child_id: impl Display,
    ) -> Result<Value> {
        self.ensure(Verb::DeleteComposite)?;
        let path = self
            .descriptor
            .item_path(&format!("{}/{}", parent_id, child_id));
        debug!(resource = self.descriptor.name, %path, "delete_composite");
        self.transport.delete(&path).await
    }
}

impl std::fmt::Debug for ResourceClient<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
