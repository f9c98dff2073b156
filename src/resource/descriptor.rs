//! Resource descriptors.

use super::client::ResourceClient;
use crate::transport::Transport;
use serde::Serialize;
use std::fmt;

/// Operations a descriptor can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verb {
    List,
    Get,
    Create,
    Update,
    Delete,
    /// `DELETE base/parent/child`
    DeleteComposite,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::List => "list",
            Verb::Get => "get",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
            Verb::DeleteComposite => "delete_composite",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const CRUD: &[Verb] = &[Verb::List, Verb::Get, Verb::Create, Verb::Update, Verb::Delete];
pub const LIST_ONLY: &[Verb] = &[Verb::List];
pub const NO_VERBS: &[Verb] = &[];

/// Static description of one REST entity.
///
/// `base_path` is kept byte-for-byte as the server expects it, including the
/// presence or absence of leading and trailing slashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Catalog key, unique across [`catalog::ALL`](super::catalog::ALL).
    pub name: &'static str,
    pub base_path: &'static str,
    /// Append `/` to `base_path` for `list`.
    pub list_slash: bool,
    /// Append `/` to `base_path` for `create`.
    pub create_slash: bool,
    pub verbs: &'static [Verb],
}

impl ResourceDescriptor {
    /// Full CRUD, no trailing slashes.
    pub const fn crud(name: &'static str, base_path: &'static str) -> Self {
        Self {
            name,
            base_path,
            list_slash: false,
            create_slash: false,
            verbs: CRUD,
        }
    }

    pub const fn with_verbs(mut self, verbs: &'static [Verb]) -> Self {
        self.verbs = verbs;
        self
    }

    pub const fn with_list_slash(mut self) -> Self {
        self.list_slash = true;
        self
    }

    pub const fn with_create_slash(mut self) -> Self {
        self.create_slash = true;
        self
    }

    pub fn supports(&self, verb: Verb) -> bool {
        self.verbs.contains(&verb)
    }

    pub fn list_path(&self) -> String {
        with_slash(self.base_path, self.list_slash)
    }

    pub fn create_path(&self) -> String {
        with_slash(self.base_path, self.create_slash)
    }

    /// `base_path/segment`
    pub fn item_path(&self, segment: &str) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), segment)
    }

    /// Bind this descriptor to a borrowed transport.
    pub fn client<'t>(&self, transport: &'t dyn Transport) -> ResourceClient<'t> {
        ResourceClient::new(*self, transport)
    }
}

fn with_slash(path: &str, slash: bool) -> String {
    if slash && !path.ends_with('/') {
        format!("{}/", path)
    } else {
        path.to_string()
    }
}
