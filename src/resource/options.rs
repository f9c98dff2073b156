//! Typed list/query options.

use crate::transport::QueryPairs;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A primitive query value. Lists expand to one pair per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<QueryValue>),
}

impl QueryValue {
    fn push_pairs(&self, key: &str, out: &mut QueryPairs) {
        match self {
            QueryValue::List(items) => {
                for item in items {
                    item.push_pairs(key, out);
                }
            }
            other => out.push((key.to_string(), other.to_string())),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Float(x) => write!(f, "{}", x),
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::List(items) => {
                let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Str(v)
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Bool(v)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        QueryValue::Int(v as i64)
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(v as i64)
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        QueryValue::Float(v)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(v: Vec<T>) -> Self {
        QueryValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// Pagination, sorting and filtering for `list` calls.
///
/// Unset fields are omitted from the query string. Keys use the server's
/// spelling (`itemsPerPage`, `sortBy[]`, `descending[]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub items_per_page: Option<i64>,
    pub sort_by: Vec<String>,
    pub descending: Vec<bool>,
    /// Filter tree, sent JSON-encoded under `filter`.
    pub filter: Option<Value>,
    /// Anything else, passed through verbatim in key order.
    pub extra: BTreeMap<String, QueryValue>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// `-1` asks the server for every row.
    pub fn items_per_page(mut self, n: i64) -> Self {
        self.items_per_page = Some(n);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.sort_by.push(field.into());
        self.descending.push(descending);
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Flatten into ordered query pairs.
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut out = QueryPairs::new();
        if let Some(q) = &self.q {
            out.push(("q".into(), q.clone()));
        }
        if let Some(page) = self.page {
            out.push(("page".into(), page.to_string()));
        }
        if let Some(n) = self.items_per_page {
            out.push(("itemsPerPage".into(), n.to_string()));
        }
        for field in &self.sort_by {
            out.push(("sortBy[]".into(), field.clone()));
        }
        for desc in &self.descending {
            out.push(("descending[]".into(), desc.to_string()));
        }
        if let Some(filter) = &self.filter {
            out.push(("filter".into(), filter.to_string()));
        }
        for (key, value) in &self.extra {
            value.push_pairs(key, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn default_options_produce_no_pairs() {
        assert!(ListOptions::new().is_empty());
    }

    #[test]
    fn flattens_in_server_spelling() {
        let opts = ListOptions::new()
            .query("db")
            .page(2)
            .items_per_page(50)
            .sort("name", false)
            .sort("created_at", true)
            .filter(json!({"and": [{"field": "status", "op": "==", "value": "Active"}]}))
            .param("project", "default");

        let pairs = opts.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                pair("q", "db"),
                pair("page", "2"),
                pair("itemsPerPage", "50"),
                pair("sortBy[]", "name"),
                pair("sortBy[]", "created_at"),
                pair("descending[]", "false"),
                pair("descending[]", "true"),
                pair(
                    "filter",
                    r#"{"and":[{"field":"status","op":"==","value":"Active"}]}"#
                ),
                pair("project", "default"),
            ]
        );
    }

    #[test]
    fn list_values_repeat_the_key() {
        let opts = ListOptions::new().param("type[]", vec!["Incident", "Case"]);
        assert_eq!(
            opts.to_query_pairs(),
            vec![pair("type[]", "Incident"), pair("type[]", "Case")]
        );
    }
}
