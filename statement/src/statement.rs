//! Immutable statement snapshot
//!
//! A [`Statement`] is what the remote service receives: the rendered query
//! text plus the bound values, which the service substitutes on its side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use value_mapping::BindValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub(crate) query: String,
    pub(crate) filter: Option<String>,
    pub(crate) order_by: Option<String>,
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
    pub(crate) values: BTreeMap<String, BindValue>,
}

impl Statement {
    /// Rendered query text, e.g. `WHERE id = :id ORDER BY id ASC LIMIT 500 OFFSET 0`
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Offset of the first requested row, 0 when none was set
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    pub fn values(&self) -> &BTreeMap<String, BindValue> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&BindValue> {
        self.values.get(name)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query)
    }
}
