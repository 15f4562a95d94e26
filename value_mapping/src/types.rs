//! Bind value definitions
//!
//! This module provides the value kinds accepted by the remote query service
//! and conversions from common Rust types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value bound to a `:name` placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum BindValue {
    Text(String),
    Number(i64),
    Decimal(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Set(Vec<BindValue>),
}

/// Discriminant of a [`BindValue`], used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Text,
    Number,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Set,
}

impl BindValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            BindValue::Text(_) => ValueKind::Text,
            BindValue::Number(_) => ValueKind::Number,
            BindValue::Decimal(_) => ValueKind::Decimal,
            BindValue::Boolean(_) => ValueKind::Boolean,
            BindValue::Date(_) => ValueKind::Date,
            BindValue::DateTime(_) => ValueKind::DateTime,
            BindValue::Set(_) => ValueKind::Set,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, BindValue::Set(_))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Decimal => "decimal",
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
            ValueKind::DateTime => "datetime",
            ValueKind::Set => "set",
        };
        f.write_str(name)
    }
}

impl From<String> for BindValue {
    fn from(val: String) -> Self {
        BindValue::Text(val)
    }
}

impl From<&str> for BindValue {
    fn from(val: &str) -> Self {
        BindValue::Text(val.to_string())
    }
}

impl From<i32> for BindValue {
    fn from(val: i32) -> Self {
        BindValue::Number(i64::from(val))
    }
}

impl From<i64> for BindValue {
    fn from(val: i64) -> Self {
        BindValue::Number(val)
    }
}

impl From<u32> for BindValue {
    fn from(val: u32) -> Self {
        BindValue::Number(i64::from(val))
    }
}

impl From<f64> for BindValue {
    fn from(val: f64) -> Self {
        BindValue::Decimal(val)
    }
}

impl From<bool> for BindValue {
    fn from(val: bool) -> Self {
        BindValue::Boolean(val)
    }
}

impl From<NaiveDate> for BindValue {
    fn from(val: NaiveDate) -> Self {
        BindValue::Date(val)
    }
}

impl From<DateTime<Utc>> for BindValue {
    fn from(val: DateTime<Utc>) -> Self {
        BindValue::DateTime(val)
    }
}

impl<T> From<Vec<T>> for BindValue
where
    T: Into<BindValue>,
{
    fn from(val: Vec<T>) -> Self {
        BindValue::Set(val.into_iter().map(Into::into).collect())
    }
}
