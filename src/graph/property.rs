//! Typed property values.
//!
//! A closed variant type instead of an open `string -> any` mapping. The
//! generator only emits integers today; the other variants keep the map
//! shape open for consumers that attach richer attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single property value on a node or edge.
///
/// Untagged: values serialize as plain JSON scalars. Integer parses are
/// attempted before float parses on the way back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Property bag keyed by name. A `BTreeMap` keeps serialized output stable.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

impl PropertyValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}
