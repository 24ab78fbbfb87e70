//! Extensible, typed attribute bag carried by queries and contexts.
//!
//! Values are tagged so lookups stay typed: asking for an absent key yields
//! the caller's default, asking for a present key with a different tag is an
//! invalid request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rounding_mode::RoundingMode;
use crate::error::{MoneyError, MoneyResult};

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Free text.
    Text(String),
    /// Rounding mode.
    RoundingMode(RoundingMode),
}

impl AttributeValue {
    /// Name of the tag, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::RoundingMode(_) => "rounding_mode",
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<RoundingMode> for AttributeValue {
    fn from(v: RoundingMode) -> Self {
        Self::RoundingMode(v)
    }
}

/// Key under which the rounding mode is stored.
pub const ROUNDING_MODE_KEY: &str = "roundingMode";

/// Ordered mapping from attribute key to tagged value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges two bags; entries in `overrides` win over `defaults`.
    #[must_use]
    pub fn merged(defaults: &Self, overrides: &Self) -> Self {
        let mut out = defaults.0.clone();
        out.extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(out)
    }

    /// Sets `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Raw lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Boolean lookup with a default.
    pub fn get_bool(&self, key: &str, default: bool) -> MoneyResult<bool> {
        match self.0.get(key) {
            None => Ok(default),
            Some(AttributeValue::Bool(v)) => Ok(*v),
            Some(other) => Err(mismatch(key, "bool", other)),
        }
    }

    /// Integer lookup with a default.
    pub fn get_int(&self, key: &str, default: i64) -> MoneyResult<i64> {
        match self.0.get(key) {
            None => Ok(default),
            Some(AttributeValue::Int(v)) => Ok(*v),
            Some(other) => Err(mismatch(key, "int", other)),
        }
    }

    /// Text lookup; absent keys yield `None`.
    pub fn get_text(&self, key: &str) -> MoneyResult<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(AttributeValue::Text(v)) => Ok(Some(v)),
            Some(other) => Err(mismatch(key, "text", other)),
        }
    }

    /// Rounding mode stored under [`ROUNDING_MODE_KEY`], with a default.
    pub fn get_rounding_mode(&self, default: RoundingMode) -> MoneyResult<RoundingMode> {
        match self.0.get(ROUNDING_MODE_KEY) {
            None => Ok(default),
            Some(AttributeValue::RoundingMode(v)) => Ok(*v),
            Some(other) => Err(mismatch(ROUNDING_MODE_KEY, "rounding_mode", other)),
        }
    }
}

fn mismatch(key: &str, expected: &str, found: &AttributeValue) -> MoneyError {
    MoneyError::invalid(format!(
        "attribute {key:?} expected {expected}, found {}",
        found.kind()
    ))
}
