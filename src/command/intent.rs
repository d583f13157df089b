//! Decode structured intents into a category/operation pair plus parameters
//!
//! Upstream producers (a language model, a script, a person) hand over a flat
//! JSON object. Only `category` and `operation` have a fixed meaning; every
//! other field is a template parameter whose value is coerced to a string.

use crate::core::error::{ConvertError, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const CATEGORY_KEY: &str = "category";
const OPERATION_KEY: &str = "operation";

/// A decoded conversion request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIntent {
    category: String,
    operation: String,
    params: BTreeMap<String, String>,
}

impl ParsedIntent {
    pub fn new(category: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            operation: operation.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Parse a JSON object from text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ConvertError::InvalidPayload(e.to_string()))?;
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(ConvertError::InvalidPayload(format!(
                "expected a JSON object, found {}",
                value_kind(&other)
            ))),
        }
    }

    /// Decode an already-parsed JSON object
    ///
    /// A missing `category` or `operation` decodes as an empty string, which
    /// later fails catalog lookup. A present but non-string one is rejected
    /// here. Parameters keep strings verbatim, stringify integers, and drop
    /// every other value type.
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut intent = Self::default();

        for (key, value) in map {
            match key.as_str() {
                CATEGORY_KEY => intent.category = expect_string(CATEGORY_KEY, value)?,
                OPERATION_KEY => intent.operation = expect_string(OPERATION_KEY, value)?,
                _ => match value {
                    Value::String(s) => {
                        intent.params.insert(key, s);
                    }
                    Value::Number(n) if n.is_i64() || n.is_u64() => {
                        intent.params.insert(key, n.to_string());
                    }
                    other => {
                        tracing::debug!("Dropping parameter {:?}: {} value", key, value_kind(&other));
                    }
                },
            }
        }

        if intent.category.is_empty() || intent.operation.is_empty() {
            tracing::debug!(
                category = %intent.category,
                operation = %intent.operation,
                "Intent is missing its category or operation"
            );
        }

        Ok(intent)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Look up a single parameter value
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

fn expect_string(field: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ConvertError::InvalidPayload(format!(
            "field `{}` must be a string, found {}",
            field,
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for ParsedIntent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len() + 2))?;
        map.serialize_entry(CATEGORY_KEY, &self.category)?;
        map.serialize_entry(OPERATION_KEY, &self.operation)?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParsedIntent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(de::Error::custom)
    }
}
