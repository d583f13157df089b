//! Operations catalog: category -> operation -> command template
//!
//! The catalog is read once and never mutated. Auxiliary tables shipped in
//! the same file (`nlp_patterns`, `sample_values`) are kept as opaque JSON so
//! that re-serializing a catalog reproduces them.

use crate::core::error::{CatalogError, ConvertError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Catalog bundled into the binary, used when no path is configured
const BUNDLED_CATALOG: &str = include_str!("../../data/macos_operations.json");

/// Immutable template table loaded from an operations file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationsCatalog {
    categories: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nlp_patterns: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_values: Option<Value>,
}

impl OperationsCatalog {
    /// Build a catalog directly from a template table
    pub fn from_categories(categories: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self {
            categories,
            nlp_patterns: None,
            sample_values: None,
        }
    }

    /// Parse a catalog from a JSON string
    pub fn parse_json(json: &str) -> std::result::Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file on disk
    pub fn load_from_file(path: &Path) -> std::result::Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json(&content)
    }

    /// The catalog compiled into this binary
    pub fn bundled() -> std::result::Result<Self, CatalogError> {
        Self::parse_json(BUNDLED_CATALOG)
    }

    /// Find the template for a category/operation pair
    pub fn lookup(&self, category: &str, operation: &str) -> Result<&str> {
        let operations = self
            .categories
            .get(category)
            .ok_or_else(|| ConvertError::UnknownCategory(category.to_string()))?;

        operations
            .get(operation)
            .map(String::as_str)
            .ok_or_else(|| ConvertError::UnknownOperation {
                operation: operation.to_string(),
                category: category.to_string(),
            })
    }

    /// Category names in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Operation names of a category in sorted order, if the category exists
    pub fn operations(&self, category: &str) -> Option<impl Iterator<Item = &str>> {
        self.categories
            .get(category)
            .map(|ops| ops.keys().map(String::as_str))
    }

    /// Every `(category, operation, template)` entry, sorted by category then operation
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.categories.iter().flat_map(|(category, ops)| {
            ops.iter()
                .map(move |(op, template)| (category.as_str(), op.as_str(), template.as_str()))
        })
    }

    /// Number of templates across all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nlp_patterns(&self) -> Option<&Value> {
        self.nlp_patterns.as_ref()
    }

    pub fn sample_values(&self) -> Option<&Value> {
        self.sample_values.as_ref()
    }
}
