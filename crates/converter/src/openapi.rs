//! Minimal OpenAPI 3 document model
//!
//! Only the surface needed for gateway configuration is modeled: API
//! metadata, servers, and the path/operation table. Schemas, components,
//! and security are deliberately left to the upstream API definition.

use kongen_common::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g., "3.0.0")
    #[serde(default)]
    pub openapi: Option<String>,

    /// API metadata
    #[serde(default)]
    pub info: Info,

    /// Declared servers, in document order
    #[serde(default)]
    pub servers: Vec<Server>,

    /// Path table; kept sorted so generation is deterministic
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
}

/// API information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    /// API title
    #[serde(default)]
    pub title: String,

    /// API version
    #[serde(default)]
    pub version: String,

    /// API description
    #[serde(default)]
    pub description: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Server URL
    pub url: String,

    /// Server description
    #[serde(default)]
    pub description: Option<String>,
}

/// Path item (operations for a path)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation
    #[serde(default)]
    pub get: Option<Operation>,

    /// PUT operation
    #[serde(default)]
    pub put: Option<Operation>,

    /// POST operation
    #[serde(default)]
    pub post: Option<Operation>,

    /// DELETE operation
    #[serde(default)]
    pub delete: Option<Operation>,

    /// PATCH operation
    #[serde(default)]
    pub patch: Option<Operation>,

    /// HEAD operation
    #[serde(default)]
    pub head: Option<Operation>,

    /// OPTIONS operation
    #[serde(default)]
    pub options: Option<Operation>,
}

/// HTTP operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    /// Operation ID (unique identifier)
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,

    /// Summary
    #[serde(default)]
    pub summary: Option<String>,

    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl OpenApiSpec {
    /// Parse a specification from YAML or JSON text
    ///
    /// YAML is a superset of JSON for this purpose, so a single parse
    /// handles both encodings.
    pub fn from_text(text: &str) -> Result<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| ConfigError::Conversion(format!("failed to parse OpenAPI document: {e}")))
    }

    /// The API title, with a fallback for untitled documents
    pub fn title(&self) -> &str {
        if self.info.title.trim().is_empty() {
            "openapi"
        } else {
            &self.info.title
        }
    }
}

impl PathItem {
    /// Declared operations as (HTTP method, operation) pairs, in a fixed
    /// method order
    pub fn operations(&self) -> Vec<(&'static str, &Operation)> {
        let mut operations = Vec::new();
        let table = [
            ("GET", &self.get),
            ("PUT", &self.put),
            ("POST", &self.post),
            ("DELETE", &self.delete),
            ("PATCH", &self.patch),
            ("HEAD", &self.head),
            ("OPTIONS", &self.options),
        ];
        for (method, op) in table {
            if let Some(op) = op {
                operations.push((method, op));
            }
        }
        operations
    }
}
