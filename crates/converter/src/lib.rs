//! Specification converters
//!
//! The pipeline drives converters through the [`SpecConverter`] trait:
//! one entry point for in-memory specification text, one for a file path.
//! [`KongConverter`] is the real implementation, turning OpenAPI documents
//! into Kong declarative configuration or Kong-for-Kubernetes manifests
//! depending on the selector token it is handed.

mod declarative;
mod kubernetes;
pub mod openapi;

use kongen_common::{ConfigError, ConversionResult, Result};
use std::fs;
use std::path::Path;

/// Selector token for decK-style declarative configuration
pub const KONG_DECLARATIVE_CONFIG: &str = "kong-declarative-config";

/// Selector token for Kong ingress-controller manifests
pub const KONG_FOR_KUBERNETES: &str = "kong-for-kubernetes";

/// A pluggable specification converter
///
/// Implementations may fail on malformed input; callers own turning that
/// into an operator-facing outcome.
pub trait SpecConverter {
    /// Convert in-memory specification text
    fn convert_contents(&self, contents: &str, selector: &str) -> Result<ConversionResult>;

    /// Convert a specification file
    fn convert_file(&self, path: &Path, selector: &str) -> Result<ConversionResult>;
}

/// OpenAPI → Kong converter
#[derive(Debug, Default, Clone, Copy)]
pub struct KongConverter;

impl KongConverter {
    pub fn new() -> Self {
        Self
    }
}

impl SpecConverter for KongConverter {
    fn convert_contents(&self, contents: &str, selector: &str) -> Result<ConversionResult> {
        let spec = openapi::OpenApiSpec::from_text(contents)?;
        match selector {
            KONG_DECLARATIVE_CONFIG => declarative::generate(&spec),
            KONG_FOR_KUBERNETES => kubernetes::generate(&spec),
            other => Err(ConfigError::Conversion(format!(
                "unknown converter selector \"{other}\". Supported selectors are \
                 [{KONG_DECLARATIVE_CONFIG}, {KONG_FOR_KUBERNETES}]"
            ))),
        }
    }

    fn convert_file(&self, path: &Path, selector: &str) -> Result<ConversionResult> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConfigError::Conversion(format!(
                "failed to read specification file {}: {e}",
                path.display()
            ))
        })?;
        self.convert_contents(&contents, selector)
    }
}

/// Reduce a free-form name to a lowercase, dash-separated slug
///
/// CamelCase boundaries also become dashes, so `listPets` and
/// `Pet Store` slug to `list-pets` and `pet-store`.
pub(crate) fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    let mut prev_lower = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            let camel_boundary = ch.is_ascii_uppercase() && prev_lower;
            if (pending_dash || camel_boundary) && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
            prev_lower = false;
        }
    }
    if slug.is_empty() {
        "unnamed".to_string()
    } else {
        slug
    }
}

/// Collapse a templated OpenAPI path to its literal prefix
///
/// `/pets/{petId}` becomes `/pets`; a path templated from its first
/// segment becomes `/`.
pub(crate) fn route_path(path: &str) -> String {
    match path.find('{') {
        Some(index) => {
            let prefix = path[..index].trim_end_matches('/');
            if prefix.is_empty() {
                "/".to_string()
            } else {
                prefix.to_string()
            }
        }
        None => path.to_string(),
    }
}
