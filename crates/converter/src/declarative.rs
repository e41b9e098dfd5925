//! Kong declarative configuration generation
//!
//! Produces a single decK-style document: one service per specification,
//! one route per (path, method) pair.

use crate::openapi::OpenApiSpec;
use crate::{route_path, slugify};
use kongen_common::{ConversionResult, Result};
use serde::Serialize;

/// Upstream used when the specification declares no servers
const DEFAULT_UPSTREAM: &str = "http://localhost";

/// Declarative configuration document root
#[derive(Debug, Serialize)]
struct DeclarativeConfig {
    #[serde(rename = "_format_version")]
    format_version: &'static str,
    services: Vec<Service>,
}

/// A Kong service entry
#[derive(Debug, Serialize)]
struct Service {
    name: String,
    url: String,
    routes: Vec<Route>,
}

/// A Kong route entry
#[derive(Debug, Serialize)]
struct Route {
    name: String,
    methods: Vec<String>,
    paths: Vec<String>,
    strip_path: bool,
}

/// Generate a declarative configuration document from a parsed spec
pub(crate) fn generate(spec: &OpenApiSpec) -> Result<ConversionResult> {
    let service_name = slugify(spec.title());
    let url = spec
        .servers
        .first()
        .map(|server| server.url.clone())
        .unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());

    let mut routes = Vec::new();
    for (path, item) in &spec.paths {
        for (method, operation) in item.operations() {
            let name = operation
                .operation_id
                .as_deref()
                .map(slugify)
                .unwrap_or_else(|| {
                    format!("{service_name}-{}-{}", method.to_lowercase(), slugify(path))
                });
            routes.push(Route {
                name,
                methods: vec![method.to_string()],
                paths: vec![route_path(path)],
                strip_path: false,
            });
        }
    }

    let config = DeclarativeConfig {
        format_version: "1.1",
        services: vec![Service {
            name: service_name,
            url,
            routes,
        }],
    };

    Ok(ConversionResult::new(vec![serde_yaml::to_value(&config)?]))
}
