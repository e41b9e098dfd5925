//! Kong for Kubernetes manifest generation
//!
//! Produces one Ingress document per declared server, routed through the
//! Kong ingress controller. A specification with no servers yields a
//! single host-less Ingress.

use crate::openapi::OpenApiSpec;
use crate::{route_path, slugify};
use kongen_common::{ConversionResult, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Port the backing Service is assumed to listen on
const BACKEND_PORT: u16 = 80;

#[derive(Debug, Serialize)]
struct Ingress {
    #[serde(rename = "apiVersion")]
    api_version: &'static str,
    kind: &'static str,
    metadata: Metadata,
    spec: IngressSpec,
}

#[derive(Debug, Serialize)]
struct Metadata {
    name: String,
    annotations: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
struct IngressSpec {
    rules: Vec<Rule>,
}

#[derive(Debug, Serialize)]
struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    http: Http,
}

#[derive(Debug, Serialize)]
struct Http {
    paths: Vec<HttpPath>,
}

#[derive(Debug, Clone, Serialize)]
struct HttpPath {
    path: String,
    #[serde(rename = "pathType")]
    path_type: &'static str,
    backend: Backend,
}

#[derive(Debug, Clone, Serialize)]
struct Backend {
    service: BackendService,
}

#[derive(Debug, Clone, Serialize)]
struct BackendService {
    name: String,
    port: Port,
}

#[derive(Debug, Clone, Serialize)]
struct Port {
    number: u16,
}

/// Generate Kong-for-Kubernetes Ingress documents from a parsed spec
pub(crate) fn generate(spec: &OpenApiSpec) -> Result<ConversionResult> {
    let name = slugify(spec.title());

    // One backend path per unique (prefix-collapsed) route path.
    let paths: BTreeSet<String> = spec.paths.keys().map(|path| route_path(path)).collect();
    let http_paths: Vec<HttpPath> = paths
        .into_iter()
        .map(|path| HttpPath {
            path,
            path_type: "ImplementationSpecific",
            backend: Backend {
                service: BackendService {
                    name: name.clone(),
                    port: Port {
                        number: BACKEND_PORT,
                    },
                },
            },
        })
        .collect();

    let hosts: Vec<Option<String>> = if spec.servers.is_empty() {
        vec![None]
    } else {
        spec.servers.iter().map(|server| host_of(&server.url)).collect()
    };

    let multiple = hosts.len() > 1;
    let mut documents = Vec::with_capacity(hosts.len());
    for (index, host) in hosts.into_iter().enumerate() {
        let metadata_name = if multiple {
            format!("{name}-{index}")
        } else {
            name.clone()
        };
        let ingress = Ingress {
            api_version: "networking.k8s.io/v1",
            kind: "Ingress",
            metadata: Metadata {
                name: metadata_name,
                annotations: BTreeMap::from([
                    ("kubernetes.io/ingress.class", "kong"),
                    ("konghq.com/strip-path", "false"),
                ]),
            },
            spec: IngressSpec {
                rules: vec![Rule {
                    host,
                    http: Http {
                        paths: http_paths.clone(),
                    },
                }],
            },
        };
        documents.push(serde_yaml::to_value(&ingress)?);
    }

    Ok(ConversionResult::new(documents))
}

/// Extract the host portion of a server URL, if it has one
fn host_of(url: &str) -> Option<String> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .split(':')
        .next()
        .unwrap_or_default();
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
