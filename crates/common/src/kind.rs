//! Output-kind registry
//!
//! A closed mapping from the kind keys operators type on the command line
//! to the selector tokens the converter understands. Adding a new output
//! kind means adding a variant here; match exhaustiveness keeps the key
//! and selector tables in step at compile time.

use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized output configuration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    /// Kong for Kubernetes ingress manifests
    Kubernetes,
    /// Kong declarative configuration (decK-style)
    Declarative,
}

impl ConversionKind {
    /// Every recognized kind, in the order reported to operators
    pub const ALL: [ConversionKind; 2] = [ConversionKind::Kubernetes, ConversionKind::Declarative];

    /// The key operators use to request this kind
    pub fn key(&self) -> &'static str {
        match self {
            ConversionKind::Kubernetes => "kubernetes",
            ConversionKind::Declarative => "declarative",
        }
    }

    /// The selector token consumed by the converter
    pub fn selector(&self) -> &'static str {
        match self {
            ConversionKind::Kubernetes => "kong-for-kubernetes",
            ConversionKind::Declarative => "kong-declarative-config",
        }
    }

    /// Look up a kind by its key
    ///
    /// Fails with [`ConfigError::InvalidOutputKind`] carrying the full list
    /// of valid keys, suitable for a user-facing message.
    pub fn parse(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ConfigError::InvalidOutputKind {
                requested: key.to_string(),
                available: Self::describe().join(", "),
            })
    }

    /// Ordered list of valid kind keys, for error messages and help text
    pub fn describe() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.key()).collect()
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ConversionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
