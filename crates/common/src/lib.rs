//! Common types and utilities for Kongen
//!
//! This crate contains the shared error type, the output-kind registry,
//! and the conversion result types used across the store, converter,
//! pipeline, and CLI components.

mod kind;
mod result;

pub use kind::ConversionKind;
pub use result::ConversionResult;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested output kind is not in the registry.
    #[error("config type \"{requested}\" is not recognized. Options are [{available}]")]
    InvalidOutputKind {
        /// The kind the caller asked for
        requested: String,
        /// Comma-separated list of valid kind keys
        available: String,
    },

    #[error("resolution error: {0}")]
    Resolution(String),

    #[error("conversion error: {0}")]
    Conversion(String),

    /// Writing the assembled output failed; carries the attempted path.
    #[error("failed to write \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration generation operations
pub type Result<T> = std::result::Result<T, ConfigError>;
