//! Local specification store
//!
//! Specifications live as plain YAML or JSON files in an application-data
//! directory. The pipeline only sees the [`SpecStore`] trait, so tests can
//! substitute a scripted store without touching the filesystem or a
//! terminal.

mod dir_store;
mod prompt;

pub use dir_store::DirStore;

use kongen_common::Result;
use serde::{Deserialize, Serialize};

/// A stored API specification entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSpec {
    /// Entry name (the file stem for directory-backed stores)
    pub name: String,

    /// Raw specification text
    pub contents: String,
}

/// Read access to the specification store
///
/// `get` answers identifier lookups; `prompt_choice` asks the operator to
/// pick an entry when no identifier was given. The `ci` flag selects the
/// non-interactive policy; the store owns what that policy is.
pub trait SpecStore {
    /// Look up a stored specification by identifier
    fn get(&self, identifier: &str) -> Result<Option<ApiSpec>>;

    /// Let the operator choose a specification from the store
    ///
    /// With `ci` set, no input is read: a sole entry is auto-selected and
    /// anything else resolves to `None`.
    fn prompt_choice(&self, ci: bool) -> Result<Option<ApiSpec>>;
}
