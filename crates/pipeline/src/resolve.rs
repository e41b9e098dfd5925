//! Specification resolution cascade
//!
//! The cascade order is a contract: a store hit beats a file, and an
//! identifier beats the interactive prompt. Each strategy is tried in
//! sequence and the first non-empty result wins.

use kongen_store::SpecStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Where the specification contents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSpec {
    /// Contents already in memory (store hit or prompt selection)
    Contents(String),

    /// A readable file the converter will load itself
    File(PathBuf),
}

/// Resolve a specification source, or nothing
///
/// Never propagates an error: store and filesystem failures are logged
/// and treated as "not found".
pub fn resolve_spec(
    identifier: Option<&str>,
    store: &dyn SpecStore,
    working_dir: &Path,
    ci: bool,
) -> Option<ResolvedSpec> {
    let Some(identifier) = identifier else {
        // No identifier: the store prompts, honoring the non-interactive
        // flag. The store owns the CI selection policy.
        return match store.prompt_choice(ci) {
            Ok(Some(spec)) if !spec.contents.trim().is_empty() => {
                trace!(name = %spec.name, "operator selected a stored specification");
                Some(ResolvedSpec::Contents(spec.contents))
            }
            Ok(_) => {
                trace!("no specification selected from the store");
                None
            }
            Err(e) => {
                warn!("specification prompt failed: {e}");
                None
            }
        };
    };

    // The store is authoritative when it has a non-empty answer.
    match store.get(identifier) {
        Ok(Some(spec)) if !spec.contents.trim().is_empty() => {
            trace!(identifier, "resolved specification from store contents");
            return Some(ResolvedSpec::Contents(spec.contents));
        }
        Ok(Some(_)) => trace!(identifier, "store entry is empty; trying the filesystem"),
        Ok(None) => trace!(identifier, "no store entry; trying the filesystem"),
        Err(e) => warn!(identifier, "store lookup failed: {e}"),
    }

    let candidate = working_dir.join(identifier);
    if readable_file(&candidate) {
        trace!(path = %candidate.display(), "resolved specification file");
        Some(ResolvedSpec::File(candidate))
    } else {
        warn!(path = %candidate.display(), "specification file is missing or unreadable");
        None
    }
}

fn readable_file(path: &Path) -> bool {
    path.is_file() && fs::File::open(path).is_ok()
}
