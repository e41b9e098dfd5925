//! Directory-backed specification store

use crate::{prompt, ApiSpec, SpecStore};
use kongen_common::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Extensions recognized as specification files
const SPEC_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Specification store backed by a directory of YAML/JSON files
///
/// Every `*.yaml`, `*.yml`, or `*.json` file under the store directory is
/// one entry. The entry name is the file stem; lookups also match the full
/// file name and the document's `info.title`. A missing directory is an
/// empty store rather than an error.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store rooted at the given directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries, sorted by file name for a stable listing
    pub fn entries(&self) -> Result<Vec<ApiSpec>> {
        Ok(self.scan()?.into_iter().map(|(_, spec)| spec).collect())
    }

    fn scan(&self) -> Result<Vec<(PathBuf, ApiSpec)>> {
        if !self.root.is_dir() {
            trace!(root = %self.root.display(), "store directory does not exist; treating as empty");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(2)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                kongen_common::ConfigError::Resolution(format!(
                    "failed to scan store directory {}: {e}",
                    self.root.display()
                ))
            })?;
            if !entry.file_type().is_file() || !is_spec_file(entry.path()) {
                continue;
            }

            let contents = fs::read_to_string(entry.path())?;
            let name = entry
                .path()
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push((entry.path().to_path_buf(), ApiSpec { name, contents }));
        }

        trace!(root = %self.root.display(), count = entries.len(), "scanned specification store");
        Ok(entries)
    }
}

impl SpecStore for DirStore {
    fn get(&self, identifier: &str) -> Result<Option<ApiSpec>> {
        for (path, spec) in self.scan()? {
            if matches_identifier(identifier, &path, &spec.contents) {
                trace!(identifier, path = %path.display(), "identifier matched store entry");
                return Ok(Some(spec));
            }
        }
        trace!(identifier, "no store entry matched identifier");
        Ok(None)
    }

    fn prompt_choice(&self, ci: bool) -> Result<Option<ApiSpec>> {
        let entries = self.entries()?;
        if ci {
            Ok(prompt::auto_select(&entries))
        } else {
            prompt::choose(&entries)
        }
    }
}

fn is_spec_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SPEC_EXTENSIONS.contains(&ext))
}

/// Match an identifier against a store entry
///
/// Checks the file stem, the full file name, and the specification's
/// `info.title`. Unparsable files still match by name.
fn matches_identifier(identifier: &str, path: &Path, contents: &str) -> bool {
    if path.file_stem().is_some_and(|stem| stem == identifier)
        || path.file_name().is_some_and(|name| name == identifier)
    {
        return true;
    }
    document_title(path, contents).is_some_and(|title| title == identifier)
}

/// Extract `info.title` from a specification document, if it parses
fn document_title(path: &Path, contents: &str) -> Option<String> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "json");

    let title = if is_json {
        let value: serde_json::Value = serde_json::from_str(contents).ok()?;
        value.get("info")?.get("title")?.as_str()?.to_owned()
    } else {
        let value: serde_yaml::Value = serde_yaml::from_str(contents).ok()?;
        value.get("info")?.get("title")?.as_str()?.to_owned()
    };
    Some(title)
}
