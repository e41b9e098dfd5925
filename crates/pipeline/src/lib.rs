//! Specification → configuration pipeline
//!
//! The stages run strictly in sequence: validate the requested output
//! kind, resolve a specification source, convert it, assemble the
//! generated documents, emit the result. Any stage's failure ends the run;
//! nothing is retried. The pipeline reports its outcome as a boolean so
//! the CLI owns exit-code mapping, and no error escapes past
//! [`generate_config`].

mod assemble;
mod dispatch;
mod output;
mod resolve;

pub use assemble::assemble_documents;
pub use dispatch::convert_resolved;
pub use output::emit;
pub use resolve::{resolve_spec, ResolvedSpec};

use colored::*;
use kongen_common::ConversionKind;
use kongen_converter::SpecConverter;
use kongen_store::SpecStore;
use std::path::PathBuf;
use tracing::error;

/// One configuration-generation request
#[derive(Debug, Clone)]
pub struct GenerateConfigRequest {
    /// Specification identifier: a store entry name or a file path
    /// relative to `working_dir`. The store is prompted when absent.
    pub identifier: Option<String>,

    /// Requested output kind key, validated against the registry
    pub output_kind: String,

    /// Output file; stdout when absent
    pub output: Option<PathBuf>,

    /// Directory identifiers and relative paths resolve against
    pub working_dir: PathBuf,

    /// Non-interactive mode for automated environments
    pub ci: bool,
}

/// Run the pipeline: validate, resolve, convert, assemble, emit
///
/// Every failure is reported to the operator and collapses into a `false`
/// return; diagnostics go to the tracing subscriber.
pub fn generate_config(
    request: &GenerateConfigRequest,
    store: &dyn SpecStore,
    converter: &dyn SpecConverter,
) -> bool {
    // Kind validation comes first and touches neither the store nor the
    // filesystem.
    let kind = match ConversionKind::parse(&request.output_kind) {
        Ok(kind) => kind,
        Err(e) => {
            println!("{} {e}", "✗".red());
            return false;
        }
    };

    let result = resolve_spec(
        request.identifier.as_deref(),
        store,
        &request.working_dir,
        request.ci,
    )
    .and_then(|resolved| convert_resolved(converter, kind, &resolved));

    // A conversion that produced nothing and a failed resolution are
    // indistinguishable to the operator.
    let Some(result) = result else {
        println!(
            "{} Unable to load a specification to generate configuration from. \
             Run with --verbose for more information.",
            "✗".red()
        );
        return false;
    };

    let document = match assemble_documents(&result.documents) {
        Ok(document) => document,
        Err(e) => {
            error!("failed to serialize generated documents: {e}");
            println!("{} Unable to generate configuration.", "✗".red());
            return false;
        }
    };

    match emit(&document, request.output.as_deref(), &request.working_dir) {
        Ok(Some(path)) => {
            println!(
                "{} Configuration generated to {}",
                "✓".green(),
                path.display().to_string().yellow()
            );
            true
        }
        Ok(None) => true,
        Err(e) => {
            println!("{} {e}", "✗".red());
            false
        }
    }
}
