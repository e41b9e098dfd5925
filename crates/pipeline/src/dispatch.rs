//! Converter dispatch
//!
//! Maps a resolved source onto the matching converter entry point and
//! normalizes converter failures into "no result".

use crate::resolve::ResolvedSpec;
use kongen_common::{ConversionKind, ConversionResult};
use kongen_converter::SpecConverter;
use tracing::{error, trace, warn};

/// Convert a resolved specification with the selector for `kind`
///
/// Converter errors are expected operational failures: they are logged at
/// diagnostic level and collapsed to `None`. A conversion that produced
/// zero documents is treated the same way, so callers see one uniform
/// "nothing generated" outcome.
pub fn convert_resolved(
    converter: &dyn SpecConverter,
    kind: ConversionKind,
    resolved: &ResolvedSpec,
) -> Option<ConversionResult> {
    let selector = kind.selector();
    let attempt = match resolved {
        ResolvedSpec::Contents(contents) => {
            trace!(selector, "generating config from in-memory contents");
            converter.convert_contents(contents, selector)
        }
        ResolvedSpec::File(path) => {
            trace!(selector, path = %path.display(), "generating config from file");
            converter.convert_file(path, selector)
        }
    };

    match attempt {
        Ok(result) if result.is_empty() => {
            warn!(selector, "converter produced no documents");
            None
        }
        Ok(result) => Some(result),
        Err(e) => {
            error!(selector, "conversion failed: {e}");
            None
        }
    }
}
