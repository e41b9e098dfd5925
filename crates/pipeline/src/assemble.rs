//! Multi-document assembly
//!
//! Serializes each generated document and joins them into one YAML
//! multi-document stream: exactly one `---` line between adjacent
//! documents, no blank-line padding around separators or at the edges,
//! and a single trailing newline.

use kongen_common::Result;

/// Serialize and join generated documents
///
/// For N documents the output contains exactly N−1 separator lines.
/// Never invoked with zero documents; upstream treats that as failure.
pub fn assemble_documents(documents: &[serde_yaml::Value]) -> Result<String> {
    let mut fragments = Vec::with_capacity(documents.len());
    for document in documents {
        fragments.push(serde_yaml::to_string(document)?);
    }
    Ok(join_fragments(&fragments))
}

/// Join serialized fragments with normalized separators
///
/// Trimming newline runs at every fragment edge before joining collapses
/// whatever leading or trailing blank lines serialization produced, so the
/// separator always sits between single newlines.
fn join_fragments(fragments: &[String]) -> String {
    let body = fragments
        .iter()
        .map(|fragment| fragment.trim_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n---\n");
    format!("{body}\n")
}
