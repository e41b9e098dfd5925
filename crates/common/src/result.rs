//! Conversion result types

use serde::{Deserialize, Serialize};

/// The outcome of a successful converter run
///
/// Each document is one structured unit (a YAML value) that is serialized
/// independently before being joined into the final multi-document output.
/// A result with no documents is treated by the pipeline as no result at
/// all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Generated documents, in emission order
    pub documents: Vec<serde_yaml::Value>,
}

impl ConversionResult {
    /// Create a result from a sequence of generated documents
    pub fn new(documents: Vec<serde_yaml::Value>) -> Self {
        Self { documents }
    }

    /// True when the converter produced nothing usable
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_empty() {
        assert!(ConversionResult::default().is_empty());
        assert!(ConversionResult::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_result_preserves_document_order() {
        let docs = vec![
            serde_yaml::Value::String("first".into()),
            serde_yaml::Value::String("second".into()),
        ];
        let result = ConversionResult::new(docs.clone());
        assert_eq!(result.documents, docs);
        assert!(!result.is_empty());
    }
}
