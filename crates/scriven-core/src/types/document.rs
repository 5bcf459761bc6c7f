//! Uniform document representation produced by loaders and parsers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata key under which loaders record the originating locator.
pub const METADATA_SOURCE_KEY: &str = "source";

/// A uniform document carrying extracted text plus metadata.
///
/// Loaders produce one [`Document`] per loaded item. The `page_content`
/// field holds the extracted text, which may be empty when the backend
/// found nothing; `metadata` carries provenance and processing hints as
/// string-keyed JSON values. Ownership transfers to the caller and the
/// document is not mutated after construction.
///
/// # Examples
///
/// ```
/// use scriven_core::types::Document;
///
/// let doc = Document::new("Hello, world!").with_source("gs://bucket/hello.png");
/// assert_eq!(doc.page_content, "Hello, world!");
/// assert_eq!(doc.source(), Some("gs://bucket/hello.png"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Extracted text content.
    pub page_content: String,

    /// String-keyed metadata attached to this document.
    pub metadata: HashMap<String, Value>,
}

impl Document {
    /// Creates a new document with the given page content and no metadata.
    pub fn new(page_content: impl Into<String>) -> Self {
        Self {
            page_content: page_content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Adds a metadata entry to this document.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Records the originating locator under [`METADATA_SOURCE_KEY`].
    pub fn with_source(self, source: impl Into<String>) -> Self {
        self.with_metadata(METADATA_SOURCE_KEY, source.into())
    }

    /// Returns the originating locator, when one was recorded.
    pub fn source(&self) -> Option<&str> {
        self.metadata.get(METADATA_SOURCE_KEY).and_then(Value::as_str)
    }

    /// Checks whether any text content is present.
    pub fn has_content(&self) -> bool {
        !self.page_content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_no_metadata() {
        let doc = Document::new("text");
        assert_eq!(doc.page_content, "text");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.source(), None);
    }

    #[test]
    fn with_source_sets_single_key() {
        let doc = Document::new("").with_source("gs://bucket/img.png");
        assert_eq!(doc.metadata.len(), 1);
        assert_eq!(doc.source(), Some("gs://bucket/img.png"));
        assert!(!doc.has_content());
    }

    #[test]
    fn metadata_values_are_json() {
        let doc = Document::new("text")
            .with_metadata("pages", 3)
            .with_source("file.png");
        assert_eq!(doc.metadata["pages"], Value::from(3));
        assert_eq!(doc.source(), Some("file.png"));
    }
}
