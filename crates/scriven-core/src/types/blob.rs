//! Generic input reference consumed by blob parsers.

use serde::{Deserialize, Serialize};

/// A reference to a piece of input data, addressed by path.
///
/// Parsers decide for themselves which fields they consume; remote loaders
/// typically read only [`Blob::path`] and treat it as the locator of a
/// remotely stored resource.
///
/// # Examples
///
/// ```
/// use scriven_core::types::Blob;
///
/// let blob = Blob::from_path("gs://bucket/img.png").with_content_type("image/png");
/// assert_eq!(blob.path(), "gs://bucket/img.png");
/// assert_eq!(blob.content_type(), Some("image/png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// Path or locator of the referenced data.
    path: String,

    /// MIME type hint for the referenced data.
    content_type: Option<String>,
}

impl Blob {
    /// Creates a blob referencing the given path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: None,
        }
    }

    /// Sets the MIME type hint.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Returns the path of the referenced data.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the MIME type hint, when one was set.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}
