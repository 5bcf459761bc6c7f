//! Text detection provider abstractions.
//!
//! This module defines the seam between loaders and concrete detection
//! backends. A backend takes a locator for a remotely stored image and
//! returns the ordered list of text annotations the service produced;
//! callers decide which entries to consume.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::BoxedError;

/// A single text annotation returned by a detection backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnnotation {
    /// Detected text for this annotation.
    pub description: String,

    /// Language tag reported by the backend, when available.
    pub locale: Option<String>,
}

impl TextAnnotation {
    /// Creates an annotation with the given text.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            locale: None,
        }
    }

    /// Sets the language tag.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Ordered text annotations for one analyzed image.
///
/// Annotations keep the backend's native order. Full-image OCR services
/// conventionally place the whole-image text first, followed by per-block
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Annotations in the backend's order.
    pub annotations: Vec<TextAnnotation>,
}

impl Detection {
    /// Creates a detection from a list of annotations.
    pub fn new(annotations: Vec<TextAnnotation>) -> Self {
        Self { annotations }
    }

    /// Creates a detection with no annotations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks whether the backend returned any annotations.
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Core trait for remote text detection backends.
///
/// Implementations hold whatever client state they need and issue one
/// remote call per invocation. Errors cross this boundary as
/// [`BoxedError`] so the caller sees the backend's own error type and
/// message.
#[async_trait]
pub trait TextDetector: Send + Sync {
    /// Runs text detection against the image identified by `locator`.
    async fn detect_text(&self, locator: &str) -> Result<Detection, BoxedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_preserves_order() {
        let detection = Detection::new(vec![
            TextAnnotation::new("full page").with_locale("en"),
            TextAnnotation::new("word"),
        ]);
        assert!(!detection.is_empty());
        assert_eq!(detection.annotations[0].description, "full page");
        assert_eq!(detection.annotations[0].locale.as_deref(), Some("en"));
        assert_eq!(detection.annotations[1].locale, None);
    }

    #[test]
    fn empty_detection() {
        assert!(Detection::empty().is_empty());
    }
}
