//! Mock text detection provider for testing.

use async_trait::async_trait;
use scriven_core::detect::{Detection, TextAnnotation, TextDetector};
use scriven_core::BoxedError;

/// Error returned by a [`MockDetector`] configured to fail.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockDetectorError(pub String);

/// Canned outcome a [`MockDetector`] replays on every call.
#[derive(Debug, Clone)]
enum Outcome {
    Detect(Detection),
    Fail(String),
}

/// Mock text detection provider for testing.
///
/// Replays a fixed outcome for every request, regardless of locator.
#[derive(Debug, Clone)]
pub struct MockDetector {
    outcome: Outcome,
}

impl MockDetector {
    /// Creates a mock that returns no annotations.
    pub fn empty() -> Self {
        Self {
            outcome: Outcome::Detect(Detection::empty()),
        }
    }

    /// Creates a mock that returns one annotation per given text, in order.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let annotations = texts.into_iter().map(TextAnnotation::new).collect();
        Self {
            outcome: Outcome::Detect(Detection::new(annotations)),
        }
    }

    /// Creates a mock that returns the given detection verbatim.
    pub fn with_detection(detection: Detection) -> Self {
        Self {
            outcome: Outcome::Detect(detection),
        }
    }

    /// Creates a mock that fails every call with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
        }
    }
}

impl Default for MockDetector {
    fn default() -> Self {
        Self::empty()
    }
}

#[async_trait]
impl TextDetector for MockDetector {
    async fn detect_text(&self, _locator: &str) -> Result<Detection, BoxedError> {
        match &self.outcome {
            Outcome::Detect(detection) => Ok(detection.clone()),
            Outcome::Fail(message) => Err(Box::new(MockDetectorError(message.clone()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_annotations_in_order() {
        let detector = MockDetector::with_texts(["line1", "line2"]);
        let detection = detector.detect_text("gs://bucket/img.png").await.unwrap();

        assert_eq!(detection.annotations.len(), 2);
        assert_eq!(detection.annotations[0].description, "line1");
        assert_eq!(detection.annotations[1].description, "line2");
    }

    #[tokio::test]
    async fn failing_mock_preserves_message() {
        let detector = MockDetector::failing("quota exceeded");
        let error = detector.detect_text("gs://bucket/img.png").await.unwrap_err();

        assert_eq!(error.to_string(), "quota exceeded");
        assert!(error.downcast_ref::<MockDetectorError>().is_some());
    }
}
