//! Serde types for the `images:annotate` REST surface.
//!
//! Only the subset of the Vision API schema that text detection needs is
//! modeled here: the batched request envelope, remote image sources,
//! feature selection, text annotations, and the error `Status` payload.

use serde::{Deserialize, Serialize};

/// Batched annotation request; the envelope the API accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnnotateImagesRequest {
    /// Individual image requests.
    pub requests: Vec<AnnotateImageRequest>,
}

impl BatchAnnotateImagesRequest {
    /// Builds the single-image text detection request for `image_uri`.
    pub fn text_detection(image_uri: impl Into<String>) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: Image {
                    source: ImageSource {
                        image_uri: image_uri.into(),
                    },
                },
                features: vec![Feature {
                    feature_type: FeatureType::TextDetection,
                    max_results: None,
                }],
            }],
        }
    }
}

/// Annotation request for a single image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateImageRequest {
    /// The image to analyze.
    pub image: Image,
    /// Requested detection features.
    pub features: Vec<Feature>,
}

/// An image addressed by a remote source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Where the image lives.
    pub source: ImageSource,
}

/// Remote image source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    /// Cloud-storage or HTTP URI of the image.
    pub image_uri: String,
}

/// A requested detection feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Which detection to run.
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    /// Upper bound on returned results, when the feature supports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// Detection features this crate can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    /// Sparse text detection (whole-image text first, blocks after).
    TextDetection,
    /// Dense document text detection.
    DocumentTextDetection,
}

/// Batched annotation response; one entry per request, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchAnnotateImagesResponse {
    /// Per-image responses.
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

/// Annotation response for a single image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    /// Text annotations, whole-image entry first.
    #[serde(default)]
    pub text_annotations: Vec<EntityAnnotation>,
    /// Set when this image failed even though the batch succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

/// A detected entity; for text detection, one piece of recognized text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    /// The recognized text.
    #[serde(default)]
    pub description: String,
    /// Language tag of the text, when detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl From<EntityAnnotation> for scriven_core::detect::TextAnnotation {
    fn from(annotation: EntityAnnotation) -> Self {
        Self {
            description: annotation.description,
            locale: annotation.locale,
        }
    }
}

/// Error payload used both per image and in the top-level error envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    /// Numeric error code.
    #[serde(default)]
    pub code: u16,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Symbolic error code, e.g. `PERMISSION_DENIED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Top-level error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// The error payload.
    pub error: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_detection_request_shape() {
        let request = BatchAnnotateImagesRequest::text_detection("gs://bucket/img.png");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["requests"][0]["image"]["source"]["imageUri"],
            "gs://bucket/img.png"
        );
        assert_eq!(json["requests"][0]["features"][0]["type"], "TEXT_DETECTION");
        assert!(json["requests"][0]["features"][0].get("maxResults").is_none());
    }

    #[test]
    fn response_decodes_annotations() {
        let body = r#"{
            "responses": [{
                "textAnnotations": [
                    {"locale": "en", "description": "full page"},
                    {"description": "full"}
                ]
            }]
        }"#;

        let response: BatchAnnotateImagesResponse = serde_json::from_str(body).unwrap();
        let annotations = &response.responses[0].text_annotations;
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].description, "full page");
        assert_eq!(annotations[0].locale.as_deref(), Some("en"));
        assert!(response.responses[0].error.is_none());
    }

    #[test]
    fn response_decodes_per_image_error() {
        let body = r#"{
            "responses": [{
                "error": {"code": 7, "message": "image not accessible"}
            }]
        }"#;

        let response: BatchAnnotateImagesResponse = serde_json::from_str(body).unwrap();
        let error = response.responses[0].error.as_ref().unwrap();
        assert_eq!(error.code, 7);
        assert_eq!(error.message, "image not accessible");
        assert!(response.responses[0].text_annotations.is_empty());
    }

    #[test]
    fn error_envelope_decodes() {
        let body = r#"{
            "error": {"code": 403, "message": "permission denied", "status": "PERMISSION_DENIED"}
        }"#;

        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, 403);
        assert_eq!(envelope.error.status.as_deref(), Some("PERMISSION_DENIED"));
    }
}
