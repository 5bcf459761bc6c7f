//! Cloud Vision HTTP client implementation.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use scriven_core::BoxedError;
use scriven_core::detect::{Detection, TextDetector};
use tracing::debug;
use url::Url;

use crate::schema::{
    BatchAnnotateImagesRequest, BatchAnnotateImagesResponse, EntityAnnotation, ErrorEnvelope,
};
use crate::{Error, GvConfig, GvCredentials, Result, VISION_TARGET};

/// HTTP client for Cloud Vision text detection.
///
/// The underlying connection pool is created once at construction and held
/// for the client's lifetime; cloning shares it. One call issues one
/// request; there is no retry or batching here.
///
/// # Examples
///
/// ```ignore
/// use scriven_vision::{GvClient, GvConfig, GvCredentials};
///
/// let config = GvConfig::new(GvCredentials::api_key("my-key"));
/// let client = GvClient::new(config)?;
///
/// let annotations = client.text_detection("gs://bucket/img.png").await?;
/// ```
#[derive(Debug, Clone)]
pub struct GvClient {
    /// HTTP client
    http_client: Client,

    /// Configuration
    config: GvConfig,
}

impl GvClient {
    /// Create a new Vision client with the given configuration.
    pub fn new(config: GvConfig) -> Result<Self> {
        let headers = Self::default_headers(&config)?;

        let http_client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            target: VISION_TARGET,
            endpoint = %config.endpoint(),
            timeout = ?config.timeout(),
            "Vision client initialized"
        );

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Get a reference to the client configuration.
    pub fn config(&self) -> &GvConfig {
        &self.config
    }

    /// Run text detection on a remotely stored image.
    ///
    /// Issues one `images:annotate` call referencing `image_uri` and
    /// returns the annotation list in the service's order (whole-image
    /// text first). An empty list is a successful outcome, not an error.
    pub async fn text_detection(&self, image_uri: &str) -> Result<Vec<EntityAnnotation>> {
        let url = self.annotate_url()?;
        let request = BatchAnnotateImagesRequest::text_detection(image_uri);

        debug!(
            target: VISION_TARGET,
            image_uri,
            "Sending text detection request"
        );

        let response = self.http_client.post(url).json(&request).send().await?;
        self.handle_response(response).await
    }

    /// Headers attached to every request.
    fn default_headers(config: &GvConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "x-goog-api-client",
            HeaderValue::from_str(config.user_agent())
                .map_err(|e| Error::config(format!("Invalid user agent: {}", e)))?,
        );

        if let Some(project) = config.quota_project() {
            headers.insert(
                "x-goog-user-project",
                HeaderValue::from_str(project)
                    .map_err(|e| Error::config(format!("Invalid quota project: {}", e)))?,
            );
        }

        if let GvCredentials::AccessToken(token) = config.credentials() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::config(format!("Invalid access token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// The annotate endpoint, with the API key attached when one is used.
    fn annotate_url(&self) -> Result<Url> {
        let mut url = self
            .config
            .endpoint()
            .join("/v1/images:annotate")
            .map_err(|e| Error::config(format!("Failed to construct API URL: {}", e)))?;

        if let GvCredentials::ApiKey(key) = self.config.credentials() {
            url.query_pairs_mut().append_pair("key", key);
        }

        Ok(url)
    }

    /// Decode the batch response, surfacing per-image failures.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Vec<EntityAnnotation>> {
        let status = response.status();

        debug!(
            target: VISION_TARGET,
            status = status.as_u16(),
            "Received response from Vision"
        );

        if !status.is_success() {
            let body = response.text().await.ok();
            let envelope = body
                .as_deref()
                .and_then(|b| serde_json::from_str::<ErrorEnvelope>(b).ok());

            return Err(match envelope {
                Some(envelope) => Error::api(
                    status.as_u16(),
                    envelope.error.message,
                    envelope.error.status,
                ),
                None => Error::api(
                    status.as_u16(),
                    body.unwrap_or_else(|| status.to_string()),
                    None,
                ),
            });
        }

        let batch: BatchAnnotateImagesResponse = response.json().await.map_err(|e| {
            Error::invalid_response(format!("Failed to decode annotate response: {}", e), None)
        })?;

        let annotated = batch.responses.into_iter().next().ok_or_else(|| {
            Error::invalid_response("Annotate response contained no entries", None)
        })?;

        if let Some(error) = annotated.error {
            return Err(Error::api(error.code, error.message, error.status));
        }

        Ok(annotated.text_annotations)
    }
}

#[async_trait]
impl TextDetector for GvClient {
    async fn detect_text(&self, locator: &str) -> Result<Detection, BoxedError> {
        let annotations = self
            .text_detection(locator)
            .await
            .map_err(|e| -> BoxedError { Box::new(e) })?;

        Ok(Detection::new(
            annotations.into_iter().map(Into::into).collect(),
        ))
    }
}
