//! Document loader backed by Cloud Vision text detection.

use std::sync::Arc;

use futures_util::stream;
use scriven_core::detect::TextDetector;
use scriven_core::parser::{BlobParser, DocumentStream};
use scriven_core::types::{Blob, Document};
use tracing::debug;

use crate::client::{GvClient, GvConfig};
use crate::{Error, LOADER_TARGET, Result};

/// Loads text out of remotely stored images, one document per image.
///
/// Each [`load`](CloudVisionLoader::load) call issues a single text
/// detection request and wraps the outcome in a [`Document`]: the page
/// content is the first annotation's text (the whole-image entry, under
/// the service's ordering) or the empty string when the service found
/// none, and the metadata carries the locator under `source`. An empty
/// result is not an error; only transport and configuration failures
/// surface as errors.
///
/// The loader holds one backend client for its lifetime and issues no
/// retries of its own.
#[derive(Clone)]
pub struct CloudVisionLoader {
    detector: Arc<dyn TextDetector>,
}

impl CloudVisionLoader {
    /// Creates a loader with credentials resolved from the environment.
    ///
    /// `project`, when given, is billed for the request quota. Fails with
    /// a configuration error, before any client is built, when no
    /// credentials can be resolved.
    pub fn new(project: Option<&str>) -> Result<Self> {
        let mut config = GvConfig::from_env()?;
        if let Some(project) = project {
            config = config.with_quota_project(project);
        }
        Self::with_config(config)
    }

    /// Creates a loader backed by a client built from `config`.
    pub fn with_config(config: GvConfig) -> Result<Self> {
        Ok(Self::from_detector(Arc::new(GvClient::new(config)?)))
    }

    /// Creates a loader backed by an arbitrary detection backend.
    pub fn from_detector(detector: Arc<dyn TextDetector>) -> Self {
        Self { detector }
    }

    /// Loads one remotely stored image into a document, text only.
    ///
    /// Backend failures propagate to the caller unmodified.
    pub async fn load(&self, locator: &str) -> Result<Document> {
        let detection = self
            .detector
            .detect_text(locator)
            .await
            .map_err(Error::Detect)?;

        // Annotation zero is the whole-image text; the per-block entries
        // that follow are not consulted.
        let text = detection
            .annotations
            .into_iter()
            .next()
            .map(|annotation| annotation.description)
            .unwrap_or_default();

        debug!(
            target: LOADER_TARGET,
            locator,
            bytes = text.len(),
            "image loaded"
        );

        Ok(Document::new(text).with_source(locator))
    }
}

impl BlobParser for CloudVisionLoader {
    /// Yields exactly one document for the image at `blob.path()`.
    fn lazy_parse<'a>(&'a self, blob: &'a Blob) -> DocumentStream<'a> {
        let locator = blob.path().to_owned();
        Box::pin(stream::once(async move {
            self.load(&locator).await.map_err(Into::into)
        }))
    }
}
