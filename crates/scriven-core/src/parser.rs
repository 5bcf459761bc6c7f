//! Blob parsing abstractions.

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::{Stream, StreamExt};

use crate::BoxedError;
use crate::types::{Blob, Document};

/// Type alias for the boxed stream of parsed documents.
///
/// Streams are finite and single-use; every [`BlobParser::lazy_parse`]
/// call produces a fresh one.
pub type DocumentStream<'a> =
    Pin<Box<dyn Stream<Item = Result<Document, BoxedError>> + Send + 'a>>;

/// Core trait for turning a [`Blob`] into documents.
#[async_trait]
pub trait BlobParser: Send + Sync {
    /// Lazily produces documents from `blob`.
    ///
    /// Nothing is computed until the returned stream is polled. The stream
    /// is not restartable once consumed.
    fn lazy_parse<'a>(&'a self, blob: &'a Blob) -> DocumentStream<'a>;

    /// Eagerly parses `blob`, collecting every document.
    ///
    /// The first failed item aborts collection and surfaces its error.
    async fn parse(&self, blob: &Blob) -> Result<Vec<Document>, BoxedError> {
        let mut stream = self.lazy_parse(blob);
        let mut documents = Vec::new();
        while let Some(document) = stream.next().await {
            documents.push(document?);
        }

        tracing::debug!(
            target: crate::TRACING_TARGET_PARSER,
            path = blob.path(),
            count = documents.len(),
            "blob parsed"
        );

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use futures_util::stream;

    use super::*;

    struct EchoParser;

    impl BlobParser for EchoParser {
        fn lazy_parse<'a>(&'a self, blob: &'a Blob) -> DocumentStream<'a> {
            let path = blob.path().to_owned();
            Box::pin(stream::once(async move {
                Ok(Document::new(path.clone()).with_source(path))
            }))
        }
    }

    #[tokio::test]
    async fn parse_collects_lazy_stream() {
        let blob = Blob::from_path("memory://echo");
        let documents = EchoParser.parse(&blob).await.unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].page_content, "memory://echo");
        assert_eq!(documents[0].source(), Some("memory://echo"));
    }

    #[tokio::test]
    async fn lazy_parse_yields_fresh_stream_per_call() {
        let blob = Blob::from_path("memory://echo");

        for _ in 0..2 {
            let mut stream = EchoParser.lazy_parse(&blob);
            assert!(stream.next().await.is_some());
            assert!(stream.next().await.is_none());
        }
    }
}
