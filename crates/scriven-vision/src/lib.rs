#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # scriven-vision
//!
//! A thin HTTP client and document loader for Google Cloud Vision text
//! detection.
//!
//! ## Quick Start
//!
//! ```ignore
//! use scriven_vision::CloudVisionLoader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), scriven_vision::Error> {
//!     // Credentials come from the environment; the optional argument is
//!     // the project billed for quota.
//!     let loader = CloudVisionLoader::new(Some("my-project"))?;
//!
//!     let document = loader.load("gs://bucket/receipt.png").await?;
//!     println!("{}", document.page_content);
//!
//!     Ok(())
//! }
//! ```

use scriven_core::BoxedError;

// Tracing targets for observability
/// Logging target for Vision client operations.
pub const VISION_TARGET: &str = "scriven_vision::client";

/// Logging target for loader operations.
pub const LOADER_TARGET: &str = "scriven_vision::loader";

// Core modules
pub mod client;
pub mod loader;
pub mod schema;

pub use client::{GvClient, GvConfig, GvCredentials};
pub use loader::CloudVisionLoader;

/// Result type for all Vision operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error types for Vision operations.
///
/// The only failure authored by this crate itself is [`Error::Config`],
/// raised at construction time; everything else originates from the remote
/// service or the transport and is surfaced without reshaping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP client errors (connection, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code, or the service's numeric error code
        status: u16,
        /// Error message from the API
        message: String,
        /// Optional symbolic error code from the API
        code: Option<String>,
    },

    /// Invalid or malformed API response
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of what's invalid
        message: String,
        /// Optional raw response body for debugging
        body: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Failure raised by an injected detection backend
    #[error(transparent)]
    Detect(BoxedError),
}

impl Error {
    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>, code: Option<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            code,
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>, body: Option<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            body,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the HTTP status code if this is an HTTP/API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is a local configuration problem rather than a
    /// remote failure
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let api_err = Error::api(403, "Permission denied", Some("PERMISSION_DENIED".into()));
        assert_eq!(api_err.status_code(), Some(403));
        assert!(!api_err.is_config());
        assert_eq!(
            api_err.to_string(),
            "API error (status 403): Permission denied"
        );

        let config_err = Error::config("Missing API key");
        assert!(config_err.is_config());
        assert_eq!(config_err.status_code(), None);
    }

    #[test]
    fn test_detect_error_is_transparent() {
        let inner: BoxedError = "quota exceeded".into();
        let err = Error::Detect(inner);
        assert_eq!(err.to_string(), "quota exceeded");
        assert_eq!(err.status_code(), None);
    }
}
