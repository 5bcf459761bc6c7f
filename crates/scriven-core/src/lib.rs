#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//! # Scriven Core
//!
//! This crate provides the foundational abstractions for document loading in the
//! scriven ecosystem. It defines the uniform [`Document`] output shape, the generic
//! [`Blob`] input reference, and the provider traits implemented by detection
//! backends and loaders, without depending on any concrete implementation.

/// Tracing target for blob parsing operations.
pub const TRACING_TARGET_PARSER: &str = "scriven_core::parser";

/// Tracing target for text detection operations.
pub const TRACING_TARGET_DETECT: &str = "scriven_core::detect";

mod error;

pub mod detect;
pub mod parser;
pub mod types;

// Re-export key types for convenience
pub use detect::{Detection, TextAnnotation, TextDetector};
pub use error::BoxedError;
pub use parser::{BlobParser, DocumentStream};
pub use types::{Blob, Document};
