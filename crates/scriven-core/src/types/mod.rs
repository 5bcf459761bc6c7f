//! Uniform data types shared across the scriven ecosystem.

mod blob;
mod document;

pub use blob::Blob;
pub use document::{Document, METADATA_SOURCE_KEY};
