//! Mock implementations of detection providers for testing.
//!
//! This module provides a mock implementation of the [`TextDetector`]
//! seam defined in scriven-core. The mock returns a canned outcome and is
//! useful for unit and integration testing without network access.
//!
//! [`TextDetector`]: scriven_core::detect::TextDetector

mod detector;

pub use detector::{MockDetector, MockDetectorError};
