//! Common error type definitions.

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// This type is used at the provider seams so that backend errors cross the
/// trait boundary without being reshaped, while maintaining Send and Sync
/// bounds for multi-threaded contexts.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;
