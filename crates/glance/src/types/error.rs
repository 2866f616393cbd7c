/*! Error types for Glance operations. */

/// Errors that can occur during Glance operations.
///
/// Resolution itself is infallible - a query that does not apply simply
/// returns `None`. Errors only arise at the raw-integer boundary where
/// skin expressions hand over untyped info codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GlanceError {
  #[error("Unknown info code: {0}")]
  UnknownCode(u32),
}

/// Result type for Glance operations.
pub type GlanceResult<T> = Result<T, GlanceError>;
