//! Error handling types and utilities.

/// A specialized Result type for grimmiz-catalog operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods on fallible setup paths (configuration, snapshots).
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a content-source operation fails.
///
/// The query builder and the relevance wrapper propagate this untouched; how it
/// is presented (error page, retry prompt) is the embedding page layer's call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// The hosted backend could not be reached at all.
    #[error("content source unavailable: {reason}")]
    Unavailable { reason: String },
    /// The backend answered, but with an error for this operation.
    #[error("content source rejected {operation}: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },
}

impl SourceError {
    /// Shorthand for an unreachable-backend error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Shorthand for a per-operation backend error.
    pub fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            operation,
            message: message.into(),
        }
    }
}
