//! Kennel error types

/// Why a breed could not be resolved.
///
/// Diagnostic detail only: every cause surfaces as
/// [`KennelError::BreedNotFound`], and callers are expected to treat them
/// alike.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundCause {
    /// The upstream answered with a non-success HTTP status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The request never produced a usable response (connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Kennel error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KennelError {
    /// The only error a [`BreedSource`](crate::BreedSource) lookup produces.
    #[error("breed not found: {breed} ({cause})")]
    BreedNotFound { breed: String, cause: NotFoundCause },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl KennelError {
    /// Shorthand for a [`KennelError::BreedNotFound`].
    pub fn not_found(breed: impl Into<String>, cause: NotFoundCause) -> Self {
        Self::BreedNotFound {
            breed: breed.into(),
            cause,
        }
    }

    /// Whether this is a [`KennelError::BreedNotFound`], whatever the cause.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BreedNotFound { .. })
    }
}

/// Result type alias for Kennel operations
pub type Result<T> = std::result::Result<T, KennelError>;
