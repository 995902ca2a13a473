//! The breed lookup capability.
//!
//! Sources implement [`BreedSource`] and decorators wrap any implementer
//! (e.g. [`CachingBreedSource`](crate::CachingBreedSource)), so a chain of
//! sources reads the same as a single one.
//!
//! # Failure semantics
//!
//! Every failure is reported as [`KennelError::BreedNotFound`](crate::KennelError::BreedNotFound),
//! whether the breed is unknown, the transport broke, or the response could
//! not be read. Decorators must not tell these apart.
//!
//! # Example
//!
//! ```ignore
//! struct Fixed;
//!
//! #[async_trait]
//! impl BreedSource for Fixed {
//!     fn name(&self) -> &str {
//!         "fixed"
//!     }
//!
//!     async fn lookup(&self, breed: &str) -> Result<Vec<String>> {
//!         match breed {
//!             "hound" => Ok(vec!["afghan".into(), "basset".into()]),
//!             _ => Err(KennelError::not_found(breed, NotFoundCause::Status(404))),
//!         }
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::Result;

/// Resolves a breed name to its sub-breed names.
#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Source name for logging/metrics.
    fn name(&self) -> &str;

    /// Fetch the sub-breeds of `breed`, in the order the source reports them.
    ///
    /// The list may be empty. Any failure is a `BreedNotFound`.
    async fn lookup(&self, breed: &str) -> Result<Vec<String>>;
}
