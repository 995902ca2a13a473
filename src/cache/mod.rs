//! Memoizing decorator for breed sources.
//!
//! [`CachingBreedSource`] wraps any [`BreedSource`] and remembers every
//! successful lookup for the lifetime of the wrapper. Failures are never
//! remembered: a breed that failed is looked up again on the next call.
//!
//! # Call accounting
//!
//! [`CachingBreedSource::calls_made`] counts invocations of the wrapped
//! source, successful or not. Cache hits do not count.
//!
//! # Concurrency
//!
//! Misses go through moka's `try_get_with`, so concurrent lookups of the
//! same uncached breed share one invocation of the wrapped source (and one
//! counter increment). An `Err` from the initializer is handed to every
//! waiter and nothing is inserted. Lookups of different breeds do not block
//! each other.
//!
//! There is no eviction and no TTL: an entry, once created, is never
//! replaced or removed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::source::BreedSource;
use crate::telemetry;
use crate::Result;

/// A [`BreedSource`] that memoizes the successful results of another one.
///
/// ```rust,no_run
/// # use kennel::{BreedSource, CachingBreedSource, DogApiSource};
/// # async fn demo() -> kennel::Result<()> {
/// let source = CachingBreedSource::new(DogApiSource::new()?);
///
/// let first = source.lookup("hound").await?;
/// let second = source.lookup("hound").await?;
/// assert_eq!(first, second);
/// assert_eq!(source.calls_made(), 1);
/// # Ok(())
/// # }
/// ```
pub struct CachingBreedSource<S> {
    inner: S,
    cache: Cache<String, Vec<String>>,
    calls_made: AtomicU64,
}

impl<S: BreedSource> CachingBreedSource<S> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Cache::builder().build(),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Number of times the wrapped source has been invoked.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }

    /// Whether `breed` has a cached result.
    pub fn is_cached(&self, breed: &str) -> bool {
        self.cache.contains_key(breed)
    }

    /// Number of cached breeds.
    pub async fn len(&self) -> u64 {
        // entry_count lags behind inserts until pending maintenance runs
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Whether nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap, discarding the cache.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: BreedSource> BreedSource for CachingBreedSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn lookup(&self, breed: &str) -> Result<Vec<String>> {
        if let Some(sub_breeds) = self.cache.get(breed).await {
            debug!(breed, source = self.inner.name(), "sub-breed cache hit");
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "source" => self.inner.name().to_owned())
                .increment(1);
            return Ok(sub_breeds);
        }

        self.cache
            .try_get_with(breed.to_owned(), async {
                self.calls_made.fetch_add(1, Ordering::Relaxed);
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "source" => self.inner.name().to_owned())
                    .increment(1);
                debug!(breed, source = self.inner.name(), "sub-breed cache miss");
                self.inner.lookup(breed).await
            })
            .await
            .map_err(Arc::unwrap_or_clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KennelError, NotFoundCause};

    struct Echo;

    #[async_trait]
    impl BreedSource for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn lookup(&self, breed: &str) -> Result<Vec<String>> {
            if breed == "missing" {
                return Err(KennelError::not_found(breed, NotFoundCause::Status(404)));
            }
            Ok(vec![format!("{breed}-a"), format!("{breed}-b")])
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let source = CachingBreedSource::new(Echo);
        assert_eq!(source.calls_made(), 0);
        assert!(source.is_empty().await);
        assert!(!source.is_cached("hound"));
    }

    #[tokio::test]
    async fn len_counts_successful_breeds_only() {
        let source = CachingBreedSource::new(Echo);
        source.lookup("hound").await.unwrap();
        source.lookup("terrier").await.unwrap();
        source.lookup("hound").await.unwrap();
        assert!(source.lookup("missing").await.is_err());

        assert_eq!(source.len().await, 2);
        assert_eq!(source.calls_made(), 3);
    }

    #[tokio::test]
    async fn name_delegates_to_inner() {
        let source = CachingBreedSource::new(Echo);
        assert_eq!(source.name(), "echo");
    }

    #[tokio::test]
    async fn into_inner_returns_wrapped_source() {
        let source = CachingBreedSource::new(Echo);
        source.lookup("hound").await.unwrap();
        let inner = source.into_inner();
        assert_eq!(inner.lookup("pug").await.unwrap(), vec!["pug-a", "pug-b"]);
    }

    #[tokio::test]
    async fn decorators_stack() {
        let source = CachingBreedSource::new(CachingBreedSource::new(Echo));
        source.lookup("hound").await.unwrap();
        source.lookup("hound").await.unwrap();
        assert_eq!(source.calls_made(), 1);
        assert_eq!(source.inner().calls_made(), 1);
    }
}
