//! Kennel - memoized sub-breed lookups
//!
//! This crate provides a [`BreedSource`] trait for resolving a dog breed to
//! its sub-breeds, a [`DogApiSource`] implementation backed by the dog.ceo
//! API, and a [`CachingBreedSource`] decorator that remembers successful
//! answers and counts how often the wrapped source was really called.
//!
//! # Example
//!
//! ```rust,no_run
//! use kennel::{BreedSource, CachingBreedSource, DogApiSource};
//!
//! #[tokio::main]
//! async fn main() -> kennel::Result<()> {
//!     let source = CachingBreedSource::new(DogApiSource::new()?);
//!
//!     for breed in ["hound", "terrier", "hound"] {
//!         let sub_breeds = source.lookup(breed).await?;
//!         println!("{breed}: {}", sub_breeds.join(", "));
//!     }
//!
//!     // "hound" was only fetched once
//!     assert_eq!(source.calls_made(), 2);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod source;
pub mod telemetry;

// Re-export main types at crate root
pub use cache::CachingBreedSource;
pub use config::{ApiConfig, Config};
pub use error::{KennelError, NotFoundCause, Result};
pub use source::{BreedSource, DogApiSource};

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
