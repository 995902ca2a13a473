//! Breed sources: the lookup trait and the dog.ceo implementation.

pub mod dog_api;
pub mod traits;

pub use dog_api::{DEFAULT_BASE_URL, DogApiSource};
pub use traits::BreedSource;
