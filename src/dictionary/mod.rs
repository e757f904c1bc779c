//! Word dictionary
//!
//! The sorted word store, its loaders, and the dictionary embedded at build time.

mod embedded;
mod error;
pub mod loader;
mod store;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use error::LoadError;
pub use store::{
    LENGTH_MISMATCH, SIMILARITY_THRESHOLD, Suggestions, WordStore, hamming_distance,
};

impl WordStore {
    /// Load a store from a dictionary file
    ///
    /// # Errors
    ///
    /// See [`loader::load_from_file`].
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, LoadError> {
        loader::load_from_file(path)
    }

    /// Parse whitespace-separated words into a store
    ///
    /// # Errors
    ///
    /// See [`loader::parse`].
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        loader::parse(text, "text")
    }

    /// Build a store from the embedded dictionary
    ///
    /// # Errors
    ///
    /// See [`loader::embedded`].
    pub fn embedded() -> Result<Self, LoadError> {
        loader::embedded()
    }
}
