//! Dictionary loading utilities
//!
//! Builds a [`WordStore`] from a file, a string, or the embedded word list.

use super::{DICTIONARY, LoadError, WordStore};
use std::fs;
use std::path::Path;

/// Parse whitespace-separated words into a store
///
/// Tokens are trimmed but not case-folded. A source that is not already
/// sorted and duplicate-free is repaired, with a warning, so the store's
/// ordering always holds.
///
/// # Errors
///
/// Returns [`LoadError::Empty`] if the text contains no words.
///
/// # Examples
/// ```
/// use boggle::dictionary::loader::parse;
///
/// let store = parse("can car\n cat\ndog\n", "inline").unwrap();
/// assert_eq!(store.len(), 4);
/// ```
pub fn parse(text: &str, source_name: &str) -> Result<WordStore, LoadError> {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    from_tokens(words, source_name)
}

/// Load a dictionary file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use boggle::dictionary::loader::load_from_file;
///
/// let store = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content, &path.display().to_string())
}

/// Build a store from the dictionary compiled into the binary
///
/// # Errors
///
/// Returns [`LoadError::Empty`] if the embedded list is empty.
pub fn embedded() -> Result<WordStore, LoadError> {
    words_from_slice(DICTIONARY, "embedded")
}

/// Build a store from a string slice, such as an embedded constant
///
/// # Errors
///
/// Returns [`LoadError::Empty`] if the slice holds no non-blank words.
pub fn words_from_slice(slice: &[&str], source_name: &str) -> Result<WordStore, LoadError> {
    let words = slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    from_tokens(words, source_name)
}

fn from_tokens(words: Vec<String>, source_name: &str) -> Result<WordStore, LoadError> {
    if words.is_empty() {
        return Err(LoadError::Empty {
            source_name: source_name.to_string(),
        });
    }

    let store = if words.windows(2).all(|pair| pair[0] < pair[1]) {
        WordStore::from_sorted(words)
    } else {
        tracing::warn!(
            source = source_name,
            "dictionary is not sorted or has duplicates; sorting it"
        );
        WordStore::from_words(words)
    };

    tracing::info!(source = source_name, words = store.len(), "dictionary loaded");
    Ok(store)
}
