//! Sorted word store
//!
//! Exact membership by binary search and a "similar word" lookup that only
//! scans the run of words sharing the query's first letter.

use std::collections::BTreeSet;
use std::ops::Range;

/// Distance reported for words of different lengths.
///
/// Anything above [`SIMILARITY_THRESHOLD`] works; 10 keeps the value readable.
pub const LENGTH_MISMATCH: usize = 10;

/// Maximum Hamming distance for two words to count as similar
pub const SIMILARITY_THRESHOLD: usize = 1;

/// Suggestions returned by a similarity query, ordered and duplicate-free
pub type Suggestions = BTreeSet<String>;

/// A lexicographically sorted, duplicate-free list of lowercase words
///
/// The list stays sorted for its whole lifetime: construction either trusts
/// a sorted source or sorts it, and [`WordStore::add`] inserts in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    /// Build a store from words already in sorted order
    ///
    /// The order is trusted, not checked; use [`WordStore::from_words`] for
    /// input of unknown order.
    #[must_use]
    pub const fn from_sorted(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Build a store from words in any order, sorting and deduplicating them
    ///
    /// # Examples
    /// ```
    /// use boggle::dictionary::WordStore;
    ///
    /// let store = WordStore::from_words(["dog", "cat", "cat"]);
    /// assert_eq!(store.words(), ["cat", "dog"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Number of stored words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All stored words, in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Insert `word` at its sorted position unless it is already present
    ///
    /// Returns `true` if the word was inserted. Empty strings are ignored.
    pub fn add(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        match self.search(word) {
            Ok(_) => false,
            Err(pos) => {
                self.words.insert(pos, word.to_string());
                true
            }
        }
    }

    /// Check whether `word` is stored. Case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use boggle::dictionary::WordStore;
    ///
    /// let store = WordStore::from_words(["can", "car", "cat", "dog"]);
    /// assert!(store.contains("cat"));
    /// assert!(!store.contains("bat"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_ok()
    }

    /// Binary search over `[low, high)`, narrowing on lexicographic order
    fn search(&self, word: &str) -> Result<usize, usize> {
        let mut low = 0;
        let mut high = self.words.len();

        while low < high {
            let mid = low + (high - low) / 2;
            match self.words[mid].as_str().cmp(word) {
                std::cmp::Ordering::Equal => return Ok(mid),
                std::cmp::Ordering::Greater => high = mid,
                std::cmp::Ordering::Less => low = mid + 1,
            }
        }

        Err(low)
    }

    /// Index range of the run of words starting with `first`
    ///
    /// The range is empty (at the position such words would occupy) when no
    /// stored word starts with `first`.
    #[must_use]
    pub fn run_for(&self, first: char) -> Range<usize> {
        let start = self
            .words
            .partition_point(|w| w.chars().next().is_none_or(|c| c < first));
        let len = self.words[start..].partition_point(|w| w.starts_with(first));
        start..start + len
    }

    /// Every stored word sharing the first letter of `word` and within
    /// [`SIMILARITY_THRESHOLD`] substitutions of it
    ///
    /// The word itself is included when stored. An empty query matches
    /// nothing.
    ///
    /// # Examples
    /// ```
    /// use boggle::dictionary::WordStore;
    ///
    /// let store = WordStore::from_words(["can", "car", "cat", "dog"]);
    /// let similar: Vec<_> = store.words_similar_to("cat").into_iter().collect();
    /// assert_eq!(similar, ["can", "car", "cat"]);
    /// ```
    #[must_use]
    pub fn words_similar_to(&self, word: &str) -> Suggestions {
        let Some(first) = word.chars().next() else {
            return Suggestions::new();
        };

        self.words[self.run_for(first)]
            .iter()
            .filter(|candidate| hamming_distance(word, candidate) <= SIMILARITY_THRESHOLD)
            .cloned()
            .collect()
    }
}

/// Count the positions at which two equal-length words differ
///
/// Returns [`LENGTH_MISMATCH`] when the lengths (in characters) differ, so
/// insertions and deletions never count as similar.
///
/// # Examples
/// ```
/// use boggle::dictionary::{LENGTH_MISMATCH, hamming_distance};
///
/// assert_eq!(hamming_distance("cat", "cot"), 1);
/// assert_eq!(hamming_distance("cat", "cats"), LENGTH_MISMATCH);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    if a.chars().count() != b.chars().count() {
        return LENGTH_MISMATCH;
    }

    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}
