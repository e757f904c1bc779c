//! Word checking command
//!
//! Validates a word and gathers suggestions for it.

use crate::dictionary::{Suggestions, WordStore};
use crate::game::GameSession;

/// Result of checking a submitted word
pub struct CheckResult {
    pub word: String,
    pub legal: bool,
    pub suggestions: Suggestions,
}

/// Check a submitted word
///
/// Suggestions are only gathered for legal words; a rejected word gets an
/// empty set.
#[must_use]
pub fn check_word(session: &GameSession, word: &str) -> CheckResult {
    let word = word.trim().to_lowercase();
    let legal = session.is_legal_word(&word);
    let suggestions = if legal {
        session.similar_words_for(&word)
    } else {
        Suggestions::new()
    };

    CheckResult {
        word,
        legal,
        suggestions,
    }
}

/// Result of a similarity query
pub struct SimilarResult {
    pub word: String,
    pub in_dictionary: bool,
    pub suggestions: Suggestions,
    pub dictionary_size: usize,
}

/// Find words similar to `word`, whether or not it is itself a word
#[must_use]
pub fn similar_words(store: &WordStore, word: &str) -> SimilarResult {
    let word = word.trim().to_lowercase();

    SimilarResult {
        in_dictionary: store.contains(&word),
        suggestions: store.words_similar_to(&word),
        dictionary_size: store.len(),
        word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;

    fn session() -> GameSession {
        GameSession::new(
            WordStore::from_words(["at", "can", "car", "cat", "dog"]),
            SessionConfig::new(Some(1)),
        )
    }

    #[test]
    fn check_legal_word_has_suggestions() {
        let result = check_word(&session(), "  CAT ");

        assert_eq!(result.word, "cat");
        assert!(result.legal);
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn check_illegal_word_has_no_suggestions() {
        let result = check_word(&session(), "cab");
        assert!(!result.legal);
        assert!(result.suggestions.is_empty());

        let short = check_word(&session(), "at");
        assert!(!short.legal);
    }

    #[test]
    fn similar_words_for_unknown_word() {
        let store = WordStore::from_words(["can", "car", "cat", "dog"]);
        let result = similar_words(&store, "Cab");

        assert_eq!(result.word, "cab");
        assert!(!result.in_dictionary);
        assert_eq!(result.suggestions.len(), 3);
        assert_eq!(result.dictionary_size, 4);
    }
}
