//! Game session
//!
//! Ties the word store to the dice on the table. Front ends talk to the game
//! only through this type.

use super::dice::standard_dice;
use crate::core::{Die, FisherYates, Shuffler};
use crate::dictionary::{Suggestions, WordStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shortest word that can score
pub const MIN_WORD_LENGTH: usize = 3;

/// Configuration for a new session
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Seed for the random generator; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// A game in progress
///
/// One random generator drives both shuffling and rolling, so a seeded
/// session always deals the same boards.
pub struct GameSession<S: Shuffler = FisherYates> {
    dictionary: WordStore,
    dice: Vec<Die>,
    shuffler: S,
    rng: StdRng,
}

impl GameSession {
    /// Start a game with the standard dice, dealing the first board
    #[must_use]
    pub fn new(dictionary: WordStore, config: SessionConfig) -> Self {
        Self::with_dice(dictionary, standard_dice(), FisherYates, config.rng())
    }
}

impl<S: Shuffler> GameSession<S> {
    /// Start a game with a custom dice set and shuffler, dealing the first board
    #[must_use]
    pub fn with_dice(dictionary: WordStore, dice: Vec<Die>, shuffler: S, rng: StdRng) -> Self {
        let mut session = Self {
            dictionary,
            dice,
            shuffler,
            rng,
        };
        session.reroll_dice();
        session
    }

    /// Shuffle the dice on the board and roll each one
    pub fn reroll_dice(&mut self) {
        self.shuffler.shuffle(&mut self.dice, &mut self.rng);
        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }
        tracing::debug!(faces = ?self.current_dice_faces(), "dice rerolled");
    }

    /// Faces showing on each die, in board order
    #[must_use]
    pub fn current_dice_faces(&self) -> Vec<String> {
        self.dice
            .iter()
            .map(|die| die.current_face().to_string())
            .collect()
    }

    /// Copies of the dice in board order
    #[must_use]
    pub fn dice(&self) -> Vec<Die> {
        self.dice.clone()
    }

    /// Whether `candidate` is long enough and in the dictionary
    ///
    /// Case-insensitive: the candidate is lower-cased before lookup.
    ///
    /// # Examples
    /// ```
    /// use boggle::dictionary::WordStore;
    /// use boggle::game::{GameSession, SessionConfig};
    ///
    /// let store = WordStore::from_words(["at", "cat"]);
    /// let session = GameSession::new(store, SessionConfig::new(Some(1)));
    /// assert!(session.is_legal_word("CAT"));
    /// assert!(!session.is_legal_word("at"));
    /// ```
    #[must_use]
    pub fn is_legal_word(&self, candidate: &str) -> bool {
        candidate.chars().count() >= MIN_WORD_LENGTH
            && self.dictionary.contains(&candidate.to_lowercase())
    }

    /// Near-miss suggestions for `word`
    ///
    /// Expects a lower-case word, typically one that already passed
    /// [`GameSession::is_legal_word`].
    #[must_use]
    pub fn similar_words_for(&self, word: &str) -> Suggestions {
        self.dictionary.words_similar_to(word)
    }

    /// Teach the dictionary a new word
    ///
    /// Returns `true` if the word was not already known.
    pub fn add_word(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        let added = self.dictionary.add(&word);
        if added {
            tracing::debug!(%word, size = self.dictionary.len(), "word added to dictionary");
        }
        added
    }

    #[must_use]
    pub const fn dictionary(&self) -> &WordStore {
        &self.dictionary
    }
}
