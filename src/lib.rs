//! Boggle
//!
//! A Boggle word game built around a sorted dictionary with fast exact lookup
//! and near-miss ("similar word") suggestions.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle::dictionary::WordStore;
//! use boggle::game::{GameSession, SessionConfig};
//!
//! let store = WordStore::from_words(["can", "car", "cat", "dog"]);
//! let mut session = GameSession::new(store, SessionConfig::new(Some(42)));
//!
//! session.reroll_dice();
//! println!("{:?}", session.current_dice_faces());
//!
//! assert!(session.is_legal_word("cat"));
//! assert_eq!(session.similar_words_for("cat").len(), 3);
//! ```

// Dice and shuffling
pub mod core;

// Sorted word store and loaders
pub mod dictionary;

// Game session and board geometry
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
