//! Game state
//!
//! The session that front ends drive, the standard dice, and board geometry.

pub mod board;
pub mod dice;
mod session;

pub use dice::{NUMBER_OF_DICE, STANDARD_DICE, standard_dice};
pub use session::{GameSession, MIN_WORD_LENGTH, SessionConfig};
