//! Roll command
//!
//! Deals a fresh board.

use crate::game::GameSession;

/// A freshly dealt board
pub struct RollResult {
    /// Showing faces in board order
    pub faces: Vec<String>,
    /// Every face of each die, in board order
    pub dice: Vec<String>,
}

/// Shuffle and roll the dice, returning the new board
pub fn roll_board(session: &mut GameSession) -> RollResult {
    session.reroll_dice();

    RollResult {
        faces: session.current_dice_faces(),
        dice: session.dice().iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordStore;
    use crate::game::{NUMBER_OF_DICE, SessionConfig};

    #[test]
    fn roll_deals_full_board() {
        let mut session = GameSession::new(WordStore::default(), SessionConfig::new(Some(3)));
        let result = roll_board(&mut session);

        assert_eq!(result.faces.len(), NUMBER_OF_DICE);
        assert_eq!(result.dice.len(), NUMBER_OF_DICE);
        for (face, die) in result.faces.iter().zip(&result.dice) {
            assert!(die.split(", ").any(|f| f == face), "{face} not on {die}");
        }
    }
}
