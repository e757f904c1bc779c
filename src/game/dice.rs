//! The standard Boggle dice set

use crate::core::Die;

/// Number of dice in a standard game
pub const NUMBER_OF_DICE: usize = 16;

/// Faces of the sixteen classic dice
pub const STANDARD_DICE: [[&str; 6]; NUMBER_OF_DICE] = [
    ["A", "A", "E", "E", "G", "N"],
    ["E", "L", "R", "T", "T", "Y"],
    ["W", "A", "O", "O", "T", "T"],
    ["A", "B", "B", "J", "O", "O"],
    ["E", "H", "R", "T", "V", "W"],
    ["C", "I", "M", "O", "T", "U"],
    ["D", "I", "S", "T", "T", "Y"],
    ["E", "I", "O", "S", "S", "T"],
    ["Y", "D", "E", "L", "R", "V"],
    ["A", "C", "H", "O", "P", "S"],
    ["U", "H", "I", "M", "N", "QU"],
    ["E", "E", "I", "N", "S", "U"],
    ["E", "E", "G", "H", "N", "W"],
    ["A", "F", "F", "K", "P", "S"],
    ["H", "L", "N", "N", "R", "Z"],
    ["X", "D", "E", "I", "L", "R"],
];

/// Build the standard dice, in their fixed starting order
#[must_use]
pub fn standard_dice() -> Vec<Die> {
    STANDARD_DICE
        .iter()
        .filter_map(|faces| Die::new(*faces).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_has_sixteen_six_sided_dice() {
        let dice = standard_dice();
        assert_eq!(dice.len(), NUMBER_OF_DICE);
        assert!(dice.iter().all(|d| d.faces().len() == 6));
    }

    #[test]
    fn only_one_qu_face() {
        let qu_faces = STANDARD_DICE
            .iter()
            .flatten()
            .filter(|&&face| face == "QU")
            .count();
        assert_eq!(qu_faces, 1);
    }
}
