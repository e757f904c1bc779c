//! Board geometry
//!
//! Dice sit on a 4x4 grid in row-major order. A word is traced through
//! adjacent dice (including diagonals), using each die at most once.

use rustc_hash::FxHashSet;

/// Dice per row and per column
pub const BOARD_SIDE: usize = 4;

/// Total cells on the board
pub const BOARD_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

/// Cells touching `index`, in row-major order
///
/// # Panics
/// Panics if `index >= BOARD_SIZE`.
#[must_use]
pub fn neighbors(index: usize) -> Vec<usize> {
    assert!(index < BOARD_SIZE, "cell {index} is off the board");

    let row = index / BOARD_SIDE;
    let col = index % BOARD_SIDE;
    let rows = row.saturating_sub(1)..=(row + 1).min(BOARD_SIDE - 1);

    rows.flat_map(|r| {
        (col.saturating_sub(1)..=(col + 1).min(BOARD_SIDE - 1)).map(move |c| r * BOARD_SIDE + c)
    })
    .filter(|&n| n != index)
    .collect()
}

/// Whether two distinct cells touch
#[must_use]
pub fn is_adjacent(a: usize, b: usize) -> bool {
    if a >= BOARD_SIZE || b >= BOARD_SIZE || a == b {
        return false;
    }

    (a / BOARD_SIDE).abs_diff(b / BOARD_SIDE) <= 1 && (a % BOARD_SIDE).abs_diff(b % BOARD_SIDE) <= 1
}

/// The dice picked so far for the word being built
#[derive(Debug, Clone, Default)]
pub struct WordPath {
    cells: Vec<usize>,
    used: FxHashSet<usize>,
}

impl WordPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a cell
    ///
    /// The first pick may be anywhere; later picks must be unused and
    /// adjacent to the previous one. Returns whether the pick was accepted.
    pub fn try_push(&mut self, index: usize) -> bool {
        if index >= BOARD_SIZE || self.used.contains(&index) {
            return false;
        }
        if let Some(&last) = self.cells.last()
            && !is_adjacent(last, index)
        {
            return false;
        }

        self.cells.push(index);
        self.used.insert(index);
        true
    }

    /// Whether `index` may be picked next
    #[must_use]
    pub fn can_push(&self, index: usize) -> bool {
        index < BOARD_SIZE
            && !self.used.contains(&index)
            && self.cells.last().is_none_or(|&last| is_adjacent(last, index))
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.used.contains(&index)
    }

    #[must_use]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Spell the path using the given faces
    #[must_use]
    pub fn word(&self, faces: &[String]) -> String {
        self.cells
            .iter()
            .filter_map(|&i| faces.get(i))
            .map(String::as_str)
            .collect()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.used.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(neighbors(0), [1, 4, 5]);
        assert_eq!(neighbors(15), [10, 11, 14]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(neighbors(1), [0, 2, 4, 5, 6]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(neighbors(5), [0, 1, 2, 4, 6, 8, 9, 10]);
    }

    #[test]
    fn adjacency_matches_neighbors() {
        for a in 0..BOARD_SIZE {
            let around = neighbors(a);
            for b in 0..BOARD_SIZE {
                assert_eq!(is_adjacent(a, b), around.contains(&b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn row_wrap_is_not_adjacent() {
        // End of row 0 and start of row 1 are not neighbors
        assert!(!is_adjacent(3, 4));
    }

    #[test]
    fn path_requires_adjacent_unused_cells() {
        let mut path = WordPath::new();
        assert!(path.try_push(0));
        assert!(!path.try_push(0));
        assert!(!path.try_push(2));
        assert!(path.try_push(5));
        assert!(path.try_push(10));
        assert!(!path.try_push(16));
        assert_eq!(path.cells(), [0, 5, 10]);
    }

    #[test]
    fn path_spells_word() {
        let faces: Vec<String> = ["C", "A", "T", "S"]
            .iter()
            .chain(["QU", "I", "E", "T"].iter())
            .chain(["X"; 8].iter())
            .map(|s| (*s).to_string())
            .collect();

        let mut path = WordPath::new();
        for cell in [4, 5, 6, 7] {
            assert!(path.try_push(cell));
        }
        assert_eq!(path.word(&faces), "QUIET");

        path.clear();
        assert!(path.is_empty());
        assert!(path.can_push(12));
    }
}
