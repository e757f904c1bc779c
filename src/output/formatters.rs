//! Formatting utilities for terminal output

use crate::dictionary::Suggestions;
use crate::game::board::BOARD_SIDE;

/// Render dice faces as a square grid, one row per line
///
/// Faces are padded so that two-letter faces such as `QU` keep columns
/// aligned.
#[must_use]
pub fn format_grid(faces: &[String]) -> String {
    faces
        .chunks(BOARD_SIDE)
        .map(|row| {
            row.iter()
                .map(|face| format!("{face:<3}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Upper-case suggestions joined with commas, or a dash when there are none
#[must_use]
pub fn format_suggestions(suggestions: &Suggestions) -> String {
    if suggestions.is_empty() {
        return "-".to_string();
    }

    suggestions
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(letters: &str) -> Vec<String> {
        letters.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn grid_has_four_rows() {
        let grid = format_grid(&faces("A B C D E F G H I J K L M N O P"));
        assert_eq!(grid, "A  B  C  D\nE  F  G  H\nI  J  K  L\nM  N  O  P");
    }

    #[test]
    fn grid_aligns_qu() {
        let grid = format_grid(&faces("QU B C D E F G H I J K L M N O P"));
        assert!(grid.starts_with("QU B  C  D\n"));
    }

    #[test]
    fn suggestions_upper_cased_in_order() {
        let suggestions: Suggestions = ["cat", "can"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(format_suggestions(&suggestions), "CAN, CAT");
        assert_eq!(format_suggestions(&Suggestions::new()), "-");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
