//! Simple interactive CLI mode
//!
//! Text-based game without TUI: the board is printed, words are typed in.

use super::check::check_word;
use crate::game::GameSession;
use crate::output::formatters::{format_grid, format_suggestions};
use anyhow::Result;
use rustc_hash::FxHashSet;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut GameSession) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Play a text game reading commands from `input`
///
/// Returns the number of distinct words found since the last reroll.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> io::Result<usize> {
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║          Boggle - Interactive Mode       ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "Type words made from adjacent dice.")?;
    writeln!(
        out,
        "Commands: 'roll' for new dice, 'add <word>' to teach a word, 'quit' to exit\n"
    )?;

    let mut found: FxHashSet<String> = FxHashSet::default();
    writeln!(out, "{}\n", format_grid(&session.current_dice_faces()))?;

    loop {
        write!(out, "Word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line.split_once(' ').unwrap_or((line, "")) {
            ("", _) => {}
            ("quit" | "q" | "exit", _) => break,
            ("roll" | "r", _) => {
                session.reroll_dice();
                found.clear();
                writeln!(out, "\n🎲 New board\n")?;
                writeln!(out, "{}\n", format_grid(&session.current_dice_faces()))?;
            }
            ("add", word) if !word.trim().is_empty() => {
                if session.add_word(word) {
                    writeln!(out, "✓ Added {}", word.trim().to_uppercase())?;
                } else {
                    writeln!(out, "{} is already known", word.trim().to_uppercase())?;
                }
            }
            _ => {
                let result = check_word(session, line);
                if !result.legal {
                    writeln!(out, "❌ {} is not a word", result.word.to_uppercase())?;
                } else if found.insert(result.word.clone()) {
                    writeln!(
                        out,
                        "✅ {} ({} found)",
                        result.word.to_uppercase(),
                        found.len()
                    )?;
                    writeln!(
                        out,
                        "   Similar: {}",
                        format_suggestions(&result.suggestions)
                    )?;
                } else {
                    writeln!(out, "{} already found", result.word.to_uppercase())?;
                }
            }
        }
    }

    writeln!(out, "\n👋 Found {} words. Thanks for playing!", found.len())?;
    Ok(found.len())
}
