//! TUI application state and logic

use crate::dictionary::Suggestions;
use crate::game::GameSession;
use crate::game::board::{BOARD_SIDE, BOARD_SIZE, WordPath};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashSet;
use std::io;

/// Application state
pub struct App<'a> {
    pub session: &'a mut GameSession,
    pub faces: Vec<String>,
    pub cursor: usize,
    pub path: WordPath,
    pub correct_words: Vec<String>,
    pub incorrect_words: Vec<String>,
    pub suggested_words: Suggestions,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    found: FxHashSet<String>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Cursor movement on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: &'a mut GameSession) -> Self {
        let faces = session.current_dice_faces();

        Self {
            session,
            faces,
            cursor: 0,
            path: WordPath::new(),
            correct_words: Vec::new(),
            incorrect_words: Vec::new(),
            suggested_words: Suggestions::new(),
            messages: vec![
                Message {
                    text: "Welcome! Build words from touching dice.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Arrows move, Space picks a die, Enter submits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            found: FxHashSet::default(),
        }
    }

    /// The word spelled by the picked dice
    #[must_use]
    pub fn current_word(&self) -> String {
        self.path.word(&self.faces)
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let row = self.cursor / BOARD_SIDE;
        let col = self.cursor % BOARD_SIDE;

        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(BOARD_SIDE - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(BOARD_SIDE - 1)),
        };
        self.cursor = row * BOARD_SIDE + col;
    }

    /// Pick the die under the cursor
    pub fn pick(&mut self) {
        if self.cursor >= BOARD_SIZE.min(self.faces.len()) {
            return;
        }
        if !self.path.try_push(self.cursor) {
            self.add_message("That die isn't next to the last one", MessageStyle::Error);
        }
    }

    /// Submit the current word for checking
    pub fn submit(&mut self) {
        let word = self.current_word().to_lowercase();
        self.path.clear();

        if word.is_empty() {
            return;
        }

        if !self.session.is_legal_word(&word) {
            self.incorrect_words.push(word.to_uppercase());
            self.add_message(
                &format!("{} is not a word", word.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        if !self.found.insert(word.clone()) {
            self.add_message(
                &format!("{} already found", word.to_uppercase()),
                MessageStyle::Info,
            );
            return;
        }

        self.correct_words.push(word.to_uppercase());
        self.suggested_words = self.session.similar_words_for(&word);
        self.add_message(
            &format!(
                "{} is a word! {} similar",
                word.to_uppercase(),
                self.suggested_words.len()
            ),
            MessageStyle::Success,
        );
    }

    pub fn clear_word(&mut self) {
        self.path.clear();
    }

    /// Deal a new board and clear all word lists
    pub fn reroll(&mut self) {
        self.session.reroll_dice();
        self.faces = self.session.current_dice_faces();
        self.path.clear();
        self.correct_words.clear();
        self.incorrect_words.clear();
        self.suggested_words.clear();
        self.found.clear();
        self.add_message("New board dealt!", MessageStyle::Info);
    }

    /// Number of distinct words found on this board
    #[must_use]
    pub fn score(&self) -> usize {
        self.correct_words.len()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('r') => app.reroll(),
                KeyCode::Up => app.move_cursor(Direction::Up),
                KeyCode::Down => app.move_cursor(Direction::Down),
                KeyCode::Left => app.move_cursor(Direction::Left),
                KeyCode::Right => app.move_cursor(Direction::Right),
                KeyCode::Char(' ') => app.pick(),
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace | KeyCode::Esc => app.clear_word(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordStore;
    use crate::game::SessionConfig;

    fn session() -> GameSession {
        GameSession::new(
            WordStore::embedded().unwrap(),
            SessionConfig::new(Some(17)),
        )
    }

    #[test]
    fn cursor_stays_on_board() {
        let mut session = session();
        let mut app = App::new(&mut session);

        app.move_cursor(Direction::Up);
        app.move_cursor(Direction::Left);
        assert_eq!(app.cursor, 0);

        for _ in 0..10 {
            app.move_cursor(Direction::Right);
            app.move_cursor(Direction::Down);
        }
        assert_eq!(app.cursor, BOARD_SIZE - 1);
    }

    #[test]
    fn picking_builds_word_from_faces() {
        let mut session = session();
        let mut app = App::new(&mut session);

        app.pick();
        app.move_cursor(Direction::Right);
        app.pick();

        let expected = format!("{}{}", app.faces[0], app.faces[1]);
        assert_eq!(app.current_word(), expected);
    }

    #[test]
    fn non_adjacent_pick_is_rejected() {
        let mut session = session();
        let mut app = App::new(&mut session);

        app.pick();
        app.move_cursor(Direction::Right);
        app.move_cursor(Direction::Right);
        app.pick();

        assert_eq!(app.path.cells(), [0]);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn submit_sorts_words_into_lists() {
        let mut session = session();
        let mut app = App::new(&mut session);

        // Bypass the board and spell words directly
        app.faces = ["C", "A", "T", "X"]
            .iter()
            .chain(["X"; 12].iter())
            .map(|s| (*s).to_string())
            .collect();

        for cell in [0, 1, 2] {
            assert!(app.path.try_push(cell));
        }
        app.submit();
        assert_eq!(app.correct_words, ["CAT"]);
        assert!(app.suggested_words.contains("cat"));
        assert!(app.path.is_empty());

        for cell in [0, 1, 2] {
            app.path.try_push(cell);
        }
        app.submit();
        assert_eq!(app.score(), 1);

        for cell in [2, 3] {
            app.path.try_push(cell);
        }
        app.submit();
        assert_eq!(app.incorrect_words, ["TX"]);
    }

    #[test]
    fn reroll_clears_lists() {
        let mut session = session();
        let mut app = App::new(&mut session);
        app.correct_words.push("CAT".to_string());
        app.incorrect_words.push("XQZ".to_string());

        app.reroll();

        assert!(app.correct_words.is_empty());
        assert!(app.incorrect_words.is_empty());
        assert_eq!(app.faces, app.session.current_dice_faces());
    }

    #[test]
    fn messages_are_capped() {
        let mut session = session();
        let mut app = App::new(&mut session);
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }
}
