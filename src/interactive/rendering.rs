//! TUI rendering with ratatui
//!
//! Board, word lists and status for the Boggle interface.

use super::app::{App, MessageStyle};
use crate::game::board::BOARD_SIDE;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Current word
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // Correct words
            Constraint::Percentage(40), // Board + messages
            Constraint::Percentage(20), // Incorrect words
            Constraint::Percentage(20), // Suggestions
        ])
        .split(chunks[1]);

    render_word_list(f, " Correct Words ", &app.correct_words, Color::Green, main_chunks[0]);
    render_middle_panel(f, app, main_chunks[1]);
    render_word_list(f, " Incorrect Words ", &app.incorrect_words, Color::Red, main_chunks[2]);
    render_suggestions(f, app, main_chunks[3]);

    render_current_word(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎲 BOGGLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_middle_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BOARD_SIDE as u16 * 2 + 2), // Board
            Constraint::Min(3),                            // Messages
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(BOARD_SIDE * 2);

    for (row, faces) in app.faces.chunks(BOARD_SIDE).enumerate() {
        let spans: Vec<Span> = faces
            .iter()
            .enumerate()
            .map(|(col, face)| {
                let index = row * BOARD_SIDE + col;
                let mut style = if app.path.contains(index) {
                    Style::default().fg(Color::Black).bg(Color::Blue)
                } else if app.path.can_push(index) {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                if index == app.cursor {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                Span::styled(format!(" {face:<2} "), style)
            })
            .collect();

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_word_list(f: &mut Frame, title: &str, words: &[String], color: Color, area: Rect) {
    let items: Vec<ListItem> = words
        .iter()
        .rev()
        .map(|word| ListItem::new(word.clone()))
        .collect();

    let list = List::new(items).style(Style::default().fg(color)).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggested_words
        .iter()
        .map(|word| ListItem::new(word.to_uppercase()))
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::Yellow)).block(
        Block::default()
            .title(" Suggested Words ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_current_word(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.current_word())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Current Word | Space: pick  Enter: submit  Esc: clear ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let score = Paragraph::new(format!("Words found: {}", app.score())).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let dictionary = Paragraph::new(format!(
        "Dictionary: {} words",
        app.session.dictionary().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[1]);

    let help = Paragraph::new("q: Quit | r: Re-roll | ←↑↓→: Move")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
