//! TUI rendering with ratatui
//!
//! Draws the word ladder as a grid of cells colored by validation status,
//! with the message history and a status bar underneath.

use super::app::App;
use crate::core::{Word, WordStatus};
use crate::game::{GameStatus, MessageKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = app.machine.board().num_words() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Min(5),               // Messages
            Constraint::Length(3),            // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let settings = app.machine.settings();
    let title = format!(
        "🪜 WORDHOP: {} letters, {} hops",
        settings.num_letters, settings.num_hops
    );
    let header = Paragraph::new(title)
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.machine.board();
    let cursor = app.machine.cursor();
    let show_cursor = app.machine.status() == GameStatus::Run && !board.overlay_active();

    let mut lines = Vec::with_capacity(board.num_words());
    for (row, word) in board.words().iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (col, letter) in word.letters().iter().enumerate() {
            let ch = letter.ch().unwrap_or('·');
            let mut style = cell_style(word);
            if show_cursor && cursor.word == row && cursor.letter == col {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {ch} "), style));
        }
        spans.push(Span::raw(format!("  {}", status_tag(word))));
        lines.push(Line::from(spans));
    }

    let title = if board.overlay_active() {
        " Board (solution) "
    } else {
        " Board "
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn cell_style(word: &Word) -> Style {
    if word.is_pair_word() {
        return Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
    }
    match word.status() {
        WordStatus::Solved => Style::default().fg(Color::Green),
        WordStatus::Wrong => Style::default().fg(Color::Red),
        WordStatus::Testing => Style::default().fg(Color::Yellow),
        WordStatus::Loading => Style::default().fg(Color::DarkGray),
        WordStatus::Broken => Style::default().fg(Color::Magenta),
        WordStatus::Initialized => Style::default().fg(Color::White),
    }
}

fn status_tag(word: &Word) -> &'static str {
    if word.is_pair_word() {
        return "";
    }
    match word.status() {
        WordStatus::Solved => "✓",
        WordStatus::Wrong => "✗",
        WordStatus::Testing => "…",
        WordStatus::Broken => "!",
        WordStatus::Loading | WordStatus::Initialized => "",
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.kind {
                MessageKind::Info => Style::default().fg(Color::White),
                MessageKind::Success => Style::default().fg(Color::Green),
                MessageKind::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (status_text, status_color) = match app.machine.status() {
        GameStatus::Initialize => ("Loading…", Color::Yellow),
        GameStatus::Run => ("Playing", Color::White),
        GameStatus::Win => ("You won! 🎉", Color::Green),
        GameStatus::Broken => ("Connection lost", Color::Red),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let timing_text = app
        .machine
        .last_round_trip()
        .map_or_else(String::new, |d| format!("server: {} ms", d.as_millis()));
    let timing = Paragraph::new(timing_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(timing, chunks[1]);

    let sound = Paragraph::new(app.sound_line.clone().unwrap_or_default())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sound, chunks[2]);

    let help_text = match app.machine.status() {
        GameStatus::Win | GameStatus::Broken => "n: New Game | q/Esc: Quit",
        GameStatus::Initialize | GameStatus::Run => {
            "Type letters | Enter: Test | F1: Hint | F5: New Game | Esc: Quit"
        }
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
