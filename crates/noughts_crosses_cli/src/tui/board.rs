//! Board view rendering.

use super::app::App;
use crate::config::AppConfig;
use crate::render::{cell_text, headline, turn_line};
use noughts_crosses::{GameStatus, Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const BOARD_WIDTH: u16 = 29;
const BOARD_HEIGHT: u16 = 11;

/// Draws the whole screen: status, board, turn line and key help.
pub fn render(f: &mut Frame, app: &App, config: &AppConfig) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Noughts and Crosses ");
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let state = app.state();
    let headline_style = match state.status() {
        GameStatus::InProgress => Style::default(),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    };
    f.render_widget(
        Paragraph::new(headline(state, config))
            .style(headline_style)
            .alignment(Alignment::Center),
        rows[0],
    );

    render_board(f, center_rect(rows[2], BOARD_WIDTH, BOARD_HEIGHT), app, config);

    // Turn counter while playing, New Game once finished.
    let footer = turn_line(state).unwrap_or_else(|| "[n] New Game".to_string());
    f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), rows[3]);

    if let Some(message) = app.message() {
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center),
            rows[4],
        );
    }

    f.render_widget(
        Paragraph::new("arrows move · enter place · 0-8 place · q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        rows[5],
    );
}

fn render_board(f: &mut Frame, area: Rect, app: &App, config: &AppConfig) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    for row in 0..3 {
        render_row(f, rows[row * 2], app, config, row);
        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, app: &App, config: &AppConfig, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_square(f, cols[col * 2], app, config, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            f.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, app: &App, config: &AppConfig, pos: Position) {
    let board = app.state().board();
    let mut style = match board.get(pos) {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        Mark::Nought => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Mark::Cross => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    };
    if pos == app.cursor() && !app.state().is_game_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let text = format!("\n{}\n", cell_text(board, pos.to_index(), config));
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

/// Centers a `width` x `height` rectangle inside `area`, clamped to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
