//! TUI rendering with ratatui
//!
//! Draws the status line, the guess grid and an optional debug line, centered
//! in the terminal.

use super::app::App;
use crate::core::{Guess, LetterStatus, MAX_GUESSES, WORD_SIZE};
use crate::output::formatters::{COLOR_PRIMARY, status_rgb};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const BOX_WIDTH: u16 = 5;
const BOX_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = BOX_WIDTH * WORD_SIZE as u16;
const GRID_HEIGHT: u16 = BOX_HEIGHT * MAX_GUESSES as u16;
const PANEL_WIDTH: u16 = 60;

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn status_color(status: LetterStatus) -> Color {
    rgb(status_rgb(status))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let debug_height = u16::from(app.show_debug);
    let panel = centered_rect(PANEL_WIDTH, GRID_HEIGHT + 5 + debug_height, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Status
            Constraint::Length(1),            // Spacer
            Constraint::Length(GRID_HEIGHT),  // Grid
            Constraint::Length(1),            // Spacer
            Constraint::Length(debug_height), // Debug
            Constraint::Length(1),            // Stats
            Constraint::Length(1),            // Help
        ])
        .split(panel);

    render_status(f, app, chunks[0]);
    render_rows(f, app, centered_rect(GRID_WIDTH, GRID_HEIGHT, chunks[2]));
    if app.show_debug {
        render_debug(f, app, chunks[4]);
    }
    render_stats(f, app, chunks[5]);
    render_help(f, app, chunks[6]);
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status.text())
        .style(
            Style::default()
                .fg(rgb(COLOR_PRIMARY))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_rows(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let turn = game.current_turn();

    for row in 0..MAX_GUESSES {
        let cells = if let Some(guess) = game.guesses().get(row) {
            past_guess_cells(guess)
        } else if row == turn && !game.should_end_game() {
            active_guess_cells(&app.active_guess)
        } else {
            vec![(' ', LetterStatus::None); WORD_SIZE]
        };

        for (col, (ch, status)) in cells.into_iter().enumerate() {
            let cell = Rect {
                x: area.x + col as u16 * BOX_WIDTH,
                y: area.y + row as u16 * BOX_HEIGHT,
                width: BOX_WIDTH,
                height: BOX_HEIGHT,
            }
            .intersection(f.area());

            if !cell.is_empty() {
                render_letter_box(f, ch, status, cell);
            }
        }
    }
}

fn past_guess_cells(guess: &Guess) -> Vec<(char, LetterStatus)> {
    guess.letters().iter().map(|l| (l.char, l.status)).collect()
}

fn active_guess_cells(active: &str) -> Vec<(char, LetterStatus)> {
    let typed = active.chars().count();
    let mut cells: Vec<(char, LetterStatus)> = active
        .chars()
        .map(|c| (c, LetterStatus::None))
        .collect();

    for i in typed..WORD_SIZE {
        let ch = if i == typed { '_' } else { ' ' };
        cells.push((ch, LetterStatus::None));
    }
    cells
}

fn render_letter_box(f: &mut Frame, ch: char, status: LetterStatus, area: Rect) {
    let color = status_color(status);
    let mut style = Style::default().fg(color);
    if status.is_scored() {
        style = style.add_modifier(Modifier::BOLD);
    }

    let letter = Paragraph::new(ch.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(letter, area);
}

fn render_debug(f: &mut Frame, app: &App, area: Rect) {
    let debug = Paragraph::new(format!("[DEBUG] Correct word: {}", app.game.target()))
        .style(Style::default().fg(rgb(COLOR_PRIMARY)))
        .alignment(Alignment::Center);
    f.render_widget(debug, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = Paragraph::new(format!(
        "Turn {}/{MAX_GUESSES} | Games: {} | Win Rate: {:.0}%",
        app.game.current_turn(),
        app.stats.games_played,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.should_end_game() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
