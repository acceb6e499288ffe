//! TUI application state and logic

use super::status::StatusLine;
use crate::core::{MAX_GUESSES, Scoring, WORD_SIZE, Word};
use crate::game::GameState;
use crate::wordlists::{Dictionary, WordList, random_target};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a rejected-guess message stays on the status line
pub const STATUS_DURATION: Duration = Duration::from_secs(1);

/// Input poll interval while no status reset is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 0 = solved on the first guess
    pub guess_distribution: [usize; MAX_GUESSES],
}

impl Statistics {
    fn record<D: Dictionary>(&mut self, game: &GameState<D>) {
        self.games_played += 1;
        if game.is_word_guessed() {
            self.games_won += 1;
            if let Some(slot) = self
                .guess_distribution
                .get_mut(game.current_turn().saturating_sub(1))
            {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Application state
pub struct App<'a> {
    pub game: GameState<&'a WordList>,
    pub dictionary: &'a WordList,
    pub answers: &'a [&'a str],
    pub scoring: Scoring,
    /// Letters typed for the guess being composed
    pub active_guess: String,
    pub status: StatusLine,
    pub show_debug: bool,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        target: Word,
        dictionary: &'a WordList,
        answers: &'a [&'a str],
        scoring: Scoring,
        rng: StdRng,
    ) -> Self {
        Self {
            game: GameState::new(target, dictionary).with_scoring(scoring),
            dictionary,
            answers,
            scoring,
            active_guess: String::new(),
            status: StatusLine::new(),
            show_debug: false,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    #[must_use]
    pub fn with_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }

    /// Handle one key event at time `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'd') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if self.game.should_end_game() => self.new_game(),
            _ if self.game.should_end_game() => {}
            KeyCode::Enter => self.submit_active_guess(now),
            KeyCode::Backspace => {
                self.active_guess.pop();
            }
            KeyCode::Char(c) if !ctrl => self.push_char(c),
            _ => {}
        }
    }

    fn push_char(&mut self, c: char) {
        if self.active_guess.len() < WORD_SIZE && c.is_ascii_alphabetic() {
            self.active_guess.push(c.to_ascii_uppercase());
        }
    }

    /// Submit the typed letters to the game
    ///
    /// Rejected guesses keep the typed letters and flash the error.
    pub fn submit_active_guess(&mut self, now: Instant) {
        if let Err(err) = self.game.submit(&self.active_guess) {
            self.status.set(err.to_string(), STATUS_DURATION, now);
            return;
        }

        self.active_guess.clear();

        if self.game.should_end_game() {
            self.stats.record(&self.game);
            let message = if self.game.is_word_guessed() {
                format!(
                    "You got it in {}/{MAX_GUESSES}! Press Enter to play again.",
                    self.game.current_turn()
                )
            } else {
                format!(
                    "The word was {}. Press Enter to play again.",
                    self.game.target()
                )
            };
            self.status.set_sticky(message);
        }
    }

    /// Start a new game with a random target
    ///
    /// Keeps the current target if no answer can be picked.
    pub fn new_game(&mut self) {
        let target = random_target(self.answers, &mut self.rng)
            .unwrap_or_else(|| self.game.target().clone());

        self.game = GameState::new(target, self.dictionary).with_scoring(self.scoring);
        self.active_guess.clear();
        self.status.reset();
    }

    /// Advance timers to `now`
    pub fn tick(&mut self, now: Instant) {
        self.status.tick(now);
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.status
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
