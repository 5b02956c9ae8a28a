//! TUI application state and logic

use crate::core::{CODE_LENGTH, Code};
use crate::game::{Game, GameState};
use crate::solver::{MinimaxStrategy, Solver};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a, MinimaxStrategy>,
    pub game: Game,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

/// One graded guess with the candidate count it left behind
#[derive(Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub score: crate::core::Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Default)]
pub struct Statistics {
    pub games_won: usize,
    pub total_guesses: usize,
    pub best_game: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl<'a> App<'a> {
    /// Create the app over the full code space
    ///
    /// A fixed `seed` makes the sequence of secrets reproducible.
    #[must_use]
    pub fn new(all_codes: &'a [Code], seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let game = Game::random(&mut rng);

        let mut app = Self {
            solver: Solver::new(MinimaxStrategy, all_codes, all_codes),
            game,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.add_message(
            "I'm thinking of 4 distinct digits. Type a guess and press Enter.",
            MessageStyle::Info,
        );
        app
    }

    fn solver_history(&self) -> Vec<(Code, crate::core::Score)> {
        self.history.iter().map(|e| (e.guess, e.score)).collect()
    }

    /// Codes still consistent with every score so far
    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.solver.count_candidates(&self.solver_history())
    }

    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.input_buffer.len() < CODE_LENGTH {
            self.input_buffer.push(c);
        }
    }

    pub fn submit_guess(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);
        let candidates_before = self.get_candidates_count();

        match self.game.submit_str(&raw) {
            Ok(round) => {
                self.history.push(HistoryEntry {
                    guess: round.guess,
                    score: round.score,
                    candidates_before,
                    candidates_after: 0,
                });
                let candidates_after = self.get_candidates_count();
                if let Some(last) = self.history.last_mut() {
                    last.candidates_after = candidates_after;
                }

                if self.game.state() == GameState::Won {
                    let turns = self.game.turns();
                    self.stats.games_won += 1;
                    self.stats.total_guesses += turns;
                    self.stats.best_game =
                        Some(self.stats.best_game.map_or(turns, |best| best.min(turns)));
                    self.input_mode = InputMode::WinCelebration;

                    let celebration = match turns {
                        1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                        2..=4 => "🔥 MAGNIFICENT! 🔥",
                        5 | 6 => "✨ SPLENDID! ✨",
                        7 => "👏 GREAT JOB! 👏",
                        _ => "🎊 SOLVED! 🎊",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        &format!("You win in {turns} guesses! Press 'n' for new game or 'q' to quit."),
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message(
                        &format!("{raw}: {} ({candidates_after} codes possible)", round.score),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Show the solver's suggestion for the current position
    pub fn show_hint(&mut self) {
        let suggestion = self.solver.next_guess(&self.solver_history()).copied();
        match suggestion {
            Some(code) => self.add_message(&format!("Hint: try {code}"), MessageStyle::Info),
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::random(&mut self.rng);
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! New secret chosen.", MessageStyle::Info);
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
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
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Char('h') if app.input_mode == InputMode::Guessing => app.show_hint(),
                KeyCode::Char(c) if app.input_mode == InputMode::Guessing => app.push_digit(c),
                KeyCode::Backspace if app.input_mode == InputMode::Guessing => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter if app.input_mode == InputMode::Guessing => app.submit_guess(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
