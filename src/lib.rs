//! Bulls and Cows
//!
//! The 4-digit number-guessing game with a minimax solver.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::{Code, Score};
//! use bulls_and_cows::game::{Game, GameState};
//!
//! let secret = Code::new("1234").unwrap();
//! let guess = Code::new("4321").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!((score.bulls(), score.hits()), (0, 4));
//!
//! let mut game = Game::new(secret);
//! game.submit_str("1234").unwrap();
//! assert_eq!(game.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
