//! Bulls and Cows solving algorithms
//!
//! Candidate filtering plus interchangeable guess selection strategies.

mod engine;
pub mod metrics;
pub mod strategy;

pub use engine::Solver;
pub use metrics::{GuessMetrics, calculate_entropy, calculate_max_remaining, calculate_metrics};
pub use strategy::{EntropyStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
