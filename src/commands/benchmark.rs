//! Benchmark command
//!
//! Tests solver performance across many secrets.

use crate::core::{Code, Score};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Give up on a secret after this many guesses
pub const MAX_TURNS: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Secrets that needed the most guesses, hardest first
    pub hardest: Vec<(Code, usize)>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Play one secret to the end; returns the number of guesses if solved
fn play_secret<S: Strategy>(solver: &Solver<S>, secret: &Code) -> Option<usize> {
    let mut history: Vec<(Code, Score)> = Vec::new();

    for turn in 1..=MAX_TURNS {
        let guess = solver.next_guess(&history)?;
        let score = Score::calculate(guess, secret);

        if score.is_win() {
            return Some(turn);
        }
        history.push((*guess, score));
    }

    None
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░")
}

/// Run benchmark on a set of secrets
///
/// Set `show_progress` to draw a progress bar on stderr.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Code],
    show_progress: bool,
) -> BenchmarkResult {
    let pb = ProgressBar::new(secrets.len() as u64);
    if show_progress {
        pb.set_style(bar_style());
    } else {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut per_secret: Vec<(Code, usize)> = Vec::with_capacity(secrets.len());

    for (idx, secret) in secrets.iter().enumerate() {
        if let Some(guesses) = play_secret(solver, secret) {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
            per_secret.push((*secret, guesses));
        } else {
            warn!(%secret, "solver failed to find secret");
        }

        if idx % 50 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.3}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    per_secret.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    per_secret.truncate(5);

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    info!(total_secrets, solved, average_guesses, "benchmark finished");

    BenchmarkResult {
        total_secrets,
        solved,
        total_guesses,
        average_guesses,
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        hardest: per_secret,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
