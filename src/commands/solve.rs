//! Secret solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Code, Score};
use crate::solver::{Solver, Strategy, calculate_metrics};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific secret using the given solver and strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not 4 distinct digits
/// - The solver cannot provide a valid guess
pub fn solve_secret<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let secret = Code::new(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let mut history: Vec<(Code, Score)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.count_candidates(&history);

        let guess = solver
            .next_guess(&history)
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let current_candidates = solver.get_candidates(&history);
            let metrics = calculate_metrics(guess, &current_candidates);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let score = Score::calculate(guess, &secret);
        history.push((*guess, score));

        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            code: *guess,
            score,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        if score.is_win() {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::MinimaxStrategy;

    #[test]
    fn solve_secret_succeeds() {
        let all = Code::all();
        let solver = Solver::new(MinimaxStrategy, &all, &all);

        let result = solve_secret(SolveConfig::new("7031".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().code, result.secret);
    }

    #[test]
    fn solve_records_history() {
        let all = Code::all();
        let solver = Solver::new(MinimaxStrategy, &all, &all);

        let result = solve_secret(SolveConfig::new("5916".to_string()), &solver).unwrap();

        assert_eq!(result.guesses[0].candidates_before, 5040);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let all = Code::all();
        let solver = Solver::new(MinimaxStrategy, &all, &all);

        assert!(solve_secret(SolveConfig::new("1123".to_string()), &solver).is_err());
        assert!(solve_secret(SolveConfig::new("12".to_string()), &solver).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let all = Code::all();
        let solver = Solver::new(MinimaxStrategy, &all, &all);

        let mut config = SolveConfig::new("9876".to_string());
        config.max_guesses = 1;

        let result = solve_secret(config, &solver).unwrap();
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }

    #[test]
    fn solve_first_guess_secret() {
        let all = Code::all();
        let solver = Solver::new(MinimaxStrategy, &all, &all);

        let result = solve_secret(SolveConfig::new("0123".to_string()), &solver).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert!(result.guesses[0].entropy.is_some());
    }

    #[test]
    fn expected_remaining_agrees_with_analyze() {
        let all = Code::all();
        let solver = Solver::new(MinimaxStrategy, &all, &all);

        let result = solve_secret(SolveConfig::new("5916".to_string()), &solver).unwrap();
        let first = &result.guesses[0];
        let analysis = crate::commands::analyze_guess(&first.code.to_string(), &all).unwrap();

        let expected = first.expected_remaining.unwrap();
        assert!((expected - analysis.expected_remaining).abs() < 1e-9);
    }
}
