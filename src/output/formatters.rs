//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Score};

/// Format a score as pegs: `●` per bullseye, `○` per hit, `·` per miss
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let bulls = usize::from(score.bulls());
    let hits = usize::from(score.hits());
    let misses = CODE_LENGTH - bulls - hits;

    format!("{}{}{}", "●".repeat(bulls), "○".repeat(hits), "·".repeat(misses))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
///
/// Scaled to 4 bits, just above log2(13) for the 13 possible scores.
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 4.0;
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_no_match() {
        let score = Score::new(0, 0).unwrap();
        assert_eq!(score_to_pegs(score), "····");
    }

    #[test]
    fn pegs_win() {
        assert_eq!(score_to_pegs(Score::WIN), "●●●●");
    }

    #[test]
    fn pegs_mixed() {
        let score = Score::new(1, 2).unwrap();
        assert_eq!(score_to_pegs(score), "●○○·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        let bar = entropy_bar(10.0, 4);
        assert_eq!(bar, "████");
    }
}
