//! Display functions for command results

use super::formatters::{entropy_bar, score_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{Code, Score};
use colored::Colorize;

/// Print the score of a single guess
pub fn print_score_result(secret: &Code, guess: &Code, score: Score) {
    println!(
        "\n{} vs {}  {}",
        guess.to_string().bright_white().bold(),
        secret.to_string().bright_black(),
        score_to_pegs(score).bright_yellow()
    );
    if score.is_win() {
        println!("{}", "You win!".green().bold());
    } else {
        println!("{score}");
    }
}

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}  ({})",
            turn,
            step.code,
            score_to_pegs(step.score),
            step.score
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        ratio.log2(),
                        ratio
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.code.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.max_partition);

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    for (score, count) in &result.partitions {
        let pct = *count as f64 / result.total_candidates.max(1) as f64 * 100.0;
        println!(
            "   {} {}/{}  {:5} ({pct:5.1}%)",
            score_to_pegs(*score),
            score.bulls(),
            score.hits(),
            count
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    if result.solved < result.total_secrets {
        println!(
            "   Unsolved:         {}",
            format!("{}", result.total_secrets - result.solved).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.solved.max(1) as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest secrets:".yellow().bold());
        for (code, guesses) in &result.hardest {
            println!("   {} ({guesses} guesses)", code.to_string().yellow());
        }
    }
}
