//! Solver assistant mode
//!
//! The human holds the secret; the solver proposes guesses and the human
//! reports each score.

use crate::core::{Code, Score};
use crate::solver::{Solver, Strategy, calculate_metrics};
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the assistant loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist<S: Strategy, R: BufRead, W: Write>(
    solver: &Solver<S>,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║             Bulls and Cows Solver - Assistant Mode           ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(output, "Think of 4 distinct digits. I'll guess, you score each guess:")?;
    writeln!(output, "  - Enter bullseyes then hits, e.g. '12', '1 2' or '1b2h'")?;
    writeln!(output, "  - Or type 'win' if I got it right!\n")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    let mut history: Vec<(Code, Score)> = Vec::new();

    loop {
        let turn = history.len() + 1;
        let candidates = solver.get_candidates(&history);

        if candidates.is_empty() {
            writeln!(output, "\n❌ No codes match those scores! One of them may be wrong.")?;
            writeln!(output, "Type 'undo' to go back, or 'new' to start over.\n")?;

            match prompt(&mut input, output, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => return Ok(()),
                Some("undo" | "u") => {
                    history.pop();
                }
                Some("new" | "n") => history.clear(),
                Some(_) => {}
            }
            continue;
        }

        let guess = solver
            .next_guess(&history)
            .ok_or_else(|| anyhow!("No valid guesses available"))?;

        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(output, "Turn {turn}: {} candidates remaining", candidates.len())?;
        writeln!(output, "────────────────────────────────────────────────────────────")?;

        let metrics = calculate_metrics(guess, &candidates);
        writeln!(output, "\n📊 Suggested guess: {}", guess.to_string().bright_yellow().bold())?;
        writeln!(output, "   Entropy:          {:.3} bits", metrics.entropy)?;
        writeln!(output, "   Expected remain:  {:.1} candidates", metrics.expected_remaining)?;
        writeln!(output, "   Worst case:       {} candidates\n", metrics.max_partition)?;

        if candidates.len() <= 10 {
            writeln!(output, "Remaining candidates:")?;
            for candidate in &candidates {
                writeln!(output, "  • {candidate}")?;
            }
            writeln!(output)?;
        }

        let feedback = loop {
            let Some(line) = prompt(&mut input, output, "Enter score (bullseyes hits, 'win', or command)")?
            else {
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    writeln!(output, "\n🔄 New game started!\n")?;
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        writeln!(output, "✓ Undone! Back to turn {}\n", history.len() + 1)?;
                        break None;
                    }
                    writeln!(output, "Nothing to undo!\n")?;
                }
                "win" | "correct" | "yes" => break Some(Score::WIN),
                other => {
                    if let Some(score) = Score::parse(other) {
                        break Some(score);
                    }
                    writeln!(output, "❌ Invalid score! Use two digits like '12' or '1b2h'\n")?;
                }
            }
        };

        let Some(score) = feedback else {
            continue;
        };

        history.push((*guess, score));

        if score.is_win() {
            writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                output,
                "  {} Solved {} in {} {}",
                "🎉".bright_green(),
                guess.to_string().bright_yellow().bold(),
                turn,
                if turn == 1 { "guess" } else { "guesses" }
            )?;
            for (i, (code, s)) in history.iter().enumerate() {
                writeln!(output, "    {}. {code}  {}/{}", i + 1, s.bulls(), s.hits())?;
            }
            writeln!(output, "{}\n", "═".repeat(60).bright_cyan())?;

            match prompt(&mut input, output, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    history.clear();
                    writeln!(output, "\n🔄 New game started!\n")?;
                }
                _ => {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
