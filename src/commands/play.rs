//! Classic console game
//!
//! The player guesses a hidden code one line at a time and is told how many
//! bullseyes and hits each guess scored.

use crate::game::{Game, GameError, GameState};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Configuration for the console game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Ask again after a malformed guess instead of failing
    pub retry: bool,
}

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { turns: usize },
    Quit,
    EndOfInput,
}

/// Run the console game until it is won, abandoned, or input runs out
///
/// # Errors
///
/// Returns an error on I/O failure, or when a guess is malformed and
/// `retry` is off.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    output: &mut W,
    config: PlayConfig,
) -> Result<PlayOutcome> {
    writeln!(output, "welcome to Bullseye")?;

    while game.state() == GameState::Active {
        writeln!(output, "Enter guess (4 digits, e.g. 1234)")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(PlayOutcome::EndOfInput);
        }
        let raw = line.trim_end_matches(['\r', '\n']);

        if matches!(raw.trim(), "quit" | "q" | "exit") {
            writeln!(output, "The secret was {}", game.secret())?;
            return Ok(PlayOutcome::Quit);
        }

        writeln!(output, "raw guess {raw}")?;

        match game.submit_str(raw) {
            Ok(round) if round.score.is_win() => {
                writeln!(output, "{}\n", "You win!".green().bold())?;
            }
            Ok(round) => {
                writeln!(output, "{}\n", round.score)?;
            }
            Err(GameError::InvalidGuess(err)) if config.retry => {
                debug!(%err, "rejected guess");
                writeln!(output, "{err}. Try again.\n")?;
            }
            Err(GameError::InvalidGuess(err)) => {
                bail!("rejected guess {raw:?}: {err}");
            }
            Err(err @ GameError::AlreadyWon) => return Err(err.into()),
        }
    }

    Ok(PlayOutcome::Won {
        turns: game.turns(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Code;
    use std::io::Cursor;

    fn run(secret: &str, script: &str, config: PlayConfig) -> (Result<PlayOutcome>, String) {
        let mut game = Game::new(Code::new(secret).unwrap());
        let mut output = Vec::new();
        let result = run_play(&mut game, Cursor::new(script), &mut output, config);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn transcript_follows_game_format() {
        let (result, transcript) = run("1234", "5678\n1567\n4321\n1234\n", PlayConfig::default());

        assert_eq!(result.unwrap(), PlayOutcome::Won { turns: 4 });
        assert!(transcript.starts_with("welcome to Bullseye\n"));
        assert!(transcript.contains("raw guess 5678\n0 bulleyes and 0 hits\n"));
        assert!(transcript.contains("raw guess 1567\n1 bulleyes and 0 hits\n"));
        assert!(transcript.contains("raw guess 4321\n0 bulleyes and 4 hits\n"));
        assert!(transcript.contains("raw guess 1234\n"));
        assert!(transcript.contains("You win!"));
    }

    #[test]
    fn malformed_guess_ends_the_game() {
        let (result, transcript) = run("1234", "1123\n1234\n", PlayConfig::default());

        let err = result.unwrap_err();
        assert!(err.to_string().contains("1123"));
        assert!(transcript.contains("raw guess 1123\n"));
        assert!(!transcript.contains("Try again"));
        assert!(!transcript.contains("You win!"));
    }

    #[test]
    fn padded_guess_ends_the_game() {
        let (result, transcript) = run("1234", " 1234 \n", PlayConfig::default());

        assert!(result.is_err());
        assert!(!transcript.contains("You win!"));
    }

    #[test]
    fn retry_mode_reports_and_asks_again() {
        let (result, transcript) = run("1234", "1123\n12\n1234\n", PlayConfig { retry: true });

        assert_eq!(result.unwrap(), PlayOutcome::Won { turns: 1 });
        assert!(transcript.contains("Digits must be distinct, 1 appears twice"));
        assert!(transcript.contains("Code must be exactly 4 digits, got 2"));
    }

    #[test]
    fn quit_reveals_secret() {
        let (result, transcript) = run("9076", "1234\nquit\n", PlayConfig::default());

        assert_eq!(result.unwrap(), PlayOutcome::Quit);
        assert!(transcript.contains("The secret was 9076"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (result, transcript) = run("1234", "5678\n", PlayConfig::default());

        assert_eq!(result.unwrap(), PlayOutcome::EndOfInput);
        assert!(!transcript.contains("You win!"));
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let (result, _) = run("1234", "1234\r\n", PlayConfig::default());
        assert_eq!(result.unwrap(), PlayOutcome::Won { turns: 1 });
    }
}
