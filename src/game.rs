//! Game state machine
//!
//! A game owns one secret for its whole life and moves from `Active` to
//! `Won` when a guess places all four digits. There is no turn limit and no
//! losing state.

use crate::core::{Code, CodeError, Score};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Where a game stands after a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next guess
    Active,
    /// Secret found; no more guesses accepted
    Won,
}

/// One graded guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub score: Score,
}

/// Error type for rejected submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGuess(CodeError),
    AlreadyWon,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::AlreadyWon => write!(f, "Game is already won"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::AlreadyWon => None,
        }
    }
}

impl From<CodeError> for GameError {
    fn from(err: CodeError) -> Self {
        Self::InvalidGuess(err)
    }
}

/// A single game against a fixed secret
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    history: Vec<Round>,
    state: GameState,
}

impl Game {
    /// Start a game with a known secret
    #[must_use]
    pub fn new(secret: Code) -> Self {
        info!("new game started");
        Self {
            secret,
            history: Vec::new(),
            state: GameState::Active,
        }
    }

    /// Start a game with a random secret
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Code::random(rng))
    }

    /// Grade a guess and advance the game
    ///
    /// # Errors
    /// Returns `GameError::AlreadyWon` if the game has already ended.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Code;
    /// use bulls_and_cows::game::{Game, GameState};
    ///
    /// let mut game = Game::new(Code::new("1234").unwrap());
    ///
    /// let round = game.submit(Code::new("1567").unwrap()).unwrap();
    /// assert_eq!(round.score.bulls(), 1);
    /// assert_eq!(game.state(), GameState::Active);
    ///
    /// game.submit(Code::new("1234").unwrap()).unwrap();
    /// assert_eq!(game.state(), GameState::Won);
    /// ```
    pub fn submit(&mut self, guess: Code) -> Result<Round, GameError> {
        if self.state == GameState::Won {
            return Err(GameError::AlreadyWon);
        }

        let score = Score::calculate(&guess, &self.secret);
        let round = Round { guess, score };
        self.history.push(round);

        debug!(
            turn = self.history.len(),
            %guess,
            bulls = score.bulls(),
            hits = score.hits(),
            "graded guess"
        );

        if score.is_win() {
            self.state = GameState::Won;
            info!(turns = self.history.len(), "game won");
        }

        Ok(round)
    }

    /// Validate raw input, then grade it
    ///
    /// A rejected guess does not use up a turn.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` for malformed input and
    /// `GameError::AlreadyWon` if the game has already ended.
    pub fn submit_str(&mut self, raw: &str) -> Result<Round, GameError> {
        if self.state == GameState::Won {
            return Err(GameError::AlreadyWon);
        }
        let guess = Code::new(raw)?;
        self.submit(guess)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Number of graded guesses so far
    #[inline]
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// The hidden secret
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(secret: &str) -> Game {
        Game::new(Code::new(secret).unwrap())
    }

    #[test]
    fn new_game_is_active() {
        let game = game("1234");
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.turns(), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut game = game("1234");
        let round = game.submit_str("1234").unwrap();

        assert_eq!(round.score, Score::WIN);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn non_winning_guess_keeps_game_active() {
        let mut game = game("1234");

        let round = game.submit_str("4321").unwrap();
        assert_eq!((round.score.bulls(), round.score.hits()), (0, 4));
        assert_eq!(game.state(), GameState::Active);

        let round = game.submit_str("5678").unwrap();
        assert_eq!((round.score.bulls(), round.score.hits()), (0, 0));
        assert_eq!(game.state(), GameState::Active);
        assert_eq!(game.turns(), 2);
    }

    #[test]
    fn won_game_rejects_guesses() {
        let mut game = game("1234");
        game.submit_str("1234").unwrap();

        assert_eq!(game.submit_str("5678"), Err(GameError::AlreadyWon));
        assert_eq!(game.submit_str("bad"), Err(GameError::AlreadyWon));
        assert_eq!(game.turns(), 1);
    }

    #[test]
    fn invalid_guess_does_not_consume_turn() {
        let mut game = game("1234");

        assert_eq!(
            game.submit_str("1123"),
            Err(GameError::InvalidGuess(CodeError::RepeatedDigit(1)))
        );
        assert_eq!(
            game.submit_str("12"),
            Err(GameError::InvalidGuess(CodeError::InvalidLength(2)))
        );
        assert_eq!(game.turns(), 0);
        assert_eq!(game.state(), GameState::Active);
    }

    #[test]
    fn history_records_rounds_in_order() {
        let mut game = game("1234");
        game.submit_str("5678").unwrap();
        game.submit_str("1567").unwrap();

        let guesses: Vec<String> = game
            .history()
            .iter()
            .map(|r| r.guess.to_string())
            .collect();
        assert_eq!(guesses, ["5678", "1567"]);
    }

    #[test]
    fn random_game_uses_valid_secret() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::random(&mut rng);
        let secret = *game.secret();

        let round = game.submit(secret).unwrap();
        assert!(round.score.is_win());
    }

    #[test]
    fn error_display() {
        let err = GameError::InvalidGuess(CodeError::InvalidLength(3));
        assert_eq!(
            err.to_string(),
            "Invalid guess: Code must be exactly 4 digits, got 3"
        );
    }
}
