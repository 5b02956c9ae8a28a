//! Guess evaluation
//!
//! A score is the feedback for one guess: the number of bullseyes (right
//! digit in the right position) and hits (right digit in the wrong
//! position). Because both codes hold distinct digits, a digit is counted at
//! most once, so `bulls + hits <= 4`.

use super::code::{CODE_LENGTH, Code, CodeError};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    bulls: u8,
    hits: u8,
}

impl Score {
    /// All four digits in place
    pub const WIN: Self = Self {
        bulls: CODE_LENGTH as u8,
        hits: 0,
    };

    /// Create a score, rejecting impossible pairs
    ///
    /// `(3, 1)` is rejected along with any pair whose total exceeds 4:
    /// with three digits in place the fourth can only be in its own slot.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Score;
    ///
    /// assert!(Score::new(1, 2).is_some());
    /// assert!(Score::new(3, 2).is_none());
    /// assert!(Score::new(3, 1).is_none());
    /// ```
    #[must_use]
    pub const fn new(bulls: u8, hits: u8) -> Option<Self> {
        let total = bulls as usize + hits as usize;
        if total > CODE_LENGTH || (bulls == 3 && hits == 1) {
            return None;
        }
        Some(Self { bulls, hits })
    }

    /// Number of bullseyes
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Number of hits
    #[inline]
    #[must_use]
    pub const fn hits(self) -> u8 {
        self.hits
    }

    /// Bullseyes plus hits
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.bulls + self.hits
    }

    /// Check if this score ends the game
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.bulls as usize == CODE_LENGTH
    }

    /// Grade `guess` against `secret`
    ///
    /// For each position: a digit equal to the secret's digit there is a
    /// bullseye; otherwise a digit present anywhere in the secret is a hit.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Code, Score};
    ///
    /// let secret = Code::new("1234").unwrap();
    /// let guess = Code::new("1243").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// assert_eq!(score.bulls(), 2);
    /// assert_eq!(score.hits(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let bulls = guess
            .digits()
            .iter()
            .zip(secret.digits())
            .filter(|(g, s)| g == s)
            .count() as u8;

        // Every shared digit is either a bull or a hit
        let shared = (guess.mask() & secret.mask()).count_ones() as u8;

        Self {
            bulls,
            hits: shared - bulls,
        }
    }

    /// Parse feedback typed by a player
    ///
    /// Accepts `"12"`, `"1 2"`, `"1,2"` and `"1b2h"` (case-insensitive),
    /// all meaning one bullseye and two hits.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Score;
    ///
    /// let expected = Score::new(1, 2).unwrap();
    /// assert_eq!(Score::parse("12"), Some(expected));
    /// assert_eq!(Score::parse("1B 2H"), Some(expected));
    /// assert_eq!(Score::parse("5 0"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let digits: Vec<u8> = s
            .chars()
            .filter(|c| !matches!(c, ' ' | ',' | 'b' | 'B' | 'h' | 'H'))
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()?;

        match digits.as_slice() {
            [bulls, hits] => Self::new(*bulls, *hits),
            _ => None,
        }
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid score: {s}"))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bulleyes and {} hits", self.bulls, self.hits)
    }
}

/// Validate a raw guess and grade it against `secret`
///
/// # Errors
/// Returns `CodeError` if the guess is not exactly 4 distinct digits; the
/// guess is rejected before any grading happens.
///
/// # Examples
/// ```
/// use bulls_and_cows::core::{Code, evaluate};
///
/// let secret = Code::new("1234").unwrap();
/// assert!(evaluate(&secret, "1234").unwrap().is_win());
/// assert!(evaluate(&secret, "1123").is_err());
/// ```
pub fn evaluate(secret: &Code, raw_guess: &str) -> Result<Score, CodeError> {
    let guess = Code::new(raw_guess)?;
    Ok(Score::calculate(&guess, secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::new(s).unwrap()
    }

    #[test]
    fn exact_match_wins() {
        let score = Score::calculate(&code("1234"), &code("1234"));
        assert_eq!(score, Score::WIN);
        assert_eq!((score.bulls(), score.hits()), (4, 0));
        assert!(score.is_win());
    }

    #[test]
    fn reversed_is_all_hits() {
        let score = Score::calculate(&code("4321"), &code("1234"));
        assert_eq!((score.bulls(), score.hits()), (0, 4));
        assert!(!score.is_win());
    }

    #[test]
    fn single_bullseye() {
        let score = Score::calculate(&code("1567"), &code("1234"));
        assert_eq!((score.bulls(), score.hits()), (1, 0));
    }

    #[test]
    fn no_shared_digits() {
        let score = Score::calculate(&code("5678"), &code("1234"));
        assert_eq!((score.bulls(), score.hits()), (0, 0));
    }

    #[test]
    fn mixed_bulls_and_hits() {
        // 1 in place, 3 and 2 swapped, 9 absent
        let score = Score::calculate(&code("1329"), &code("1234"));
        assert_eq!((score.bulls(), score.hits()), (1, 2));
    }

    #[test]
    fn matches_positional_rule_for_every_pair() {
        let all = Code::all();

        for secret in &all {
            for guess in &all {
                let score = Score::calculate(guess, secret);

                let mut bulls = 0;
                let mut hits = 0;
                for (i, &digit) in guess.digits().iter().enumerate() {
                    if digit == secret.digit_at(i) {
                        bulls += 1;
                    } else if secret.contains(digit) {
                        hits += 1;
                    }
                }

                assert_eq!((score.bulls(), score.hits()), (bulls, hits));
                assert!(score.total() <= 4);
            }
        }
    }

    #[test]
    fn score_is_symmetric() {
        let a = code("0518");
        let b = code("8150");
        assert_eq!(Score::calculate(&a, &b), Score::calculate(&b, &a));
    }

    #[test]
    fn evaluate_rejects_repeated_digit() {
        let secret = code("1234");
        assert_eq!(
            evaluate(&secret, "1123"),
            Err(CodeError::RepeatedDigit(1))
        );
    }

    #[test]
    fn evaluate_rejects_wrong_length() {
        let secret = code("1234");
        assert_eq!(evaluate(&secret, "123"), Err(CodeError::InvalidLength(3)));
        assert_eq!(
            evaluate(&secret, "12345"),
            Err(CodeError::InvalidLength(5))
        );
    }

    #[test]
    fn new_rejects_impossible_scores() {
        assert!(Score::new(4, 0).is_some());
        assert!(Score::new(0, 4).is_some());
        assert!(Score::new(2, 2).is_some());
        assert!(Score::new(4, 1).is_none());
        assert!(Score::new(3, 1).is_none());
        assert!(Score::new(0, 5).is_none());
    }

    #[test]
    fn parse_accepts_common_formats() {
        let expected = Score::new(2, 1).unwrap();
        assert_eq!(Score::parse("21"), Some(expected));
        assert_eq!(Score::parse("2 1"), Some(expected));
        assert_eq!(Score::parse("2,1"), Some(expected));
        assert_eq!(Score::parse("2b1h"), Some(expected));
        assert_eq!(Score::parse("2B 1H"), Some(expected));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Score::parse(""), None);
        assert_eq!(Score::parse("1"), None);
        assert_eq!(Score::parse("123"), None);
        assert_eq!(Score::parse("xy"), None);
        assert_eq!(Score::parse("41"), None);
    }

    #[test]
    fn display_uses_game_wording() {
        let score = Score::new(1, 2).unwrap();
        assert_eq!(score.to_string(), "1 bulleyes and 2 hits");
    }
}
