//! Bulls and Cows code representation
//!
//! A Code is an ordered sequence of 4 distinct decimal digits. Secrets and
//! guesses share this type, so the distinct-digit invariant is checked once,
//! at construction.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Number of valid codes: 10 × 9 × 8 × 7
pub const CODE_COUNT: usize = 5040;

/// A 4-digit code with all digits distinct, each in 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; CODE_LENGTH],
    /// Bit `d` is set when digit `d` appears in the code
    mask: u16,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    NonDigit(char),
    DigitOutOfRange(u8),
    RepeatedDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::NonDigit(ch) => write!(f, "Code must contain only digits, found '{ch}'"),
            Self::DigitOutOfRange(d) => write!(f, "Digit {d} is out of range 0-9"),
            Self::RepeatedDigit(d) => write!(f, "Digits must be distinct, {d} appears twice"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a code from text such as `"0123"`
    ///
    /// The text must be exactly four digits; whitespace is not stripped.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4 characters
    /// - A character is not an ASCII digit
    /// - A digit is repeated
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Code;
    ///
    /// let code = Code::new("1234").unwrap();
    /// assert_eq!(code.digits(), &[1, 2, 3, 4]);
    ///
    /// assert!(Code::new("12345").is_err());
    /// assert!(Code::new("1123").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let count = text.chars().count();

        if count != CODE_LENGTH {
            return Err(CodeError::InvalidLength(count));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let digit = ch.to_digit(10).ok_or(CodeError::NonDigit(ch))?;
            *slot = digit as u8;
        }

        Self::from_digits(digits)
    }

    /// Build a code from raw digits
    ///
    /// # Errors
    /// Returns `CodeError` if a digit is above 9 or appears more than once.
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Result<Self, CodeError> {
        let mut mask = 0u16;

        for &digit in &digits {
            if digit > 9 {
                return Err(CodeError::DigitOutOfRange(digit));
            }
            let bit = 1u16 << digit;
            if mask & bit != 0 {
                return Err(CodeError::RepeatedDigit(digit));
            }
            mask |= bit;
        }

        Ok(Self { digits, mask })
    }

    /// Draw a random secret
    ///
    /// Shuffles the ten digits and keeps the first four, so every valid
    /// code is equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        pool.shuffle(rng);

        let mut digits = [0u8; CODE_LENGTH];
        digits.copy_from_slice(&pool[..CODE_LENGTH]);

        let mask = digits.iter().fold(0u16, |acc, &d| acc | (1 << d));
        Self { digits, mask }
    }

    /// Every valid code in ascending order
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{CODE_COUNT, Code};
    ///
    /// let all = Code::all();
    /// assert_eq!(all.len(), CODE_COUNT);
    /// assert_eq!(all[0].to_string(), "0123");
    /// assert_eq!(all[CODE_COUNT - 1].to_string(), "9876");
    /// ```
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(CODE_COUNT);

        for a in 0..10u8 {
            for b in 0..10u8 {
                for c in 0..10u8 {
                    for d in 0..10u8 {
                        if let Ok(code) = Self::from_digits([a, b, c, d]) {
                            codes.push(code);
                        }
                    }
                }
            }
        }

        codes
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check if the code contains a specific digit
    #[inline]
    #[must_use]
    pub const fn contains(&self, digit: u8) -> bool {
        digit <= 9 && self.mask & (1 << digit) != 0
    }

    /// Bitmask of the digits present in the code
    #[inline]
    pub(crate) const fn mask(&self) -> u16 {
        self.mask
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("0987").unwrap();
        assert_eq!(code.digits(), &[0, 9, 8, 7]);
        assert_eq!(code.to_string(), "0987");
    }

    #[test]
    fn code_creation_rejects_padding() {
        assert_eq!(Code::new(" 1234 "), Err(CodeError::InvalidLength(6)));
        assert_eq!(Code::new("1234\n"), Err(CodeError::InvalidLength(5)));
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new("123"), Err(CodeError::InvalidLength(3)));
        assert_eq!(Code::new("12345"), Err(CodeError::InvalidLength(5)));
        assert_eq!(Code::new(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_creation_non_digit() {
        assert_eq!(Code::new("12a4"), Err(CodeError::NonDigit('a')));
        assert_eq!(Code::new("1 34"), Err(CodeError::NonDigit(' ')));
        assert_eq!(Code::new("-123"), Err(CodeError::NonDigit('-')));
    }

    #[test]
    fn code_creation_repeated_digit() {
        assert_eq!(Code::new("1123"), Err(CodeError::RepeatedDigit(1)));
        assert_eq!(Code::new("1231"), Err(CodeError::RepeatedDigit(1)));
        assert_eq!(Code::new("0000"), Err(CodeError::RepeatedDigit(0)));
    }

    #[test]
    fn from_digits_rejects_out_of_range() {
        assert_eq!(
            Code::from_digits([1, 2, 3, 10]),
            Err(CodeError::DigitOutOfRange(10))
        );
    }

    #[test]
    fn code_contains() {
        let code = Code::new("1234").unwrap();
        assert!(code.contains(1));
        assert!(code.contains(4));
        assert!(!code.contains(0));
        assert!(!code.contains(9));
        assert!(!code.contains(12));
    }

    #[test]
    fn code_digit_at() {
        let code = Code::new("5270").unwrap();
        assert_eq!(code.digit_at(0), 5);
        assert_eq!(code.digit_at(1), 2);
        assert_eq!(code.digit_at(2), 7);
        assert_eq!(code.digit_at(3), 0);
    }

    #[test]
    fn all_codes_are_distinct_and_sorted() {
        let all = Code::all();
        assert_eq!(all.len(), CODE_COUNT);
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn random_code_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = Code::random(&mut rng);
            assert!(Code::from_digits(*code.digits()).is_ok());
            assert_eq!(code.mask().count_ones(), 4);
        }
    }

    #[test]
    fn random_code_is_reproducible_with_seed() {
        let a = Code::random(&mut StdRng::seed_from_u64(42));
        let b = Code::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn code_from_str_trait() {
        let code: Code = "4321".parse().unwrap();
        assert_eq!(code.digits(), &[4, 3, 2, 1]);
        assert!("44".parse::<Code>().is_err());
    }
}
