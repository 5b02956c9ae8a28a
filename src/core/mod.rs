//! Core domain types for Bulls and Cows
//!
//! Codes and the guess evaluator. Everything here is pure and deterministic
//! apart from `Code::random`, which takes its RNG from the caller.

mod code;
mod score;

pub use code::{CODE_COUNT, CODE_LENGTH, Code, CodeError};
pub use score::{Score, evaluate};
