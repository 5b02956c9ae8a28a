//! Interactive TUI game
//!
//! Full-screen Bulls and Cows with guess history and a candidate gauge.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
