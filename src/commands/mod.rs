//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess};
pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayConfig, PlayOutcome, run_play};
pub use solve::{SolveConfig, SolveResult, solve_secret};
