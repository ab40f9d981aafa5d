//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisReport, analyze_word};
pub use benchmark::{BenchmarkReport, run_benchmark};
pub use play::run_play;
pub use solve::{DEFAULT_MAX_TURNS, GuessStep, SolveOptions, SolveReport, solve_target};
