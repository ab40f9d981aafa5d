//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_report, print_benchmark_report, print_solve_report};
pub use formatters::{count_bar, ordinal};
