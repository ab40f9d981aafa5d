//! Guess-selection engine
//!
//! The solving cycle: [`engine::Solver`] proposes a guess, the session
//! records the real feedback, [`filter::filter_candidates`] narrows the
//! candidate set, and the cycle repeats until the target is hit or the
//! candidates run out. Scores come from a penalty-weighted worst-case search
//! bounded by a comparison budget.

pub mod engine;
pub mod filter;
pub mod penalty;
pub(crate) mod search;

pub use engine::{DEFAULT_MAX_COMPARISONS, Solver, SolverConfig};
pub use filter::filter_candidates;
pub use penalty::{DEFAULT_HIGHEST_PENALTY, PenaltyError, PenaltyTable};
