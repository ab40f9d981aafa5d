//! Oracle solve command
//!
//! Solves a known target word automatically and records the path taken.

use crate::core::{Feedback, Word};
use crate::solver::{Solver, filter_candidates};
use rand::Rng;

/// Turn ceiling for automated solves; generous so hard losses still finish
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Options for solving a target word
pub struct SolveOptions {
    pub target: String,
    pub max_turns: usize,
}

impl SolveOptions {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// One guess on the way to the target
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub penalty: f64,
}

/// The full path of an automated solve
pub struct SolveReport {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub solved: bool,
    /// Candidates ran out before the target was found; the target is not in
    /// the lexicon or not reachable from it
    pub exhausted: bool,
}

/// Solve a target word against the oracle encoder
///
/// # Errors
///
/// Returns an error if the target is not a well-formed five-letter word.
pub fn solve_target(
    options: &SolveOptions,
    solver: &Solver<'_>,
    rng: &mut impl Rng,
) -> Result<SolveReport, String> {
    let target = Word::new(options.target.as_str()).map_err(|e| format!("Invalid target: {e}"))?;

    let mut candidates = solver.lexicon().words().to_vec();
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..options.max_turns {
        let candidates_before = candidates.len();

        let Some(guess) = solver.select_guess(&candidates, rng) else {
            return Ok(SolveReport {
                target,
                steps,
                solved: false,
                exhausted: true,
            });
        };

        let feedback = Feedback::compute(&target, &guess);
        candidates = filter_candidates(&candidates, &guess, &feedback);

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
            penalty: solver.penalties().factor(&guess),
        });

        if feedback.is_all_hit() {
            return Ok(SolveReport {
                target,
                steps,
                solved: true,
                exhausted: false,
            });
        }
    }

    Ok(SolveReport {
        target,
        steps,
        solved: false,
        exhausted: false,
    })
}
