//! Solver facade over the lexicon, penalties and search
//!
//! One `Solver` serves any number of solve sessions; the candidate set and
//! random source belong to the session, not to the solver.

use crate::core::Word;
use crate::lexicon::Lexicon;
use crate::solver::penalty::PenaltyTable;
use crate::solver::search;
use rand::Rng;

/// Default cap on feedback simulations per guess selection
pub const DEFAULT_MAX_COMPARISONS: usize = 1_000_000;

/// Tunable solver parameters, fixed for the duration of one solve
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Restrict guesses to words still consistent with all feedback
    pub hard_mode: bool,
    /// Upper bound on feedback simulations per guess selection
    pub max_comparisons: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            hard_mode: false,
            max_comparisons: DEFAULT_MAX_COMPARISONS,
        }
    }
}

/// Guess-selection engine over a fixed lexicon and penalty table
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_minimax::lexicon::Lexicon;
/// use wordle_minimax::solver::{PenaltyTable, Solver, SolverConfig};
///
/// let lexicon = Lexicon::new([("crane", 6), ("slate", 5), ("fjord", 1)]).unwrap();
/// let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
/// let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let guess = solver.select_guess(lexicon.words(), &mut rng);
/// assert!(guess.is_some());
/// ```
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    penalties: &'a PenaltyTable,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver borrowing the lexicon and penalty table
    #[must_use]
    pub const fn new(
        lexicon: &'a Lexicon,
        penalties: &'a PenaltyTable,
        config: SolverConfig,
    ) -> Self {
        Self {
            lexicon,
            penalties,
            config,
        }
    }

    /// The configuration this solver runs with
    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// The full lexicon backing the search pool
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// The penalty table used to weight search scores
    #[must_use]
    pub const fn penalties(&self) -> &'a PenaltyTable {
        self.penalties
    }

    /// Pick the next guess for the given candidates
    ///
    /// Returns `None` only when `candidates` is empty, signalling an
    /// exhausted search space. The random source drives candidate sampling
    /// when the comparison budget forces one; pass a seeded generator for
    /// reproducible runs.
    #[must_use]
    pub fn select_guess(&self, candidates: &[Word], rng: &mut impl Rng) -> Option<Word> {
        search::select_guess(
            candidates,
            self.lexicon.words(),
            self.penalties,
            self.config.hard_mode,
            self.config.max_comparisons,
            rng,
        )
    }
}
