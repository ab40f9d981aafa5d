//! Commonness penalties derived from frequency tiers
//!
//! Rare words make poor guesses for a human player, so each word carries a
//! penalty multiplier applied to its search score. Base penalties per tier are
//! fixed; the `highest_penalty` knob stretches or collapses the spread.

use crate::core::Word;
use crate::lexicon::Lexicon;
use rustc_hash::FxHashMap;
use std::fmt;

/// Base penalty per frequency tier, indexed by tier 1..=6
///
/// The raw spread [1, 3] is rescaled so tier 1 maps to `highest_penalty` and
/// tier 6 always maps to exactly 1.
pub const BASE_PENALTIES: [f64; 6] = [3.0, 2.0, 1.5, 1.25, 1.1, 1.0];

/// Default value for the `highest_penalty` knob
pub const DEFAULT_HIGHEST_PENALTY: f64 = 2.5;

/// Error type for penalty-table construction failures
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenaltyError {
    /// `highest_penalty` below 1 or not finite
    InvalidHighestPenalty(f64),
}

impl fmt::Display for PenaltyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHighestPenalty(value) => {
                write!(f, "Highest penalty must be a finite value >= 1, got {value}")
            }
        }
    }
}

impl std::error::Error for PenaltyError {}

/// Immutable word-to-penalty mapping, built once per lexicon
///
/// # Examples
/// ```
/// use wordle_minimax::lexicon::Lexicon;
/// use wordle_minimax::solver::PenaltyTable;
///
/// let lexicon = Lexicon::new([("crane", 6), ("fjord", 1)]).unwrap();
/// let table = PenaltyTable::build(&lexicon, 2.5).unwrap();
///
/// let crane = lexicon.words()[0];
/// let fjord = lexicon.words()[1];
/// assert!((table.factor(&crane) - 1.0).abs() < f64::EPSILON);
/// assert!((table.factor(&fjord) - 2.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct PenaltyTable {
    factors: FxHashMap<Word, f64>,
    highest_penalty: f64,
}

impl PenaltyTable {
    /// Build the penalty table for every word in the lexicon
    ///
    /// # Errors
    /// Returns `PenaltyError` when `highest_penalty` is below 1 or not finite.
    pub fn build(lexicon: &Lexicon, highest_penalty: f64) -> Result<Self, PenaltyError> {
        if !highest_penalty.is_finite() || highest_penalty < 1.0 {
            return Err(PenaltyError::InvalidHighestPenalty(highest_penalty));
        }

        let factors = lexicon
            .entries()
            .map(|(word, tier)| {
                let base = BASE_PENALTIES[usize::from(tier.rank()) - 1];
                (word, rescale(base, highest_penalty))
            })
            .collect();

        Ok(Self {
            factors,
            highest_penalty,
        })
    }

    /// Penalty multiplier for a word; words outside the lexicon score 1
    #[inline]
    #[must_use]
    pub fn factor(&self, word: &Word) -> f64 {
        self.factors.get(word).copied().unwrap_or(1.0)
    }

    /// The `highest_penalty` this table was built with
    #[inline]
    #[must_use]
    pub const fn highest_penalty(&self) -> f64 {
        self.highest_penalty
    }

    /// Penalty gap at which one candidate in a small set clearly dominates
    #[inline]
    #[must_use]
    pub fn dominance_margin(&self) -> f64 {
        (self.highest_penalty - 1.0) / 4.0
    }
}

/// Map a base penalty into [1, highest_penalty], keeping 1 fixed
fn rescale(base: f64, highest_penalty: f64) -> f64 {
    (highest_penalty - 1.0) * (base - 1.0) / 2.0 + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiered_lexicon() -> Lexicon {
        Lexicon::new([
            ("fjord", 1),
            ("gulch", 2),
            ("brine", 3),
            ("maple", 4),
            ("slate", 5),
            ("crane", 6),
        ])
        .unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn default_rescale_values() {
        let table = PenaltyTable::build(&tiered_lexicon(), DEFAULT_HIGHEST_PENALTY).unwrap();

        let expected = [
            ("fjord", 2.5),
            ("gulch", 1.75),
            ("brine", 1.375),
            ("maple", 1.1875),
            ("slate", 1.075),
            ("crane", 1.0),
        ];
        for (text, factor) in expected {
            assert!(
                (table.factor(&word(text)) - factor).abs() < 1e-12,
                "{text}: expected {factor}, got {}",
                table.factor(&word(text))
            );
        }
    }

    #[test]
    fn most_common_tier_is_always_one() {
        for highest in [1.0, 1.5, 2.5, 10.0] {
            let table = PenaltyTable::build(&tiered_lexicon(), highest).unwrap();
            assert!((table.factor(&word("crane")) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn unit_highest_penalty_collapses_all_factors() {
        let table = PenaltyTable::build(&tiered_lexicon(), 1.0).unwrap();
        for w in tiered_lexicon().words() {
            assert!((table.factor(w) - 1.0).abs() < f64::EPSILON);
        }
        assert!((table.dominance_margin()).abs() < f64::EPSILON);
    }

    #[test]
    fn penalties_decrease_with_commonness() {
        let table = PenaltyTable::build(&tiered_lexicon(), DEFAULT_HIGHEST_PENALTY).unwrap();
        let factors: Vec<f64> = ["fjord", "gulch", "brine", "maple", "slate", "crane"]
            .iter()
            .map(|t| table.factor(&word(t)))
            .collect();
        for pair in factors.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn rare_tier_reaches_highest_penalty() {
        let table = PenaltyTable::build(&tiered_lexicon(), 4.0).unwrap();
        assert!((table.factor(&word("fjord")) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_word_scores_one() {
        let table = PenaltyTable::build(&tiered_lexicon(), DEFAULT_HIGHEST_PENALTY).unwrap();
        assert!((table.factor(&word("zzzzz")) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_invalid_highest_penalty() {
        let lexicon = tiered_lexicon();
        for bad in [0.0, 0.99, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = PenaltyTable::build(&lexicon, bad);
            assert!(
                matches!(result, Err(PenaltyError::InvalidHighestPenalty(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn dominance_margin_scales_with_highest_penalty() {
        let lexicon = tiered_lexicon();
        let table = PenaltyTable::build(&lexicon, DEFAULT_HIGHEST_PENALTY).unwrap();
        assert!((table.dominance_margin() - 0.375).abs() < f64::EPSILON);

        let table = PenaltyTable::build(&lexicon, 5.0).unwrap();
        assert!((table.dominance_margin() - 1.0).abs() < f64::EPSILON);
    }
}
