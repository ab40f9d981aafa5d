//! Penalty-weighted bounded minimax over the guess pool
//!
//! Every pool word is scored by the worst-case number of sampled candidates
//! that would survive guessing it, times the word's commonness penalty. The
//! comparison budget caps total encoder work by shrinking the candidate
//! sample, trading accuracy for bounded latency. Scoring is parallel across
//! the pool; ties resolve by pool order, never by worker arrival order.

use crate::core::{Feedback, Word};
use crate::solver::penalty::PenaltyTable;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

/// Candidate-set size at or below which the dominant-word shortcut applies
const SMALL_SET_LIMIT: usize = 6;

/// Result of one pool search, with the sizes that bound its work
pub(crate) struct SearchOutcome {
    pub word: Word,
    pub pool_size: usize,
    pub sample_size: usize,
}

/// Pick the next guess, or `None` when the candidate set is exhausted
///
/// Small candidate sets short-circuit: a lone candidate is returned as-is,
/// one of two by lower penalty, and one of up to six when its penalty beats
/// the runner-up by the dominance margin. Everything else runs the full
/// bounded search.
pub(crate) fn select_guess(
    candidates: &[Word],
    lexicon_words: &[Word],
    penalties: &PenaltyTable,
    hard_mode: bool,
    max_comparisons: usize,
    rng: &mut impl Rng,
) -> Option<Word> {
    if candidates.is_empty() {
        return None;
    }
    if candidates.len() == 1 {
        return Some(candidates[0]);
    }
    if candidates.len() == 2 {
        return Some(lower_penalty_of(candidates[0], candidates[1], penalties));
    }
    if candidates.len() <= SMALL_SET_LIMIT {
        if let Some(dominant) = dominant_common_word(candidates, penalties) {
            return Some(dominant);
        }
    }

    let outcome = search_pool(
        candidates,
        lexicon_words,
        penalties,
        hard_mode,
        max_comparisons,
        rng,
    );
    Some(outcome.word)
}

/// Of two candidates, the one with the lower penalty; ties go to the first
fn lower_penalty_of(first: Word, second: Word, penalties: &PenaltyTable) -> Word {
    if penalties.factor(&second) < penalties.factor(&first) {
        second
    } else {
        first
    }
}

/// Cheapest candidate of a small set, if it clearly beats the runner-up
///
/// `None` means no single word dominates and the full search should decide.
fn dominant_common_word(candidates: &[Word], penalties: &PenaltyTable) -> Option<Word> {
    let mut ranked: Vec<(Word, f64)> = candidates
        .iter()
        .map(|word| (*word, penalties.factor(word)))
        .collect();
    // Stable sort keeps input order among equal penalties
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    if ranked[0].1 <= ranked[1].1 - penalties.dominance_margin() {
        Some(ranked[0].0)
    } else {
        None
    }
}

/// Score the whole guess pool against a bounded candidate sample
///
/// The pool is the full lexicon, or the candidates themselves in hard mode.
/// `sample_size = min(max_comparisons / |pool|, |candidates|)`, so encoder
/// calls never exceed `|pool| * sample_size`. A sample smaller than the
/// candidate set is drawn uniformly without replacement; the draw is the only
/// source of randomness.
pub(crate) fn search_pool(
    candidates: &[Word],
    lexicon_words: &[Word],
    penalties: &PenaltyTable,
    hard_mode: bool,
    max_comparisons: usize,
    rng: &mut impl Rng,
) -> SearchOutcome {
    let pool: &[Word] = if hard_mode || lexicon_words.is_empty() {
        candidates
    } else {
        lexicon_words
    };

    let sample_size = (max_comparisons / pool.len()).min(candidates.len());
    let sample: Vec<Word> = if sample_size >= candidates.len() {
        candidates.to_vec()
    } else {
        candidates
            .choose_multiple(rng, sample_size)
            .copied()
            .collect()
    };

    let word = best_scored(pool, &sample, penalties);
    SearchOutcome {
        word,
        pool_size: pool.len(),
        sample_size: sample.len(),
    }
}

/// Lowest penalized worst-case score over the pool, ties to the lowest index
///
/// The index rides along in the comparison so the parallel reduction is
/// deterministic for a fixed pool order and sample.
fn best_scored(pool: &[Word], sample: &[Word], penalties: &PenaltyTable) -> Word {
    let (_, index) = pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let worst = worst_bucket_size(guess, sample);
            (f64::from(worst) * penalties.factor(guess), index)
        })
        .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .unwrap_or((0.0, 0));
    pool[index]
}

/// Count sampled targets per feedback code, indexed by ordinal
pub(crate) fn feedback_histogram(guess: &Word, sample: &[Word]) -> [u32; Feedback::COUNT] {
    let mut buckets = [0u32; Feedback::COUNT];
    for target in sample {
        buckets[Feedback::compute(target, guess).ordinal()] += 1;
    }
    buckets
}

/// Largest group of sampled targets producing identical feedback for `guess`
pub(crate) fn worst_bucket_size(guess: &Word, sample: &[Word]) -> u32 {
    let buckets = feedback_histogram(guess, sample);
    buckets.iter().copied().max().unwrap_or(0)
}
