//! Candidate filtering from observed feedback
//!
//! Narrows the live candidate set to words consistent with one guess and its
//! feedback. The three passes run in a fixed order because the Present and
//! Absent rules count against letters confirmed by the earlier passes of the
//! same feedback code.

use crate::core::{Feedback, FeedbackSymbol, Word, letter_index};

/// Remove candidates inconsistent with the feedback observed for `guess`
///
/// Survivors keep their input order; the result is always a subset of the
/// input. An empty result is a legitimate outcome (the feedback came from a
/// target outside the candidate set, or from inconsistent external input),
/// not an error.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Feedback, Word};
/// use wordle_minimax::solver::filter_candidates;
///
/// let candidates: Vec<Word> = ["crane", "crack", "slate"]
///     .iter()
///     .map(|t| Word::new(*t).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let feedback = "GGGXX".parse::<Feedback>().unwrap();
///
/// let survivors = filter_candidates(&candidates, &guess, &feedback);
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].as_str(), "crack");
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    let mut survivors = candidates.to_vec();
    // Occurrences of each letter confirmed by the passes processed so far
    let mut confirmed = [0u8; 26];

    // Hit pass: letter pinned to its position
    for (position, symbol) in feedback.symbols().iter().enumerate() {
        if *symbol != FeedbackSymbol::Hit {
            continue;
        }
        let letter = guess.letter_at(position);
        survivors.retain(|word| word.letter_at(position) == letter);
        confirmed[letter_index(letter)] += 1;
    }

    // Present pass: one more occurrence exists, somewhere other than here
    for (position, symbol) in feedback.symbols().iter().enumerate() {
        if *symbol != FeedbackSymbol::Present {
            continue;
        }
        let letter = guess.letter_at(position);
        let required = confirmed[letter_index(letter)] + 1;
        survivors.retain(|word| {
            word.letter_at(position) != letter && word.count_of(letter) >= required
        });
        confirmed[letter_index(letter)] = required;
    }

    // Absent pass: no occurrences beyond those already confirmed
    for (position, symbol) in feedback.symbols().iter().enumerate() {
        if *symbol != FeedbackSymbol::Absent {
            continue;
        }
        let letter = guess.letter_at(position);
        let allowed = confirmed[letter_index(letter)];
        survivors.retain(|word| {
            word.letter_at(position) != letter && word.count_of(letter) == allowed
        });
    }

    survivors
}
