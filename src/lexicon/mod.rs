//! Word lexicon with frequency tiers
//!
//! The lexicon is the ordered, duplicate-free table of guessable words, each
//! carrying a relative frequency tier from 1 (rare) to 6 (common). Tiers are
//! source data attached at load time and never recomputed.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_LEXICON, DEFAULT_LEXICON_COUNT};

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;

/// Relative word-frequency rank, 1 (rare) to 6 (common)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrequencyTier(u8);

impl FrequencyTier {
    /// Lowest rank: words a player would rarely recognise
    pub const RAREST: Self = Self(1);

    /// Highest rank: everyday words
    pub const MOST_COMMON: Self = Self(6);

    /// Create a tier from its rank, rejecting anything outside 1..=6
    #[must_use]
    pub const fn new(rank: u8) -> Option<Self> {
        if matches!(rank, 1..=6) {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Get the numeric rank (1-6)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl fmt::Display for FrequencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for lexicon construction failures
///
/// Every variant is fatal at load time: a lexicon with a malformed entry is a
/// configuration error, not something to paper over.
#[derive(Debug, Clone, PartialEq)]
pub enum LexiconError {
    InvalidWord { text: String, source: WordError },
    TierOutOfRange { word: String, rank: u8 },
    MissingTier(String),
    UnparsableTier { word: String, text: String },
    DuplicateWord(String),
    Empty,
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { text, source } => {
                write!(f, "Invalid lexicon word '{text}': {source}")
            }
            Self::TierOutOfRange { word, rank } => {
                write!(f, "Frequency tier for '{word}' must be 1-6, got {rank}")
            }
            Self::MissingTier(word) => {
                write!(f, "Lexicon line '{word}' is missing a frequency tier")
            }
            Self::UnparsableTier { word, text } => {
                write!(f, "Frequency tier '{text}' for '{word}' is not a number")
            }
            Self::DuplicateWord(word) => write!(f, "Duplicate lexicon word '{word}'"),
            Self::Empty => write!(f, "Lexicon contains no words"),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Ordered, duplicate-free table of `(Word, FrequencyTier)` entries
///
/// Iteration order is the load order; the guess selector's tie-breaks depend
/// on it being stable.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    tiers: Vec<FrequencyTier>,
}

impl Lexicon {
    /// Build a lexicon from ordered `(text, rank)` pairs
    ///
    /// # Errors
    /// Returns `LexiconError` on the first invalid word, out-of-range tier or
    /// duplicate word, and on an empty input.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::new([("crane", 6), ("slate", 5)]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    ///
    /// assert!(Lexicon::new([("crane", 9)]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(
        pairs: impl IntoIterator<Item = (S, u8)>,
    ) -> Result<Self, LexiconError> {
        let mut words = Vec::new();
        let mut tiers = Vec::new();
        let mut seen = FxHashSet::default();

        for (text, rank) in pairs {
            let text = text.as_ref();
            let word = Word::new(text).map_err(|source| LexiconError::InvalidWord {
                text: text.to_string(),
                source,
            })?;
            let tier = FrequencyTier::new(rank).ok_or_else(|| LexiconError::TierOutOfRange {
                word: text.to_string(),
                rank,
            })?;

            if !seen.insert(word) {
                return Err(LexiconError::DuplicateWord(word.to_string()));
            }

            words.push(word);
            tiers.push(tier);
        }

        if words.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self { words, tiers })
    }

    /// Build the compiled-in default lexicon
    ///
    /// # Errors
    /// Returns `LexiconError` if the embedded table is malformed (caught by
    /// the test suite; should never happen in a built binary).
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::new(embedded::DEFAULT_LEXICON.iter().copied())
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon is empty (never true for a constructed lexicon)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate `(Word, FrequencyTier)` entries in load order
    pub fn entries(&self) -> impl Iterator<Item = (Word, FrequencyTier)> + '_ {
        self.words
            .iter()
            .copied()
            .zip(self.tiers.iter().copied())
    }

    /// Check whether a word belongs to the lexicon
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Look up a word's frequency tier
    #[must_use]
    pub fn tier_of(&self, word: &Word) -> Option<FrequencyTier> {
        self.words
            .iter()
            .position(|w| w == word)
            .map(|i| self.tiers[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_accepts_valid_ranks() {
        for rank in 1..=6 {
            let tier = FrequencyTier::new(rank).unwrap();
            assert_eq!(tier.rank(), rank);
        }
    }

    #[test]
    fn tier_rejects_out_of_range() {
        assert!(FrequencyTier::new(0).is_none());
        assert!(FrequencyTier::new(7).is_none());
        assert!(FrequencyTier::new(255).is_none());
    }

    #[test]
    fn tier_ordering() {
        assert!(FrequencyTier::RAREST < FrequencyTier::MOST_COMMON);
        assert_eq!(FrequencyTier::RAREST.rank(), 1);
        assert_eq!(FrequencyTier::MOST_COMMON.rank(), 6);
    }

    #[test]
    fn lexicon_preserves_load_order() {
        let lexicon = Lexicon::new([("slate", 5), ("crane", 6), ("irate", 4)]).unwrap();

        let words: Vec<&str> = lexicon.words().iter().map(Word::as_str).collect();
        assert_eq!(words, ["slate", "crane", "irate"]);

        let tiers: Vec<u8> = lexicon.entries().map(|(_, t)| t.rank()).collect();
        assert_eq!(tiers, [5, 6, 4]);
    }

    #[test]
    fn lexicon_rejects_invalid_word() {
        let result = Lexicon::new([("crane", 6), ("toolong", 5)]);
        assert!(matches!(result, Err(LexiconError::InvalidWord { .. })));
    }

    #[test]
    fn lexicon_rejects_out_of_range_tier() {
        let result = Lexicon::new([("crane", 6), ("slate", 0)]);
        assert!(matches!(
            result,
            Err(LexiconError::TierOutOfRange { rank: 0, .. })
        ));

        let result = Lexicon::new([("crane", 7)]);
        assert!(matches!(
            result,
            Err(LexiconError::TierOutOfRange { rank: 7, .. })
        ));
    }

    #[test]
    fn lexicon_rejects_duplicates() {
        let result = Lexicon::new([("crane", 6), ("slate", 5), ("crane", 4)]);
        assert_eq!(result.unwrap_err(), LexiconError::DuplicateWord("crane".into()));
    }

    #[test]
    fn lexicon_duplicate_detection_is_case_insensitive() {
        let result = Lexicon::new([("crane", 6), ("CRANE", 5)]);
        assert!(matches!(result, Err(LexiconError::DuplicateWord(_))));
    }

    #[test]
    fn lexicon_rejects_empty() {
        let pairs: [(&str, u8); 0] = [];
        let result = Lexicon::new(pairs);
        assert!(matches!(result, Err(LexiconError::Empty)));
    }

    #[test]
    fn lexicon_lookup() {
        let lexicon = Lexicon::new([("crane", 6), ("fjord", 1)]).unwrap();

        let crane = Word::new("crane").unwrap();
        let fjord = Word::new("fjord").unwrap();
        let slate = Word::new("slate").unwrap();

        assert!(lexicon.contains(&crane));
        assert!(!lexicon.contains(&slate));
        assert_eq!(lexicon.tier_of(&crane).unwrap().rank(), 6);
        assert_eq!(lexicon.tier_of(&fjord).unwrap().rank(), 1);
        assert!(lexicon.tier_of(&slate).is_none());
    }

    #[test]
    fn embedded_lexicon_is_valid() {
        let lexicon = Lexicon::embedded().unwrap();
        assert_eq!(lexicon.len(), DEFAULT_LEXICON_COUNT);
    }

    #[test]
    fn embedded_lexicon_covers_all_tiers() {
        let lexicon = Lexicon::embedded().unwrap();
        for rank in 1..=6 {
            assert!(
                lexicon.entries().any(|(_, t)| t.rank() == rank),
                "no embedded words with tier {rank}"
            );
        }
    }
}
