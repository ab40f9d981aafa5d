//! Wordle feedback calculation and representation
//!
//! Feedback for a guess is an ordered code of five symbols:
//! - Hit (green): the letter is correct for that exact position
//! - Present (yellow): the letter occurs elsewhere, subject to multiset accounting
//! - Absent (gray): no unaccounted occurrence of the letter remains
//!
//! The letter form used throughout is `G`/`Y`/`X`, e.g. `"XXGYX"`.

use super::Word;
use std::fmt;

/// One feedback symbol for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Gray: no further occurrence of the letter remains in the target
    Absent,
    /// Yellow: the letter occurs in the target but not at this position
    Present,
    /// Green: exact-position match
    Hit,
}

impl FeedbackSymbol {
    /// Base-3 digit used for ordinal encoding (Absent=0, Present=1, Hit=2)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    /// Uppercase letter form (`X`, `Y` or `G`)
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Absent => 'X',
            Self::Present => 'Y',
            Self::Hit => 'G',
        }
    }
}

/// Feedback code for a Wordle guess: exactly five symbols, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; 5]);

/// Error type for feedback strings that fail validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedFeedback {
    WrongLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for MalformedFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Feedback must be exactly 5 symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid feedback symbol '{ch}' (expected G, Y or X)")
            }
        }
    }
}

impl std::error::Error for MalformedFeedback {}

impl Feedback {
    /// Number of distinct feedback codes (3^5)
    pub const COUNT: usize = 243;

    /// All greens (perfect match)
    pub const ALL_HIT: Self = Self([FeedbackSymbol::Hit; 5]);

    /// Compute the feedback for `guess` when `target` is the hidden word
    ///
    /// Implements Wordle's exact rules, including proper handling of
    /// duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact-position matches as Hit; every unmatched
    ///    target letter goes into a remaining-letter pool
    /// 2. Second pass: scan guess positions left to right; each non-Hit
    ///    position claims one pooled occurrence of its letter (Present) if
    ///    any is left, otherwise stays Absent
    ///
    /// The left-to-right claim order matters: when a guess repeats a letter
    /// more times than the target has unconsumed, only the earliest
    /// occurrences are marked Present.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Feedback, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    ///
    /// // T(absent) R(hit) A(hit) C(present) E(hit)
    /// assert_eq!(Feedback::compute(&target, &guess).to_string(), "XGGYG");
    /// ```
    #[must_use]
    pub fn compute(target: &Word, guess: &Word) -> Self {
        let mut symbols = [FeedbackSymbol::Absent; 5];
        // Target letters not consumed by exact matches
        let mut remaining = [0u8; 26];

        // First pass: exact-position hits
        for i in 0..5 {
            if guess.letter_at(i) == target.letter_at(i) {
                symbols[i] = FeedbackSymbol::Hit;
            } else {
                remaining[letter_index(target.letter_at(i))] += 1;
            }
        }

        // Second pass: left-to-right claims on the remaining pool
        for i in 0..5 {
            if symbols[i] == FeedbackSymbol::Hit {
                continue;
            }
            let pooled = &mut remaining[letter_index(guess.letter_at(i))];
            if *pooled > 0 {
                *pooled -= 1;
                symbols[i] = FeedbackSymbol::Present;
            }
        }

        Self(symbols)
    }

    /// Get all five symbols in position order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; 5] {
        &self.0
    }

    /// Get the symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> FeedbackSymbol {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_all_hit(&self) -> bool {
        *self == Self::ALL_HIT
    }

    /// Base-3 ordinal of this code, in `0..Self::COUNT`
    ///
    /// Position 0 is the least significant digit, so `ALL_HIT` maps to 242.
    /// Dense enough to index a bucket array directly.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        let mut value = 0;
        let mut multiplier = 1;
        for symbol in &self.0 {
            value += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        value
    }

    /// Parse a feedback string like `"XXGYX"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// Accepts:
    /// - `G`/`g`/🟩 for a hit
    /// - `Y`/`y`/🟨 for a present letter
    /// - `X`/`x`/⬜ for an absent letter
    ///
    /// # Errors
    /// Returns `MalformedFeedback` when the string is not exactly five
    /// symbols or contains anything outside the set above.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Feedback;
    ///
    /// let letters = Feedback::parse("GYXXG").unwrap();
    /// let emoji = Feedback::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(letters, emoji);
    /// ```
    pub fn parse(s: &str) -> Result<Self, MalformedFeedback> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return Err(MalformedFeedback::WrongLength(chars.len()));
        }

        let mut symbols = [FeedbackSymbol::Absent; 5];
        for (i, ch) in chars.into_iter().enumerate() {
            symbols[i] = match ch {
                'G' | 'g' | '🟩' => FeedbackSymbol::Hit,
                'Y' | 'y' | '🟨' => FeedbackSymbol::Present,
                'X' | 'x' | '⬜' => FeedbackSymbol::Absent,
                other => return Err(MalformedFeedback::InvalidSymbol(other)),
            };
        }

        Ok(Self(symbols))
    }

    /// Convert the code to an emoji string like `"🟩🟨⬜🟩🟨"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        let mut result = String::with_capacity(20);
        for symbol in &self.0 {
            result.push(match symbol {
                FeedbackSymbol::Hit => '🟩',
                FeedbackSymbol::Present => '🟨',
                FeedbackSymbol::Absent => '⬜',
            });
        }
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = MalformedFeedback;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Index of a lowercase ASCII letter into a 26-slot count table
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}
