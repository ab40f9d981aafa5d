//! Lexicon loading from frequency files
//!
//! A frequency file is plain text with one `word tier` pair per line, e.g.
//! `crane 6`. Blank lines are skipped; anything else malformed is a fatal
//! configuration error.

use super::{Lexicon, LexiconError};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Load a lexicon from a frequency file on disk
///
/// # Errors
/// Returns an error if the file cannot be read or any line is malformed.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::lexicon::loader;
///
/// let lexicon = loader::load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Lexicon> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
    let lexicon = parse_frequency_file(&content)
        .with_context(|| format!("Invalid lexicon file {}", path.display()))?;
    Ok(lexicon)
}

/// Parse frequency-file content into a lexicon
///
/// # Errors
/// Returns `LexiconError` on the first malformed line, duplicate word or
/// out-of-range tier, and on content with no entries at all.
pub fn parse_frequency_file(content: &str) -> Result<Lexicon, LexiconError> {
    let mut pairs = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((word, tier_text)) = trimmed.split_once(char::is_whitespace) else {
            return Err(LexiconError::MissingTier(trimmed.to_string()));
        };
        let tier_text = tier_text.trim();
        let rank: u8 = tier_text
            .parse()
            .map_err(|_| LexiconError::UnparsableTier {
                word: word.to_string(),
                text: tier_text.to_string(),
            })?;

        pairs.push((word, rank));
    }

    Lexicon::new(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_tier_lines() {
        let lexicon = parse_frequency_file("crane 6\nslate 5\nfjord 1\n").unwrap();
        assert_eq!(lexicon.len(), 3);

        let ranks: Vec<u8> = lexicon.entries().map(|(_, t)| t.rank()).collect();
        assert_eq!(ranks, [6, 5, 1]);
    }

    #[test]
    fn skips_blank_lines() {
        let lexicon = parse_frequency_file("\ncrane 6\n\n   \nslate 5\n").unwrap();
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn tolerates_extra_spacing() {
        let lexicon = parse_frequency_file("  crane   6  \n").unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.words()[0].as_str(), "crane");
    }

    #[test]
    fn normalizes_case() {
        let lexicon = parse_frequency_file("CRANE 6\n").unwrap();
        assert_eq!(lexicon.words()[0].as_str(), "crane");
    }

    #[test]
    fn rejects_line_without_tier() {
        let result = parse_frequency_file("crane 6\nslate\n");
        assert!(matches!(result, Err(LexiconError::MissingTier(_))));
    }

    #[test]
    fn rejects_non_numeric_tier() {
        let result = parse_frequency_file("crane six\n");
        assert!(matches!(result, Err(LexiconError::UnparsableTier { .. })));
    }

    #[test]
    fn rejects_trailing_fields() {
        // `crane 6 extra` leaves `6 extra` as the tier field, which fails to parse
        let result = parse_frequency_file("crane 6 extra\n");
        assert!(matches!(result, Err(LexiconError::UnparsableTier { .. })));
    }

    #[test]
    fn rejects_invalid_words_and_tiers() {
        assert!(matches!(
            parse_frequency_file("cranes 6\n"),
            Err(LexiconError::InvalidWord { .. })
        ));
        assert!(matches!(
            parse_frequency_file("crane 0\n"),
            Err(LexiconError::TierOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_duplicates_across_lines() {
        let result = parse_frequency_file("crane 6\nslate 5\ncrane 3\n");
        assert!(matches!(result, Err(LexiconError::DuplicateWord(_))));
    }

    #[test]
    fn rejects_empty_content() {
        assert!(matches!(
            parse_frequency_file(""),
            Err(LexiconError::Empty)
        ));
        assert!(matches!(
            parse_frequency_file("\n  \n"),
            Err(LexiconError::Empty)
        ));
    }
}
