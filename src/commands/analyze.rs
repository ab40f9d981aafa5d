//! Word analysis command
//!
//! Reports how a single word behaves as a probe against the full lexicon.

use crate::core::Word;
use crate::lexicon::FrequencyTier;
use crate::solver::Solver;
use crate::solver::search::feedback_histogram;

/// Result of analyzing a word
pub struct AnalysisReport {
    pub word: Word,
    /// Frequency tier, or `None` when the word is outside the lexicon
    pub tier: Option<FrequencyTier>,
    pub penalty: f64,
    /// Largest group of lexicon words sharing one feedback for this probe
    pub worst_bucket: u32,
    /// How many distinct feedback codes the lexicon produces for this probe
    pub distinct_feedbacks: usize,
    /// Minimax score: worst bucket weighted by the penalty factor
    pub score: f64,
    pub lexicon_size: usize,
}

/// Analyze a word as a guess against every word in the lexicon
///
/// Words outside the lexicon are analyzed too; they carry no tier and the
/// neutral penalty factor.
///
/// # Errors
///
/// Returns an error if the word is not five ASCII letters.
pub fn analyze_word(text: &str, solver: &Solver<'_>) -> Result<AnalysisReport, String> {
    let word = Word::new(text).map_err(|e| format!("Invalid word: {e}"))?;

    let penalty = solver.penalties().factor(&word);
    let histogram = feedback_histogram(&word, solver.lexicon().words());
    let worst_bucket = histogram.iter().copied().max().unwrap_or(0);
    let distinct_feedbacks = histogram.iter().filter(|count| **count > 0).count();

    Ok(AnalysisReport {
        word,
        tier: solver.lexicon().tier_of(&word),
        penalty,
        worst_bucket,
        distinct_feedbacks,
        score: f64::from(worst_bucket) * penalty,
        lexicon_size: solver.lexicon().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::solver::{PenaltyTable, SolverConfig};

    fn probe_lexicon() -> Lexicon {
        let entries = [
            ("beach", 6),
            ("hilly", 1),
            ("billy", 1),
            ("dilly", 1),
            ("filly", 1),
        ];
        Lexicon::new(entries).unwrap()
    }

    #[test]
    fn analyzes_a_common_word() {
        let lexicon = probe_lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());

        let report = analyze_word("beach", &solver).unwrap();

        assert_eq!(report.word.as_str(), "beach");
        assert_eq!(report.tier, FrequencyTier::new(6));
        assert!((report.penalty - 1.0).abs() < 1e-12);
        assert_eq!(report.worst_bucket, 2);
        assert_eq!(report.distinct_feedbacks, 4);
        assert!((report.score - 2.0).abs() < 1e-12);
        assert_eq!(report.lexicon_size, 5);
    }

    #[test]
    fn penalty_weights_the_score_of_a_rare_word() {
        let lexicon = probe_lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());

        let report = analyze_word("hilly", &solver).unwrap();

        assert_eq!(report.tier, FrequencyTier::new(1));
        assert!((report.penalty - 2.5).abs() < 1e-12);
        assert_eq!(report.worst_bucket, 3);
        assert!((report.score - 7.5).abs() < 1e-12);
    }

    #[test]
    fn analyzes_a_word_outside_the_lexicon() {
        let lexicon = probe_lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());

        let report = analyze_word("vivid", &solver).unwrap();

        assert_eq!(report.tier, None);
        assert!((report.penalty - 1.0).abs() < 1e-12);
        assert!(report.worst_bucket >= 1);
        assert!(report.distinct_feedbacks >= 1);
    }

    #[test]
    fn rejects_a_malformed_word() {
        let lexicon = probe_lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());

        assert!(analyze_word("abc", &solver).is_err());
        assert!(analyze_word("sixsix", &solver).is_err());
    }
}
