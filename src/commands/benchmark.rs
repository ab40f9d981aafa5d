//! Benchmark command
//!
//! Runs automated solves across many target words and aggregates the guess
//! distribution.

use crate::core::{Feedback, Word};
use crate::solver::{Solver, filter_candidates};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Official game length; solves beyond this count as losses in the stats
pub const WIN_LIMIT: usize = 6;

/// Aggregated result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkReport {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Solves that finished within the official six guesses
    pub solved_within_limit: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved targets needing that many
    pub distribution: HashMap<usize, usize>,
    /// Slowest solved targets (5+ guesses), worst first
    pub hardest: Vec<(Word, usize)>,
    /// Targets not solved within the turn ceiling
    pub unsolved: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
    /// Seed the run's random source was created from, for reproduction
    pub seed: u64,
}

/// Solve every target in turn and collect statistics
///
/// `max_turns` caps each individual solve; targets that exceed it (or
/// exhaust their candidates) count as failed.
#[allow(clippy::too_many_lines)] // Statistics aggregation
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    max_turns: usize,
    seed: u64,
    rng: &mut impl Rng,
) -> BenchmarkReport {
    println!("🎯 Benchmarking {} words...", targets.len());

    // Progress bar
    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut results: Vec<(Word, Option<usize>)> = Vec::new();
    let mut total_guesses = 0;

    for (idx, target) in targets.iter().enumerate() {
        let outcome = solve_turns(solver, target, max_turns, rng);
        if let Some(turns) = outcome {
            total_guesses += turns;
        }
        results.push((*target, outcome));

        // Update progress
        let solved_so_far = results.iter().filter(|(_, t)| t.is_some()).count();
        if idx % 10 == 0 && solved_so_far > 0 {
            let avg = total_guesses as f64 / solved_so_far as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for turns in results.iter().filter_map(|(_, t)| *t) {
        *distribution.entry(turns).or_insert(0) += 1;
    }

    let unsolved: Vec<Word> = results
        .iter()
        .filter(|(_, turns)| turns.is_none())
        .map(|(word, _)| *word)
        .collect();
    let solved = targets.len() - unsolved.len();

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    let solved_within_limit = results
        .iter()
        .filter_map(|(_, turns)| *turns)
        .filter(|turns| *turns <= WIN_LIMIT)
        .count();

    let mut hardest: Vec<(Word, usize)> = results
        .iter()
        .filter_map(|(word, turns)| turns.map(|t| (*word, t)))
        .filter(|(_, turns)| *turns >= 5)
        .collect();
    hardest.sort_by_key(|(_, turns)| std::cmp::Reverse(*turns));
    hardest.truncate(10);

    BenchmarkReport {
        total_words: targets.len(),
        solved,
        failed: unsolved.len(),
        solved_within_limit,
        average_guesses,
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        hardest,
        unsolved,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64(),
        seed,
    }
}

/// Number of turns to reach `target`, or `None` if the solve ran out
fn solve_turns(
    solver: &Solver<'_>,
    target: &Word,
    max_turns: usize,
    rng: &mut impl Rng,
) -> Option<usize> {
    let mut candidates = solver.lexicon().words().to_vec();

    for turn in 1..=max_turns {
        let guess = solver.select_guess(&candidates, rng)?;
        if guess == *target {
            return Some(turn);
        }
        let feedback = Feedback::compute(target, &guess);
        candidates = filter_candidates(&candidates, &guess, &feedback);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::solver::{PenaltyTable, SolverConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> Lexicon {
        let texts = [
            "crane", "slate", "crate", "trace", "stale", "least", "grain", "mouse", "plant",
            "house",
        ];
        Lexicon::new(texts.map(|t| (t, 6))).unwrap()
    }

    #[test]
    fn benchmark_solves_lexicon_targets() {
        let lexicon = lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());
        let mut rng = StdRng::seed_from_u64(9);

        let targets = lexicon.words().to_vec();
        let report = run_benchmark(&solver, &targets, lexicon.len(), 9, &mut rng);

        assert_eq!(report.total_words, targets.len());
        assert_eq!(report.solved, targets.len());
        assert_eq!(report.failed, 0);
        assert!(report.unsolved.is_empty());
        assert!(report.average_guesses >= 1.0);
        assert!(report.min_guesses >= 1);
        assert!(report.max_guesses <= lexicon.len());
        assert_eq!(report.seed, 9);
    }

    #[test]
    fn distribution_accounts_for_every_solved_target() {
        let lexicon = lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());
        let mut rng = StdRng::seed_from_u64(9);

        let targets = lexicon.words().to_vec();
        let report = run_benchmark(&solver, &targets, lexicon.len(), 9, &mut rng);

        let counted: usize = report.distribution.values().sum();
        assert_eq!(counted, report.solved);
        assert!(report.solved_within_limit <= report.solved);
        assert!(report.average_guesses >= report.min_guesses as f64);
        assert!(report.average_guesses <= report.max_guesses as f64);
        for (_, turns) in &report.hardest {
            assert!(*turns >= 5);
        }
    }

    #[test]
    fn out_of_lexicon_target_counts_as_failed() {
        let lexicon = lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());
        let mut rng = StdRng::seed_from_u64(9);

        let targets = vec![Word::new("vivid").unwrap()];
        let report = run_benchmark(&solver, &targets, 10, 9, &mut rng);

        assert_eq!(report.solved, 0);
        assert_eq!(report.failed, 1);
        assert_eq!(report.unsolved, targets);
        assert_eq!(report.solved_within_limit, 0);
    }

    #[test]
    fn empty_target_list_reports_zeroes() {
        let lexicon = lexicon();
        let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
        let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());
        let mut rng = StdRng::seed_from_u64(9);

        let report = run_benchmark(&solver, &[], 10, 9, &mut rng);

        assert_eq!(report.total_words, 0);
        assert_eq!(report.solved, 0);
        assert_eq!(report.failed, 0);
        assert!(report.distribution.is_empty());
    }
}
