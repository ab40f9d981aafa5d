//! Wordle Minimax - CLI
//!
//! Penalty-weighted worst-case Wordle assistant. Guesses minimize the largest
//! surviving candidate set, with rare words handicapped so everyday answers
//! are preferred.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use wordle_minimax::{
    commands::{
        DEFAULT_MAX_TURNS, SolveOptions, analyze_word, run_benchmark, run_play, solve_target,
    },
    lexicon::{Lexicon, loader},
    output::{print_analysis_report, print_benchmark_report, print_solve_report},
    solver::{
        DEFAULT_HIGHEST_PENALTY, DEFAULT_MAX_COMPARISONS, PenaltyTable, Solver, SolverConfig,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle assistant minimizing the worst-case candidate count, penalty-weighted toward common words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: every guess must fit all feedback so far
    #[arg(long, global = true)]
    hard: bool,

    /// Load a custom lexicon file ("word tier" per line) instead of the built-in one
    #[arg(short = 'w', long, global = true)]
    lexicon: Option<PathBuf>,

    /// Penalty factor for the rarest frequency tier (must be >= 1)
    #[arg(short, long, global = true, default_value_t = DEFAULT_HIGHEST_PENALTY)]
    penalty: f64,

    /// Comparison budget for the minimax search
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_COMPARISONS)]
    budget: usize,

    /// Seed for the sampling RNG (random when omitted; benchmark reports it)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): you relay the game's feedback
    Play,

    /// Solve a known target word automatically
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and penalties per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze one word as a probe against the whole lexicon
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance over lexicon words
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(cli.lexicon.as_deref())?;
    let penalties = PenaltyTable::build(&lexicon, cli.penalty)?;
    let config = SolverConfig {
        hard_mode: cli.hard,
        max_comparisons: cli.budget,
    };
    let solver = Solver::new(&lexicon, &penalties, config);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&solver, &mut rng).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &solver, &mut rng),
        Commands::Analyze { word } => run_analyze_command(&word, &solver),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, seed, &solver, &mut rng);
            Ok(())
        }
    }
}

/// Load the lexicon named by `-w`, or the embedded default
fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => loader::load_from_file(path),
        None => Ok(Lexicon::embedded()?),
    }
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    solver: &Solver<'_>,
    rng: &mut StdRng,
) -> Result<()> {
    let options = SolveOptions::new(word.to_string());
    let report = solve_target(&options, solver, rng).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_report(&report, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, solver: &Solver<'_>) -> Result<()> {
    let report = analyze_word(word, solver).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_report(&report);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64, solver: &Solver<'_>, rng: &mut StdRng) {
    let targets: Vec<_> = solver
        .lexicon()
        .words()
        .iter()
        .take(count)
        .copied()
        .collect();

    let report = run_benchmark(solver, &targets, DEFAULT_MAX_TURNS, seed, rng);
    print_benchmark_report(&report);
}
