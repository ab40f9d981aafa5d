//! Wordle Minimax
//!
//! A Wordle assistant that minimizes the worst-case number of remaining
//! candidates, weighted so obscure words are only guessed when they earn it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_minimax::lexicon::Lexicon;
//! use wordle_minimax::solver::{PenaltyTable, Solver, SolverConfig};
//!
//! let lexicon = Lexicon::embedded().unwrap();
//! let penalties = PenaltyTable::build(&lexicon, 2.5).unwrap();
//! let solver = Solver::new(&lexicon, &penalties, SolverConfig::default());
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let guess = solver.select_guess(lexicon.words(), &mut rng);
//! println!("Open with: {}", guess.unwrap());
//! ```

// Core domain types
pub mod core;

// Word list with frequency tiers
pub mod lexicon;

// Filtering and guess selection
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
