//! Interactive assistant mode
//!
//! Suggests a guess each turn and reads the real feedback typed by the
//! player. The candidate set is rebuilt from the feedback history every
//! turn, which makes undo a simple pop.

use crate::core::{Feedback, Word};
use crate::output::formatters::ordinal;
use crate::solver::{Solver, filter_candidates};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the interactive assistant loop
///
/// # Errors
///
/// Returns an error if reading user input fails or the guess pool is empty
/// before any feedback has been entered.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play(solver: &Solver<'_>, rng: &mut impl Rng) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Assistant - Worst-Case Minimizer           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest a guess each turn; type it into your game and enter");
    println!("the feedback you get back:\n");
    println!("  - G/g/🟩 for green (correct position)");
    println!("  - Y/y/🟨 for yellow (in the word, wrong position)");
    println!("  - X/x/⬜ for gray (no further occurrence)");
    println!("  - Or type 'win' if you got it!\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'undo' to take back a guess\n");
    if solver.config().hard_mode {
        println!("{}\n", "Hard mode: suggestions stay consistent with all feedback".yellow());
    }

    let mut history: Vec<(Word, Feedback)> = Vec::new();

    loop {
        let candidates = replay_history(solver, &history);
        let turn = history.len() + 1;

        if candidates.is_empty() {
            println!("\n{}", "NO KNOWN WORDS LEFT!".red().bold());
            println!("Some feedback was inconsistent, or the target is not in my lexicon.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match read_input("Command")?.to_lowercase().as_str() {
                "undo" | "u" => {
                    if history.pop().is_some() {
                        println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" | "n" => {
                    history.clear();
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        }

        let guess = solver
            .select_guess(&candidates, rng)
            .ok_or("No valid guesses available")?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "{} guess: {}   ({} candidate{} remaining)",
            ordinal(turn),
            guess.as_str().to_uppercase().bright_white().bold(),
            candidates.len(),
            if candidates.len() == 1 { "" } else { "s" }
        );
        println!("────────────────────────────────────────────────────────────");

        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in &candidates {
                println!("  • {}", candidate.as_str().to_uppercase());
            }
            println!();
        }

        // Read feedback, or a command that restarts the turn
        let feedback = loop {
            let input = read_input("Enter feedback (G/Y/X, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "solved" => break Some(Feedback::ALL_HIT),
                _ => match input.parse::<Feedback>() {
                    Ok(parsed) => break Some(parsed),
                    Err(error) => println!("❌ {error}\n"),
                },
            }
        };

        let Some(feedback) = feedback else { continue };
        history.push((guess, feedback));

        if feedback.is_all_hit() {
            print_victory(&history);
            match read_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    history.clear();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        } else if history.len() == 6 {
            // Out of official guesses, but keep assisting
            println!("\n{}", "That was guess six - an official game is lost.".red());
            println!("I'll keep narrowing it down if you want to play on.\n");
        }
    }
}

/// Rebuild the candidate set by filtering the full lexicon through history
fn replay_history(solver: &Solver<'_>, history: &[(Word, Feedback)]) -> Vec<Word> {
    let mut candidates = solver.lexicon().words().to_vec();
    for (guess, feedback) in history {
        candidates = filter_candidates(&candidates, guess, feedback);
    }
    candidates
}

fn print_victory(history: &[(Word, Feedback)]) {
    let turns = history.len();

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "          🎉  S O L V E D !  🎉          ".bright_green().bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let flair = match turns {
        1 => "Incredible hole-in-one!",
        2 => "Outstanding!",
        3 => "Great solving!",
        4 => "Nice work!",
        5 | 6 => "Got there!",
        _ => "Solved, past the official six.",
    };
    println!("\n  {}", flair.bright_white());
    println!(
        "  Found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (word, feedback)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.as_str().to_uppercase().bright_white().bold(),
            feedback.to_emoji()
        );
    }
    println!("\n{}\n", "═".repeat(62).bright_cyan());
}

/// Prompt and read one trimmed line from stdin
fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
