//! Display functions for command results

use super::formatters::count_bar;
use crate::commands::benchmark::WIN_LIMIT;
use crate::commands::{AnalysisReport, BenchmarkReport, SolveReport};
use colored::Colorize;

/// Print the report of an automated solve
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.guess.as_str().to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Penalty:    {:.3}x", step.penalty);
        }
    }

    println!();
    if report.solved {
        let turns = report.steps.len();
        println!("{}", format!("✅ Solved in {turns} guesses!").green().bold());
        if turns > WIN_LIMIT {
            println!(
                "{}",
                "   (past the official six, so a real game is lost)".yellow()
            );
        }
    } else if report.exhausted {
        println!(
            "{}",
            format!(
                "❌ No candidates left after {} guesses; the target is not in the lexicon",
                report.steps.len()
            )
            .red()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved within {} guesses", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the report of a benchmark run
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", report.total_words);
    println!(
        "   Solved:           {} {}",
        report.solved,
        format!(
            "({:.1}%)",
            report.solved as f64 / report.total_words.max(1) as f64 * 100.0
        )
        .green()
    );
    println!(
        "   Within six:       {} {}",
        report.solved_within_limit,
        format!(
            "({:.1}%)",
            report.solved_within_limit as f64 / report.total_words.max(1) as f64 * 100.0
        )
        .green()
    );
    if report.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", report.failed).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", report.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", report.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", report.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", report.words_per_second);
    println!("   Seed:             {}", report.seed);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = report.distribution.values().copied().max().unwrap_or(0);
    for guess_count in 1..=report.max_guesses.max(WIN_LIMIT) {
        if let Some(&count) = report.distribution.get(&guess_count) {
            let pct = (count as f64 / report.total_words.max(1) as f64) * 100.0;
            let bar = count_bar(count, max_count, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !report.hardest.is_empty() {
        println!("\n😰 {}", "Hardest words (5+ guesses):".yellow().bold());
        for (word, turns) in report.hardest.iter().take(5) {
            println!(
                "   {} ({} guesses)",
                word.as_str().to_uppercase().yellow(),
                turns
            );
        }
    }

    if !report.unsolved.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        for word in report.unsolved.iter().take(5) {
            println!("   {}", word.as_str().to_uppercase().red());
        }
        if report.unsolved.len() > 5 {
            println!("   ... and {} more", report.unsolved.len() - 5);
        }
    }
}

/// Print the report of a word analysis
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PROBE ANALYSIS:".bright_cyan().bold(),
        report.word.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} lexicon words:", report.lexicon_size);
    match report.tier {
        Some(tier) => println!("   Tier:        {tier} of 6"),
        None => println!("   Tier:        {}", "not in the lexicon".bright_black()),
    }
    println!(
        "   Penalty:     {}",
        format!("{:.3}x", report.penalty).bright_yellow()
    );

    let bar = count_bar(report.worst_bucket as usize, report.lexicon_size, 30);
    println!(
        "   Worst case:  [{}] {}",
        bar.green(),
        format!("{} candidates share one feedback", report.worst_bucket).bright_yellow()
    );
    println!("   Feedbacks:   {} distinct codes", report.distinct_feedbacks);
    println!(
        "   Score:       {}",
        format!("{:.2}", report.score).bright_yellow().bold()
    );
}
