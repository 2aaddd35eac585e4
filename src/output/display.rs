//! Display functions for command results

use super::formatters::{
    best_median_worst, create_progress_bar, feedback_row, letter_bank_line, marks_to_emoji,
    word_bank_summary,
};
use crate::commands::BenchmarkResult;
use crate::core::Feedback;
use crate::game::{Game, LetterBank, WordBank};
use crate::solver::{OpeningBook, RankedGuess, RankingResult, choose_guess};
use colored::Colorize;
use std::io::{self, Write};

/// Write every guess as a row of tiles
///
/// # Errors
/// Returns any error from `out`.
pub fn write_board<W: Write>(out: &mut W, guesses: &[Feedback]) -> io::Result<()> {
    for feedback in guesses {
        writeln!(out, "{}", feedback_row(feedback))?;
    }
    Ok(())
}

/// Write every guess as a row of emoji squares, without letters
///
/// # Errors
/// Returns any error from `out`.
pub fn write_share_grid<W: Write>(out: &mut W, guesses: &[Feedback]) -> io::Result<()> {
    for feedback in guesses {
        writeln!(out, "{}", marks_to_emoji(&feedback.marks()))?;
    }
    Ok(())
}

/// # Errors
/// Returns any error from `out`.
pub fn write_letter_bank<W: Write>(out: &mut W, bank: &LetterBank) -> io::Result<()> {
    writeln!(out, "Letter Bank: {}", letter_bank_line(bank))
}

/// # Errors
/// Returns any error from `out`.
pub fn write_word_bank<W: Write>(out: &mut W, bank: &WordBank) -> io::Result<()> {
    writeln!(out, "Word Bank: {}", word_bank_summary(&bank.solutions))
}

/// Print the board, the candidate count and the ranking of the next guess
pub fn print_ranking_result(game: &Game<'_>, result: &RankingResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "RANKING AGAINST".bright_cyan().bold(),
        game.solution().as_str().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !game.guesses().is_empty() {
        println!();
        let mut stdout = io::stdout().lock();
        // A closed stdout only loses the board
        let _ = write_board(&mut stdout, game.guesses());
    }

    let candidates = game.candidate_solutions();
    println!(
        "\n📊 {} candidate solutions: {}",
        candidates.len(),
        word_bank_summary(&candidates)
    );

    if let Some(solution) = result.known_solution {
        println!(
            "\n✨ Solution is known: {}",
            solution.as_str().bright_green().bold()
        );
        return;
    }

    print_bucket("Solution guesses", &result.ranked_bucket(true));
    print_bucket("Non-solution guesses", &result.ranked_bucket(false));

    if result.timed_out {
        println!("\n{}", "<timed out>".yellow());
    }

    if let Some(best) = choose_guess(result, &candidates) {
        println!("\n🎯 Best guess: {}", best.as_str().bright_yellow().bold());
    }
}

fn print_bucket(title: &str, ranked: &[RankedGuess]) {
    println!("\n📈 {} ({})", title.bright_cyan().bold(), ranked.len());
    let Some([best, median, worst]) = best_median_worst(ranked) else {
        println!("   none scored");
        return;
    };
    for (label, guess) in [("Best", best), ("Median", median), ("Worst", worst)] {
        println!("   {label:<7} {} {:.3}", guess.word, guess.score);
    }
}

/// Print the top of an opening book
pub fn print_opening_book(book: &OpeningBook, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING BOOK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (rank, (word, score)) in book.scores().iter().take(top).enumerate() {
        println!("   {:>3}. {} {:.3}", rank + 1, word, score);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Success rate:     {} / {} = {}",
        result.solved,
        result.total_games,
        format!("{:.2}%", result.success_rate() * 100.0).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &result.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4}", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not solved:".red().bold());
        println!("   {}", word_bank_summary(&result.failures));
    }
}
