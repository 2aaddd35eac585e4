//! Formatting utilities for terminal output

use crate::core::{ALPHABET_SIZE, Feedback, Mark, WORD_LENGTH, Word, letter_at};
use crate::game::{LetterBank, LetterStatus};
use crate::solver::RankedGuess;
use colored::{ColoredString, Colorize};

/// Word banks longer than this are abbreviated
pub const WORD_BANK_LIMIT: usize = 10;

/// Words shown from an abbreviated word bank
const WORD_BANK_PREVIEW: usize = 8;

/// Format feedback marks as an emoji string
#[must_use]
pub fn marks_to_emoji(marks: &[Mark; WORD_LENGTH]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            Mark::Green => '🟩',
            Mark::Yellow => '🟨',
            Mark::Gray => '⬜',
        })
        .collect()
}

fn tile(letter: u8, mark: Mark) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match mark {
        Mark::Green => text.black().on_green().bold(),
        Mark::Yellow => text.black().on_yellow().bold(),
        Mark::Gray => text.white().on_bright_black(),
    }
}

/// One guess as a row of colored tiles
#[must_use]
pub fn feedback_row(feedback: &Feedback) -> String {
    feedback
        .word()
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| tile(letter, mark).to_string())
        .collect()
}

/// The alphabet colored by what is known about each letter
#[must_use]
pub fn letter_bank_line(bank: &LetterBank) -> String {
    (0..ALPHABET_SIZE)
        .map(letter_at)
        .map(|letter| {
            let text = char::from(letter).to_string();
            match bank.status(letter) {
                Some(LetterStatus::Green) => text.green().bold().to_string(),
                Some(LetterStatus::Yellow) => text.yellow().bold().to_string(),
                Some(LetterStatus::Gray) => text.bright_black().to_string(),
                None => text,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma-separated words, abbreviated past [`WORD_BANK_LIMIT`]
#[must_use]
pub fn word_bank_summary(words: &[Word]) -> String {
    let joined = |words: &[Word]| {
        words
            .iter()
            .map(Word::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    if words.len() > WORD_BANK_LIMIT {
        format!(
            "{} ... plus {} more words",
            joined(&words[..WORD_BANK_PREVIEW]),
            words.len() - WORD_BANK_PREVIEW
        )
    } else {
        joined(words)
    }
}

/// Best, median and worst of a bucket that is already sorted best first
#[must_use]
pub fn best_median_worst(ranked: &[RankedGuess]) -> Option<[RankedGuess; 3]> {
    let best = *ranked.first()?;
    let worst = *ranked.last()?;
    Some([best, ranked[ranked.len() / 2], worst])
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
