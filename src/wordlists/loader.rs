//! Word list loading utilities
//!
//! Reads plain word-per-line files. Validation happens when the words become a [`Corpus`].

use crate::core::Corpus;
use crate::error::EngineError;
use std::fs;
use std::io;
use std::path::Path;

/// Read one word per line, trimming whitespace and skipping blank lines
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::read_word_file;
///
/// let words = read_word_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_word_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_lines(&content))
}

/// Split text into trimmed, non-empty lines
#[must_use]
pub fn parse_word_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Build a corpus from two word lists
///
/// # Errors
///
/// Returns `EngineError::InvalidCorpus` if a word is malformed or the lists overlap.
pub fn corpus_from_lists(
    solutions: &[String],
    non_solutions: &[String],
) -> Result<Corpus, EngineError> {
    Corpus::from_strs(
        solutions.iter().map(String::as_str),
        non_solutions.iter().map(String::as_str),
    )
}
