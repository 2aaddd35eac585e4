//! Build and store an opening book

use crate::core::Corpus;
use crate::solver::{OpeningBook, RankerConfig};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use log::info;
use std::path::Path;
use std::time::{Duration, Instant};

/// Rank every opening guess for `corpus` and write the book to `path`
///
/// # Errors
/// Returns an error if the book cannot be written.
pub fn build_opening_book(
    corpus: &Corpus,
    config: &RankerConfig,
    path: &Path,
    show_progress: bool,
) -> Result<OpeningBook> {
    let spinner = if show_progress {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    spinner.set_message(format!(
        "Ranking {} openings against {} solutions...",
        corpus.guessable().len(),
        corpus.solutions().len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let book = OpeningBook::compute(corpus, config);
    spinner.finish_and_clear();
    info!(
        "ranked {} openings in {:.2?}",
        book.scores().len(),
        start.elapsed()
    );

    book.write_to(path)
        .with_context(|| format!("failed to write opening book to {}", path.display()))?;
    Ok(book)
}
