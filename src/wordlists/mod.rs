//! Word lists for Wordle
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{NON_SOLUTIONS, NON_SOLUTIONS_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Corpus;
use crate::error::EngineError;

/// Corpus built from the embedded lists
///
/// # Errors
///
/// Returns `EngineError::InvalidCorpus` if the embedded lists are malformed or overlap, which
/// the tests below rule out.
pub fn embedded_corpus() -> Result<Corpus, EngineError> {
    Corpus::from_strs(SOLUTIONS.iter().copied(), NON_SOLUTIONS.iter().copied())
}
