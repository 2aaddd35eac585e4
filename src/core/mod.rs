//! Core domain types for Wordle
//!
//! Words, feedback, accumulated constraints and the index that filters words by them.
//! Nothing here touches I/O or global state.

mod constraint;
mod corpus;
mod feedback;
mod index;
mod word;
mod word_set;

pub use constraint::Constraint;
pub use corpus::Corpus;
pub use feedback::{Feedback, LetterCounts, Mark, PositionSet};
pub use index::ConstraintIndex;
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_at, letter_index};
pub use word_set::WordSet;
