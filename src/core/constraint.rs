//! Accumulated constraint from every guess so far
//!
//! Same four facts as [`Feedback`], merged across guesses.

use super::feedback::{Feedback, LetterCounts, PositionSet};
use super::word::Word;

/// Everything known about the solution after some number of guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraint {
    exact_letter_counts: LetterCounts,
    minimum_letter_counts: LetterCounts,
    positives: PositionSet,
    negatives: PositionSet,
}

impl Constraint {
    /// Constraint that admits every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact_letter_counts.is_empty()
            && self.minimum_letter_counts.is_empty()
            && self.positives.is_empty()
            && self.negatives.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn exact_letter_counts(&self) -> &LetterCounts {
        &self.exact_letter_counts
    }

    #[inline]
    #[must_use]
    pub const fn minimum_letter_counts(&self) -> &LetterCounts {
        &self.minimum_letter_counts
    }

    #[inline]
    #[must_use]
    pub const fn positives(&self) -> &PositionSet {
        &self.positives
    }

    #[inline]
    #[must_use]
    pub const fn negatives(&self) -> &PositionSet {
        &self.negatives
    }

    /// Fold one guess's feedback into the constraint
    ///
    /// - an exact count replaces any minimum for that letter, and later minimums are dropped
    /// - minimums only grow
    /// - positives and negatives are unions
    ///
    /// Merging the same feedback twice is the same as merging it once.
    pub fn merge(&mut self, feedback: &Feedback) {
        for (letter, count) in feedback.exact_letter_counts().iter() {
            if self.exact_letter_counts.get(letter).is_none() {
                self.exact_letter_counts.set(letter, count);
            }
            self.minimum_letter_counts.remove(letter);
        }

        for (letter, count) in feedback.minimum_letter_counts().iter() {
            if self.exact_letter_counts.get(letter).is_some() {
                continue;
            }
            let current = self.minimum_letter_counts.get(letter).unwrap_or(0);
            self.minimum_letter_counts.set(letter, current.max(count));
        }

        self.positives.union_with(feedback.positives());
        self.negatives.union_with(feedback.negatives());
    }

    /// Check a single word directly, without an index
    ///
    /// Agrees with membership in [`ConstraintIndex::filter`](super::ConstraintIndex::filter).
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let counts = word.letter_counts();
        let count = |letter: u8| counts[super::word::letter_index(letter)];

        self.exact_letter_counts
            .iter()
            .all(|(letter, exact)| count(letter) == exact)
            && self
                .minimum_letter_counts
                .iter()
                .all(|(letter, minimum)| count(letter) >= minimum)
            && self
                .positives
                .iter()
                .all(|(letter, index)| word.letter_at(index) == letter)
            && self
                .negatives
                .iter()
                .all(|(letter, index)| word.letter_at(index) != letter)
    }
}

impl From<&Feedback> for Constraint {
    fn from(feedback: &Feedback) -> Self {
        Self {
            exact_letter_counts: *feedback.exact_letter_counts(),
            minimum_letter_counts: *feedback.minimum_letter_counts(),
            positives: *feedback.positives(),
            negatives: *feedback.negatives(),
        }
    }
}
