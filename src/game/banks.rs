//! Render-agnostic summaries of what the player knows

use crate::core::{ALPHABET_SIZE, Constraint, Feedback, Word, letter_at, letter_index};

/// Known status of one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    /// Seen in its correct position at least once
    Green,
    /// Guessed, neither placed nor ruled out
    Yellow,
    /// Ruled out entirely
    Gray,
}

/// Letter status across all guesses so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterBank {
    greens: u32,
    yellows: u32,
    grays: u32,
}

impl LetterBank {
    /// Summarize `guesses` given their merged `constraint`
    ///
    /// - greens: letters with a known positive
    /// - grays: letters with an exact count of 0
    /// - yellows: any other guessed letter
    #[must_use]
    pub fn new(guesses: &[Feedback], constraint: &Constraint) -> Self {
        let greens = constraint.positives().letter_mask();
        let grays = constraint
            .exact_letter_counts()
            .iter()
            .filter(|&(_, count)| count == 0)
            .fold(0, |acc, (letter, _)| acc | 1 << letter_index(letter));
        let guessed = guesses
            .iter()
            .flat_map(|g| g.word().letters())
            .fold(0u32, |acc, &letter| acc | 1 << letter_index(letter));

        Self {
            greens,
            yellows: guessed & !(greens | grays),
            grays,
        }
    }

    /// Status of `letter`, or `None` if it has never been guessed or is not `A`-`Z`
    #[must_use]
    pub const fn status(&self, letter: u8) -> Option<LetterStatus> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let bit = 1 << letter_index(letter);
        if self.greens & bit != 0 {
            Some(LetterStatus::Green)
        } else if self.grays & bit != 0 {
            Some(LetterStatus::Gray)
        } else if self.yellows & bit != 0 {
            Some(LetterStatus::Yellow)
        } else {
            None
        }
    }

    #[must_use]
    pub fn greens(&self) -> Vec<u8> {
        letters_of(self.greens)
    }

    #[must_use]
    pub fn yellows(&self) -> Vec<u8> {
        letters_of(self.yellows)
    }

    #[must_use]
    pub fn grays(&self) -> Vec<u8> {
        letters_of(self.grays)
    }
}

fn letters_of(mask: u32) -> Vec<u8> {
    (0..ALPHABET_SIZE)
        .filter(|&i| mask & (1 << i) != 0)
        .map(letter_at)
        .collect()
}

/// Remaining candidate words, split by whether they can be the solution
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordBank {
    pub solutions: Vec<Word>,
    pub non_solutions: Vec<Word>,
}

impl WordBank {
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len() + self.non_solutions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty() && self.non_solutions.is_empty()
    }
}
