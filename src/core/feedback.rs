//! Feedback for a single guess
//!
//! Instead of green/yellow/gray squares, feedback is kept as four facts about the solution:
//!
//! - exact letter counts: the guess used a letter more often than the solution has it, so the
//!   solution's count is now fully known (possibly 0)
//! - minimum letter counts: the guess used a letter no more often than the solution has it, so
//!   the solution has at least that many
//! - positives: `(letter, index)` pairs that match the solution
//! - negatives: `(letter, index)` pairs that do not
//!
//! The exact/minimum split is what makes duplicate letters come out right. Squares are derived
//! from it only for display (see [`Feedback::marks`]).

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_at, letter_index};
use std::fmt;

/// A partial mapping from letter to count
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([Option<u8>; ALPHABET_SIZE]);

impl LetterCounts {
    /// Build from `(letter, count)` pairs; later pairs overwrite earlier ones
    #[must_use]
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut counts = Self::default();
        for &(letter, count) in pairs {
            counts.set(letter, count);
        }
        counts
    }

    /// Count for `letter`; `None` if unset or `letter` is not `A`-`Z`
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> Option<u8> {
        if letter.is_ascii_uppercase() {
            self.0[letter_index(letter)]
        } else {
            None
        }
    }

    /// # Panics
    /// Panics if `letter` is not `A`-`Z`.
    #[inline]
    pub const fn set(&mut self, letter: u8, count: u8) {
        self.0[letter_index(letter)] = Some(count);
    }

    /// # Panics
    /// Panics if `letter` is not `A`-`Z`.
    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0[letter_index(letter)] = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    /// `(letter, count)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, count)| count.map(|c| (letter_at(i), c)))
    }
}

impl fmt::Debug for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(letter, count)| (char::from(letter), count)))
            .finish()
    }
}

/// A set of `(letter, index)` pairs, stored as one letter bitmask per position
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet([u32; WORD_LENGTH]);

impl PositionSet {
    #[must_use]
    pub fn from_pairs(pairs: &[(u8, usize)]) -> Self {
        let mut set = Self::default();
        for &(letter, index) in pairs {
            set.insert(letter, index);
        }
        set
    }

    /// # Panics
    /// Panics if `letter` is not `A`-`Z` or `index >= 5`.
    #[inline]
    pub const fn insert(&mut self, letter: u8, index: usize) {
        self.0[index] |= 1 << letter_index(letter);
    }

    /// `false` for any `letter` outside `A`-`Z`
    ///
    /// # Panics
    /// Panics if `index >= 5`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8, index: usize) -> bool {
        letter.is_ascii_uppercase() && self.0[index] & (1 << letter_index(letter)) != 0
    }

    /// Add every pair of `other`
    pub fn union_with(&mut self, other: &Self) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0) {
            *mine |= theirs;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&mask| mask == 0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().map(|mask| mask.count_ones() as usize).sum()
    }

    /// Letters appearing at any position, as a bitmask indexed by [`letter_index`]
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.0.iter().fold(0, |acc, &mask| acc | mask)
    }

    /// `(letter, index)` pairs ordered by index, then letter
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0.iter().enumerate().flat_map(|(index, &mask)| {
            (0..ALPHABET_SIZE)
                .filter(move |&l| mask & (1 << l) != 0)
                .map(move |l| (letter_at(l), index))
        })
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|(letter, index)| (char::from(letter), index)))
            .finish()
    }
}

/// Display mark for one square of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right letter, right position
    Green,
    /// Letter is in the solution elsewhere
    Yellow,
    /// Letter is not (or no longer) in the solution
    Gray,
}

/// Feedback from one guess against one solution
///
/// A frozen value: built by [`Feedback::evaluate`] and only read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    word: Word,
    exact_letter_counts: LetterCounts,
    minimum_letter_counts: LetterCounts,
    positives: PositionSet,
    negatives: PositionSet,
}

impl Feedback {
    /// Evaluate `guess` against `solution`
    ///
    /// Pure: the same pair always yields the same feedback. Validation of the guess (length,
    /// vocabulary) happens before this, in [`Corpus::parse_guess`](super::Corpus::parse_guess).
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, Word};
    ///
    /// let guess = Word::new("SPEED").unwrap();
    /// let solution = Word::new("ERASE").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &solution);
    ///
    /// // Two E's guessed, two in the solution: at least two
    /// assert_eq!(feedback.minimum_letter_counts().get(b'E'), Some(2));
    /// // One D guessed, none in the solution: exactly zero
    /// assert_eq!(feedback.exact_letter_counts().get(b'D'), Some(0));
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let guessed = guess.letter_counts();
        let available = solution.letter_counts();

        let mut exact_letter_counts = LetterCounts::default();
        let mut minimum_letter_counts = LetterCounts::default();
        for (i, (&guessed_count, &solution_count)) in guessed.iter().zip(&available).enumerate() {
            if guessed_count == 0 {
                continue;
            }
            let letter = letter_at(i);
            if guessed_count > solution_count {
                exact_letter_counts.set(letter, solution_count);
            } else {
                minimum_letter_counts.set(letter, guessed_count);
            }
        }

        let mut positives = PositionSet::default();
        let mut negatives = PositionSet::default();
        for (index, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
            if g == s {
                positives.insert(g, index);
            } else {
                negatives.insert(g, index);
            }
        }

        Self {
            word: *guess,
            exact_letter_counts,
            minimum_letter_counts,
            positives,
            negatives,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
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

    /// Whether every letter was in place
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.positives.len() == WORD_LENGTH
    }

    /// Green/yellow/gray marks for display
    ///
    /// Greens come from positives. Each letter then has `count - greens` yellows to hand out
    /// left to right, where count is the exact or minimum count for that letter.
    #[must_use]
    pub fn marks(&self) -> [Mark; WORD_LENGTH] {
        let mut remaining = [0u8; ALPHABET_SIZE];
        for (letter, count) in self
            .exact_letter_counts
            .iter()
            .chain(self.minimum_letter_counts.iter())
        {
            remaining[letter_index(letter)] = count;
        }

        let mut marks = [Mark::Gray; WORD_LENGTH];
        for (index, &letter) in self.word.letters().iter().enumerate() {
            if self.positives.contains(letter, index) {
                marks[index] = Mark::Green;
                let slot = &mut remaining[letter_index(letter)];
                *slot = slot.saturating_sub(1);
            }
        }
        for (index, &letter) in self.word.letters().iter().enumerate() {
            if marks[index] == Mark::Green {
                continue;
            }
            let slot = &mut remaining[letter_index(letter)];
            if *slot > 0 {
                marks[index] = Mark::Yellow;
                *slot -= 1;
            }
        }
        marks
    }
}
