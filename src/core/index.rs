//! Precomputed lookup tables for constraint filtering
//!
//! Filtering by a [`Constraint`] is a handful of bitset intersections and differences instead
//! of a scan over every word. Tables are flat arrays indexed by `letter * width + slot`.

use super::constraint::Constraint;
use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use super::word_set::WordSet;

/// Counts range over `0..=WORD_LENGTH`
const COUNT_SLOTS: usize = WORD_LENGTH + 1;

/// Index over a fixed, sorted word list
#[derive(Debug, Clone)]
pub struct ConstraintIndex {
    words: Vec<Word>,
    all: WordSet,
    /// `letter * WORD_LENGTH + position`
    by_letter_at_position: Vec<WordSet>,
    /// `letter * COUNT_SLOTS + count`
    by_exact_letter_count: Vec<WordSet>,
    /// `letter * COUNT_SLOTS + minimum`
    by_minimum_letter_count: Vec<WordSet>,
}

impl ConstraintIndex {
    /// Build an index over `words`; duplicates are dropped and the rest sorted
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Constraint, ConstraintIndex, Feedback, Word};
    ///
    /// let words = ["CRANE", "CRATE", "TRACE", "SLATE"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let index = ConstraintIndex::new(words);
    ///
    /// let guess = Word::new("TRACE").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &Word::new("CRANE").unwrap());
    /// let remaining = index.filter(&Constraint::from(&feedback));
    /// let remaining: Vec<&str> = index.words_in(&remaining).map(Word::as_str).collect();
    /// assert_eq!(remaining, ["CRANE"]);
    /// ```
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();

        let n = words.len();
        let mut by_letter_at_position = vec![WordSet::empty(n); ALPHABET_SIZE * WORD_LENGTH];
        let mut by_exact_letter_count = vec![WordSet::empty(n); ALPHABET_SIZE * COUNT_SLOTS];

        for (i, word) in words.iter().enumerate() {
            for (position, &letter) in word.letters().iter().enumerate() {
                by_letter_at_position[letter_index(letter) * WORD_LENGTH + position].insert(i);
            }
            for (letter, &count) in word.letter_counts().iter().enumerate() {
                by_exact_letter_count[letter * COUNT_SLOTS + usize::from(count)].insert(i);
            }
        }

        // Minimum m is the union of exact counts m..=5, built from the top down
        let mut by_minimum_letter_count = vec![WordSet::empty(n); ALPHABET_SIZE * COUNT_SLOTS];
        for letter in 0..ALPHABET_SIZE {
            let mut running = WordSet::empty(n);
            for count in (0..COUNT_SLOTS).rev() {
                let slot = letter * COUNT_SLOTS + count;
                running.union_with(&by_exact_letter_count[slot]);
                by_minimum_letter_count[slot].copy_from(&running);
            }
        }

        Self {
            words,
            all: WordSet::full(n),
            by_letter_at_position,
            by_exact_letter_count,
            by_minimum_letter_count,
        }
    }

    /// Indexed words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Set of every indexed word
    #[inline]
    #[must_use]
    pub const fn all(&self) -> &WordSet {
        &self.all
    }

    /// Position of `word` in [`words`](Self::words)
    #[must_use]
    pub fn position_of(&self, word: &Word) -> Option<usize> {
        self.words.binary_search(word).ok()
    }

    /// The subset of `words` that this index knows about
    pub fn mask_of<'w>(&self, words: impl IntoIterator<Item = &'w Word>) -> WordSet {
        let mut set = WordSet::empty(self.len());
        for position in words.into_iter().filter_map(|w| self.position_of(w)) {
            set.insert(position);
        }
        set
    }

    /// Words of `set` in sorted order
    pub fn words_in<'a>(&'a self, set: &'a WordSet) -> impl Iterator<Item = &'a Word> + 'a {
        set.iter().map(move |i| &self.words[i])
    }

    /// Words consistent with `constraint`
    #[must_use]
    pub fn filter(&self, constraint: &Constraint) -> WordSet {
        let mut out = WordSet::empty(self.len());
        self.filter_into(constraint, &mut out);
        out
    }

    /// Number of words consistent with `constraint`, reusing `scratch` for the intermediate set
    #[must_use]
    pub fn count(&self, constraint: &Constraint, scratch: &mut WordSet) -> usize {
        self.filter_into(constraint, scratch);
        scratch.len()
    }

    /// Write the words consistent with `constraint` into `out`
    ///
    /// Starts from every word and applies one intersection or difference per fact. An empty
    /// constraint leaves `out` equal to the full set.
    pub fn filter_into(&self, constraint: &Constraint, out: &mut WordSet) {
        out.copy_from(&self.all);
        if constraint.is_empty() {
            return;
        }

        for (letter, count) in constraint.exact_letter_counts().iter() {
            let count = usize::from(count);
            if count >= COUNT_SLOTS {
                out.clear();
                return;
            }
            let letter = letter_index(letter);
            if count > 0 {
                out.intersect_with(&self.by_exact_letter_count[letter * COUNT_SLOTS + count]);
            } else {
                out.subtract(&self.by_minimum_letter_count[letter * COUNT_SLOTS + 1]);
            }
        }

        for (letter, minimum) in constraint.minimum_letter_counts().iter() {
            let minimum = usize::from(minimum);
            if minimum >= COUNT_SLOTS {
                out.clear();
                return;
            }
            out.intersect_with(
                &self.by_minimum_letter_count[letter_index(letter) * COUNT_SLOTS + minimum],
            );
        }

        for (letter, position) in constraint.positives().iter() {
            out.intersect_with(
                &self.by_letter_at_position[letter_index(letter) * WORD_LENGTH + position],
            );
        }

        for (letter, position) in constraint.negatives().iter() {
            out.subtract(
                &self.by_letter_at_position[letter_index(letter) * WORD_LENGTH + position],
            );
        }
    }

    /// A new index over just the words consistent with `constraint`
    #[must_use]
    pub fn narrow(&self, constraint: &Constraint) -> Self {
        let remaining = self.filter(constraint);
        Self::new(self.words_in(&remaining).copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts<'a>(index: &'a ConstraintIndex, set: &'a WordSet) -> Vec<&'a str> {
        index.words_in(set).map(Word::as_str).collect()
    }

    fn constraint_for(guess: &str, solution: &str) -> Constraint {
        let guess = Word::new(guess).unwrap();
        let solution = Word::new(solution).unwrap();
        Constraint::from(&Feedback::evaluate(&guess, &solution))
    }

    fn sample_index() -> ConstraintIndex {
        ConstraintIndex::new(words(&[
            "CRANE", "CRATE", "TRACE", "SLATE", "ERASE", "SPEED", "BRINE", "EERIE", "CRANE",
        ]))
    }

    #[test]
    fn index_sorts_and_dedups() {
        let index = sample_index();
        assert_eq!(index.len(), 8);
        assert!(index.words().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(index.position_of(&Word::new("BRINE").unwrap()), Some(0));
    }

    #[test]
    fn empty_constraint_returns_everything() {
        let index = sample_index();
        assert_eq!(index.filter(&Constraint::new()), *index.all());
    }

    #[test]
    fn zero_exact_count_means_absent() {
        let index = sample_index();
        let constraint = constraint_for("TTTTT", "CRANE");
        assert_eq!(constraint.exact_letter_counts().get(b'T'), Some(0));

        let set = index.filter(&constraint);
        assert_eq!(
            texts(&index, &set),
            ["BRINE", "CRANE", "EERIE", "ERASE", "SPEED"]
        );
    }

    #[test]
    fn minimum_count_requires_duplicates() {
        let index = sample_index();
        let constraint = constraint_for("SPEED", "ERASE");
        let set = index.filter(&constraint);
        // At least two E's, at least one S, no P or D, not at the guessed positions
        assert_eq!(texts(&index, &set), ["ERASE"]);
    }

    #[test]
    fn positives_and_negatives() {
        let index = sample_index();
        let mut constraint = Constraint::new();
        constraint.merge(&Feedback::evaluate(
            &Word::new("TRACE").unwrap(),
            &Word::new("CRANE").unwrap(),
        ));
        let set = index.filter(&constraint);
        assert_eq!(texts(&index, &set), ["CRANE"]);
    }

    #[test]
    fn count_matches_filter() {
        let index = sample_index();
        let constraint = constraint_for("CRATE", "TRACE");
        let mut scratch = WordSet::empty(index.len());
        assert_eq!(index.count(&constraint, &mut scratch), index.filter(&constraint).len());
    }

    #[test]
    fn filter_agrees_with_direct_check() {
        let index = sample_index();
        for guess in index.words() {
            for solution in index.words() {
                let constraint = Constraint::from(&Feedback::evaluate(guess, solution));
                let set = index.filter(&constraint);
                for (i, word) in index.words().iter().enumerate() {
                    assert_eq!(
                        set.contains(i),
                        constraint.admits(word),
                        "{guess} / {solution} / {word}"
                    );
                }
                assert!(set.contains(index.position_of(solution).unwrap()));
            }
        }
    }

    #[test]
    fn narrow_rebuilds_over_remaining_words() {
        let index = sample_index();
        let constraint = Constraint::from(&Feedback::evaluate(
            &Word::new("SLATE").unwrap(),
            &Word::new("CRATE").unwrap(),
        ));
        let narrowed = index.narrow(&constraint);
        assert_eq!(
            narrowed.words().iter().map(Word::as_str).collect::<Vec<_>>(),
            ["CRATE"]
        );
        assert_eq!(narrowed.filter(&Constraint::new()).len(), 1);
    }

    #[test]
    fn mask_of_ignores_unknown_words() {
        let index = sample_index();
        let mask = index.mask_of(&words(&["CRANE", "ZZZZZ"]));
        assert_eq!(texts(&index, &mask), ["CRANE"]);
    }

    #[test]
    fn empty_index() {
        let index = ConstraintIndex::new(Vec::new());
        assert!(index.is_empty());
        assert!(index.filter(&Constraint::new()).is_empty());
    }
}
