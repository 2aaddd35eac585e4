//! The vocabulary: solution-eligible words and guess-only words

use super::word::Word;
use crate::error::{EngineError, InvalidGuessKind};
use rustc_hash::{FxHashSet, FxHasher};
use std::hash::{Hash, Hasher};

/// Two disjoint word sets, immutable once built
#[derive(Debug, Clone)]
pub struct Corpus {
    solutions: Vec<Word>,
    non_solutions: Vec<Word>,
    guessable: Vec<Word>,
    solution_set: FxHashSet<Word>,
    guessable_set: FxHashSet<Word>,
}

impl Corpus {
    /// Build a corpus from already-parsed words
    ///
    /// Duplicates within a list are tolerated; a word in both lists is not.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidCorpus` if any word is in both lists.
    pub fn new(
        solutions: impl IntoIterator<Item = Word>,
        non_solutions: impl IntoIterator<Item = Word>,
    ) -> Result<Self, EngineError> {
        let mut solutions: Vec<Word> = solutions.into_iter().collect();
        solutions.sort_unstable();
        solutions.dedup();

        let mut non_solutions: Vec<Word> = non_solutions.into_iter().collect();
        non_solutions.sort_unstable();
        non_solutions.dedup();

        let solution_set: FxHashSet<Word> = solutions.iter().copied().collect();
        let overlap: Vec<&str> = non_solutions
            .iter()
            .filter(|w| solution_set.contains(w))
            .map(Word::as_str)
            .collect();
        if !overlap.is_empty() {
            return Err(EngineError::InvalidCorpus(format!(
                "words cannot be both solutions and non-solutions: {}",
                overlap.join(", ")
            )));
        }

        let mut guessable: Vec<Word> = solutions.iter().chain(&non_solutions).copied().collect();
        guessable.sort_unstable();
        let guessable_set = guessable.iter().copied().collect();

        Ok(Self {
            solutions,
            non_solutions,
            guessable,
            solution_set,
            guessable_set,
        })
    }

    /// Build a corpus from raw strings, trimming and uppercasing each one
    ///
    /// # Errors
    /// Returns `EngineError::InvalidCorpus` if a string is not a 5-letter word or the lists
    /// overlap.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Corpus;
    ///
    /// let corpus = Corpus::from_strs(["crane", "slate"], ["aahed"]).unwrap();
    /// assert_eq!(corpus.guessable().len(), 3);
    ///
    /// assert!(Corpus::from_strs(["crane"], ["crane"]).is_err());
    /// assert!(Corpus::from_strs(["cranes"], []).is_err());
    /// ```
    pub fn from_strs<'a>(
        solutions: impl IntoIterator<Item = &'a str>,
        non_solutions: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, EngineError> {
        Self::new(parse_all(solutions)?, parse_all(non_solutions)?)
    }

    /// Solution-eligible words, sorted
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Guess-only words, sorted
    #[inline]
    #[must_use]
    pub fn non_solutions(&self) -> &[Word] {
        &self.non_solutions
    }

    /// Every word that may be guessed, sorted
    #[inline]
    #[must_use]
    pub fn guessable(&self) -> &[Word] {
        &self.guessable
    }

    #[inline]
    #[must_use]
    pub fn is_solution(&self, word: &Word) -> bool {
        self.solution_set.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn is_guessable(&self, word: &Word) -> bool {
        self.guessable_set.contains(word)
    }

    /// Stable digest of the sorted solution and guessable lists
    ///
    /// Two corpora with the same words have the same fingerprint, whatever order they were built
    /// from.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.solutions.hash(&mut hasher);
        self.guessable.hash(&mut hasher);
        hasher.finish()
    }

    /// Normalize and validate raw guess input
    ///
    /// Whitespace is trimmed and case is ignored. With `enforce_validity` the word must also be
    /// in the guessable list.
    ///
    /// # Errors
    /// - `InvalidGuess(WrongLength)` if the trimmed input is not 5 characters
    /// - `InvalidGuess(InvalidCharacters)` if it has characters outside `A`-`Z`
    /// - `InvalidGuess(NotInVocabulary)` if enforcement is on and the word is unknown
    pub fn parse_guess(&self, raw: &str, enforce_validity: bool) -> Result<Word, EngineError> {
        let word = Word::new(raw.trim()).map_err(InvalidGuessKind::from)?;
        if enforce_validity && !self.is_guessable(&word) {
            return Err(InvalidGuessKind::NotInVocabulary(word.as_str().to_string()).into());
        }
        Ok(word)
    }
}

fn parse_all<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Vec<Word>, EngineError> {
    words
        .into_iter()
        .map(|raw| {
            let raw = raw.trim();
            Word::new(raw)
                .map_err(|e| EngineError::InvalidCorpus(format!("{raw:?} is invalid: {e}")))
        })
        .collect()
}
