//! Corpus plus the index built over it once
//!
//! Build one `Vocabulary` at startup and lend it to every game. There is no global default.

use crate::core::{ConstraintIndex, Corpus, WordSet};

/// A corpus and its guessable-word index
#[derive(Debug)]
pub struct Vocabulary {
    corpus: Corpus,
    index: ConstraintIndex,
    solution_mask: WordSet,
}

impl Vocabulary {
    /// Index every guessable word of `corpus`
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        let index = ConstraintIndex::new(corpus.guessable().to_vec());
        let solution_mask = index.mask_of(corpus.solutions());
        Self {
            corpus,
            index,
            solution_mask,
        }
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Index over [`Corpus::guessable`]
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &ConstraintIndex {
        &self.index
    }

    /// Solutions as a set in the index's positions
    #[inline]
    #[must_use]
    pub const fn solution_mask(&self) -> &WordSet {
        &self.solution_mask
    }
}
