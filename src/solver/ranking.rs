//! Output of a ranking pass

use crate::core::Word;
use std::collections::BTreeMap;

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    /// Average number of candidate solutions left after guessing `word`
    pub score: f64,
    /// Whether `word` is in the corpus solutions
    pub is_solution: bool,
}

/// Scores for every guess examined, split by whether the guess can be the solution
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankingResult {
    /// The search stopped because it ran out of time
    pub timed_out: bool,
    pub solution_ranks: BTreeMap<Word, f64>,
    pub non_solution_ranks: BTreeMap<Word, f64>,
    /// Set when only one candidate solution remains; no scores are computed then
    pub known_solution: Option<Word>,
}

impl RankingResult {
    /// Result for a game whose solution is already determined
    #[must_use]
    pub fn known(solution: Word) -> Self {
        Self {
            known_solution: Some(solution),
            ..Self::default()
        }
    }

    pub fn record(&mut self, word: Word, score: f64, is_solution: bool) {
        if is_solution {
            self.solution_ranks.insert(word, score);
        } else {
            self.non_solution_ranks.insert(word, score);
        }
    }

    /// Number of scored guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.solution_ranks.len() + self.non_solution_ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solution_ranks.is_empty() && self.non_solution_ranks.is_empty()
    }

    /// Every scored guess, best first; ties are broken alphabetically
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedGuess> {
        let mut ranked = Self::bucket(&self.solution_ranks, true);
        ranked.extend(Self::bucket(&self.non_solution_ranks, false));
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.word.cmp(&b.word)));
        ranked
    }

    /// Lowest-scoring guess across both buckets
    #[must_use]
    pub fn best(&self) -> Option<RankedGuess> {
        Self::bucket(&self.solution_ranks, true)
            .into_iter()
            .chain(Self::bucket(&self.non_solution_ranks, false))
            .min_by(|a, b| a.score.total_cmp(&b.score).then(a.word.cmp(&b.word)))
    }

    /// Scores of one bucket, best first
    #[must_use]
    pub fn ranked_bucket(&self, solutions: bool) -> Vec<RankedGuess> {
        let ranks = if solutions {
            &self.solution_ranks
        } else {
            &self.non_solution_ranks
        };
        let mut ranked = Self::bucket(ranks, solutions);
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.word.cmp(&b.word)));
        ranked
    }

    fn bucket(ranks: &BTreeMap<Word, f64>, is_solution: bool) -> Vec<RankedGuess> {
        ranks
            .iter()
            .map(|(&word, &score)| RankedGuess {
                word,
                score,
                is_solution,
            })
            .collect()
    }
}
