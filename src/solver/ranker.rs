//! Average-remaining guess ranking
//!
//! A guess scores the mean, over every candidate solution `s`, of how many candidate solutions
//! would survive the feedback that guess gets against `s`. Lower is better.
//!
//! Guesses are scored in sorted batches. Each batch runs on the rayon pool; its results are then
//! walked in order and the timeout and early-exit checks applied after each one, so the output
//! does not depend on thread scheduling unless the timeout fires. A stop discards the rest of
//! the batch, which bounds the overrun to one batch.

use super::opening::OpeningBook;
use super::ranking::RankingResult;
use crate::core::{Constraint, ConstraintIndex, Corpus, Feedback, Word, WordSet};
use crate::game::Game;
use log::debug;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Search limits for a ranking pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    /// Stop once this much wall-clock time has passed
    pub timeout: Option<Duration>,
    /// No early exit before this much time has passed
    pub warm_up: Duration,
    /// A score at or below this ends the search (after the warm-up)
    pub early_exit_score: f64,
    /// Guesses scored per parallel batch
    pub batch_size: usize,
    pub parallel: bool,
}

impl RankerConfig {
    pub const DEFAULT_WARM_UP: Duration = Duration::from_millis(100);

    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: None,
            warm_up: Self::DEFAULT_WARM_UP,
            early_exit_score: 1.0,
            batch_size: 256,
            parallel: true,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_warm_up(mut self, warm_up: Duration) -> Self {
        self.warm_up = warm_up;
        self
    }

    /// Score every guess: no timeout and no early exit
    #[must_use]
    pub const fn exhaustive(mut self) -> Self {
        self.timeout = None;
        self.early_exit_score = f64::NEG_INFINITY;
        self
    }

    #[must_use]
    pub const fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranks guesses for a game
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessRanker<'b> {
    config: RankerConfig,
    opening: Option<&'b OpeningBook>,
}

impl<'b> GuessRanker<'b> {
    #[must_use]
    pub const fn new(config: RankerConfig) -> Self {
        Self {
            config,
            opening: None,
        }
    }

    /// Answer the first move from a precomputed table when it fits the game's corpus
    #[must_use]
    pub const fn with_opening_book(mut self, book: &'b OpeningBook) -> Self {
        self.opening = Some(book);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Score every guessable word against the game's candidate solutions
    #[must_use]
    pub fn rank(&self, game: &Game<'_>) -> RankingResult {
        let candidates = game.candidate_solutions();
        self.rank_candidates(game, &candidates)
    }

    fn rank_candidates(&self, game: &Game<'_>, candidates: &[Word]) -> RankingResult {
        if let [solution] = candidates {
            return RankingResult::known(*solution);
        }

        let corpus = game.vocabulary().corpus();
        if game.guesses().is_empty()
            && let Some(ranking) = self.opening.and_then(|book| book.ranking_for(corpus))
        {
            debug!("using opening book for the first guess");
            return ranking;
        }

        rank_words(corpus, corpus.guessable(), candidates, &self.config)
    }

    /// The guess to play next
    ///
    /// The lowest-scoring guess wins, unless it would remove at most one candidate solution on
    /// average. Then a remaining candidate is played instead, since only a candidate can win
    /// outright.
    ///
    /// Returns `None` only when no candidate solutions remain.
    #[must_use]
    pub fn best_guess(&self, game: &Game<'_>) -> Option<Word> {
        let candidates = game.candidate_solutions();
        let ranking = self.rank_candidates(game, &candidates);
        choose_guess(&ranking, &candidates)
    }
}

/// Pick the guess to play from a ranking over `candidates` (sorted)
#[must_use]
pub fn choose_guess(ranking: &RankingResult, candidates: &[Word]) -> Option<Word> {
    if let Some(solution) = ranking.known_solution {
        return Some(solution);
    }

    let Some(best) = ranking.best() else {
        return candidates.first().copied();
    };

    let removed = candidates.len() as f64 - best.score;
    if removed <= 1.0 {
        if candidates.binary_search(&best.word).is_ok() {
            return Some(best.word);
        }
        return candidates.first().copied().or(Some(best.word));
    }

    Some(best.word)
}

/// Score `guesses` (in the given order) against `candidates`
///
/// Buckets come from `corpus`. An empty candidate list yields an empty result.
#[must_use]
pub fn rank_words(
    corpus: &Corpus,
    guesses: &[Word],
    candidates: &[Word],
    config: &RankerConfig,
) -> RankingResult {
    let started = Instant::now();
    let mut result = RankingResult::default();
    if candidates.is_empty() {
        return result;
    }

    let index = ConstraintIndex::new(candidates.to_vec());

    for batch in guesses.chunks(config.batch_size.max(1)) {
        let scores: Vec<f64> = if config.parallel {
            batch
                .par_iter()
                .map_init(
                    || WordSet::empty(index.len()),
                    |scratch, guess| average_remaining(guess, &index, scratch),
                )
                .collect()
        } else {
            let mut scratch = WordSet::empty(index.len());
            batch
                .iter()
                .map(|guess| average_remaining(guess, &index, &mut scratch))
                .collect()
        };

        for (guess, score) in batch.iter().zip(scores) {
            result.record(*guess, score, corpus.is_solution(guess));

            let elapsed = started.elapsed();
            if config.timeout.is_some_and(|timeout| elapsed > timeout) {
                debug!("ranking timed out after {} guesses", result.len());
                result.timed_out = true;
                return result;
            }
            if score <= config.early_exit_score && elapsed >= config.warm_up {
                debug!("ranking stopped early at {guess} ({score:.3})");
                return result;
            }
        }
    }

    debug!(
        "ranked {} guesses against {} candidates in {:.2?}",
        result.len(),
        index.len(),
        started.elapsed()
    );
    result
}

/// Mean number of words in `index` left after guessing `guess`, averaged over every word of
/// `index` as the solution
///
/// `index` must not be empty.
#[must_use]
pub fn average_remaining(guess: &Word, index: &ConstraintIndex, scratch: &mut WordSet) -> f64 {
    let total: usize = index
        .words()
        .iter()
        .map(|solution| {
            let constraint = Constraint::from(&Feedback::evaluate(guess, solution));
            index.count(&constraint, scratch)
        })
        .sum();
    total as f64 / index.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Vocabulary};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| word(w)).collect()
    }

    fn vocabulary(solutions: &[&str], non_solutions: &[&str]) -> Vocabulary {
        Vocabulary::new(
            Corpus::from_strs(solutions.iter().copied(), non_solutions.iter().copied()).unwrap(),
        )
    }

    #[test]
    fn average_remaining_for_family_of_words() {
        // BATCH only separates itself from the other four -ATCH words
        let index = ConstraintIndex::new(words(&["BATCH", "HATCH", "LATCH", "MATCH", "PATCH"]));
        let mut scratch = WordSet::empty(index.len());
        let score = average_remaining(&word("BATCH"), &index, &mut scratch);
        assert!((score - 17.0 / 5.0).abs() < 1e-9);

        // PLUMB separates all five
        let score = average_remaining(&word("PLUMB"), &index, &mut scratch);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_candidate_is_known() {
        let vocabulary = vocabulary(&["CRANE", "CRATE"], &[]);
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        game.make_guess("CRATE").unwrap();

        let ranking = GuessRanker::default().rank(&game);
        assert_eq!(ranking.known_solution, Some(word("CRANE")));
        assert!(ranking.is_empty());
        assert_eq!(GuessRanker::default().best_guess(&game), Some(word("CRANE")));
    }

    #[test]
    fn ranks_every_guessable_word() {
        let vocabulary = vocabulary(
            &["BATCH", "HATCH", "LATCH", "MATCH", "PATCH"],
            &["PLUMB", "AAHED"],
        );
        let game = Game::new(&vocabulary, GameConfig::default(), Some("MATCH")).unwrap();
        let ranking = GuessRanker::new(RankerConfig::default().exhaustive()).rank(&game);

        assert!(!ranking.timed_out);
        assert_eq!(ranking.solution_ranks.len(), 5);
        assert_eq!(ranking.non_solution_ranks.len(), 2);
        assert!((ranking.solution_ranks[&word("BATCH")] - 3.4).abs() < 1e-9);
        assert!((ranking.non_solution_ranks[&word("PLUMB")] - 1.0).abs() < 1e-9);
        // Every -ATCH word gives AAHED the same feedback
        assert!((ranking.non_solution_ranks[&word("AAHED")] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn informative_non_solution_is_preferred() {
        let vocabulary = vocabulary(&["BATCH", "HATCH", "LATCH", "MATCH", "PATCH"], &["PLUMB"]);
        let game = Game::new(&vocabulary, GameConfig::default(), Some("MATCH")).unwrap();
        assert_eq!(GuessRanker::default().best_guess(&game), Some(word("PLUMB")));
    }

    #[test]
    fn two_candidates_prefer_a_solution_word() {
        // ANTIC splits CRANE from CRATE as well as either solution does, and sorts first
        let vocabulary = vocabulary(&["CRANE", "CRATE"], &["ANTIC"]);
        let game = Game::new(&vocabulary, GameConfig::default(), Some("CRATE")).unwrap();

        let ranking = GuessRanker::new(RankerConfig::default().exhaustive()).rank(&game);
        assert_eq!(ranking.best().unwrap().word, word("ANTIC"));

        let best = GuessRanker::default().best_guess(&game).unwrap();
        assert!(best == word("CRANE") || best == word("CRATE"));
    }

    #[test]
    fn choose_guess_falls_back_to_candidate() {
        let candidates = words(&["CRANE", "CRATE"]);
        let mut ranking = RankingResult::default();
        ranking.record(word("ANTIC"), 1.0, false);
        assert_eq!(choose_guess(&ranking, &candidates), Some(word("CRANE")));

        // A candidate that is itself the best is kept
        ranking.record(word("CRATE"), 0.5, true);
        assert_eq!(choose_guess(&ranking, &candidates), Some(word("CRATE")));
    }

    #[test]
    fn zero_timeout_times_out_after_first_guess() {
        let vocabulary = vocabulary(
            &["BATCH", "HATCH", "LATCH", "MATCH", "PATCH"],
            &["PLUMB", "AAHED"],
        );
        let game = Game::new(&vocabulary, GameConfig::default(), Some("MATCH")).unwrap();
        let ranking = game.rank_guesses(Some(Duration::ZERO));

        assert!(ranking.timed_out);
        assert_eq!(ranking.len(), 1);
        assert!(ranking.non_solution_ranks.contains_key(&word("AAHED")));
    }

    #[test]
    fn early_exit_after_warm_up() {
        let vocabulary = vocabulary(
            &["BATCH", "HATCH", "LATCH", "MATCH", "PATCH"],
            &["PLUMB", "AAHED"],
        );
        let game = Game::new(&vocabulary, GameConfig::default(), Some("MATCH")).unwrap();
        let config = RankerConfig::default()
            .with_warm_up(Duration::ZERO)
            .sequential();
        let ranking = GuessRanker::new(config).rank(&game);

        // Sorted order: AAHED, BATCH, HATCH, LATCH, MATCH, PATCH, PLUMB; only PLUMB reaches 1.0
        assert!(!ranking.timed_out);
        assert_eq!(ranking.len(), 7);

        // No warm-up and a perfect split among two words stops at the first one
        let vocabulary = self::vocabulary(&["CRANE", "CRATE"], &["ANTIC"]);
        let game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        let ranking = GuessRanker::new(config).rank(&game);
        assert_eq!(ranking.len(), 1);
        assert!(ranking.non_solution_ranks.contains_key(&word("ANTIC")));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let vocabulary = vocabulary(
            &["BATCH", "HATCH", "LATCH", "MATCH", "PATCH", "CRANE", "CRATE", "TRACE"],
            &["PLUMB", "AAHED", "ANTIC"],
        );
        let game = Game::new(&vocabulary, GameConfig::default(), Some("TRACE")).unwrap();
        let exhaustive = RankerConfig {
            batch_size: 3,
            ..RankerConfig::default().exhaustive()
        };

        let parallel = GuessRanker::new(exhaustive).rank(&game);
        let sequential = GuessRanker::new(exhaustive.sequential()).rank(&game);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn empty_candidates_rank_nothing() {
        let corpus = Corpus::from_strs(["CRANE"], []).unwrap();
        let ranking = rank_words(&corpus, corpus.guessable(), &[], &RankerConfig::default());
        assert!(ranking.is_empty());
        assert_eq!(choose_guess(&ranking, &[]), None);
    }
}
