//! A single game: hidden solution, guess history and candidate tracking

use super::banks::{LetterBank, WordBank};
use super::vocabulary::Vocabulary;
use crate::core::{Constraint, Feedback, Word, WordSet};
use crate::error::EngineError;
use crate::solver::{GuessRanker, RankerConfig, RankingResult};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Reject guesses that are not in the guessable list
    pub enforce_guess_validity: bool,
    /// Guesses allowed before the game is lost
    pub max_guesses: usize,
}

impl GameConfig {
    pub const DEFAULT_MAX_GUESSES: usize = 6;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            enforce_guess_validity: true,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }

    #[must_use]
    pub const fn with_guess_validity(mut self, enforce: bool) -> Self {
        self.enforce_guess_validity = enforce;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A game in progress against a fixed hidden solution
///
/// Borrows the shared [`Vocabulary`]; everything else is owned.
#[derive(Debug, Clone)]
pub struct Game<'v> {
    vocabulary: &'v Vocabulary,
    config: GameConfig,
    solution: Word,
    guesses: Vec<Feedback>,
    constraint: Constraint,
    /// Positions in `vocabulary.index()`
    candidates: WordSet,
    status: GameStatus,
}

impl<'v> Game<'v> {
    /// Start a game, drawing a random solution if none is given
    ///
    /// # Errors
    /// - `NoSolutionConfigured` if `solution` is not one of the corpus solutions
    /// - `InvalidCorpus` if no solution is given and the corpus has none to draw from
    pub fn new(
        vocabulary: &'v Vocabulary,
        config: GameConfig,
        solution: Option<&str>,
    ) -> Result<Self, EngineError> {
        Self::with_rng(vocabulary, config, solution, &mut rand::rng())
    }

    /// Start a game, drawing any random solution from `rng`
    ///
    /// # Errors
    /// Same as [`Game::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Corpus;
    /// use wordle_engine::game::{Game, GameConfig, Vocabulary};
    ///
    /// let corpus = Corpus::from_strs(["crane", "slate"], ["aahed"]).unwrap();
    /// let vocabulary = Vocabulary::new(corpus);
    /// let mut game = Game::new(&vocabulary, GameConfig::default(), Some("crane")).unwrap();
    ///
    /// game.make_guess("slate").unwrap();
    /// assert_eq!(game.candidate_solutions().len(), 1);
    /// game.make_guess("crane").unwrap();
    /// assert!(game.won());
    /// ```
    pub fn with_rng<R: Rng + ?Sized>(
        vocabulary: &'v Vocabulary,
        config: GameConfig,
        solution: Option<&str>,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let corpus = vocabulary.corpus();
        let solution = match solution {
            Some(raw) => parse_solution(vocabulary, raw)?,
            None => *corpus.solutions().choose(rng).ok_or_else(|| {
                EngineError::InvalidCorpus("no solutions to choose from".to_string())
            })?,
        };

        Ok(Self {
            vocabulary,
            config,
            solution,
            guesses: Vec::new(),
            constraint: Constraint::new(),
            candidates: vocabulary.index().all().clone(),
            status: GameStatus::InProgress,
        })
    }

    /// Copy of this game with a different solution
    ///
    /// History, constraint and candidates are copied as-is; only the solution and the status
    /// derived from it change. Used for what-if analysis.
    ///
    /// # Errors
    /// Returns `NoSolutionConfigured` if `solution` is not one of the corpus solutions.
    pub fn with_solution(&self, solution: &str) -> Result<Self, EngineError> {
        let solution = parse_solution(self.vocabulary, solution)?;
        let mut game = self.clone();
        game.solution = solution;
        game.status = game.derive_status();
        Ok(game)
    }

    /// Submit a guess
    ///
    /// Input is trimmed and case-insensitive.
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `InvalidGuess` if the word is malformed or (with enforcement) unknown
    pub fn make_guess(&mut self, raw: &str) -> Result<Feedback, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameAlreadyOver);
        }

        let feedback = self.evaluate_against(raw, &self.solution)?;
        self.guesses.push(feedback);
        self.constraint.merge(&feedback);

        let consistent = self.vocabulary.index().filter(&self.constraint);
        self.candidates.intersect_with(&consistent);
        self.status = self.derive_status();

        debug!(
            "guess {} ({}): {} candidates, {} solutions",
            self.guesses.len(),
            feedback.word(),
            self.candidates.len(),
            self.candidate_solution_count()
        );

        Ok(feedback)
    }

    /// Feedback `raw` would get against `solution`, without touching the game
    ///
    /// # Errors
    /// Returns `InvalidGuess` under the same rules as [`Game::make_guess`].
    pub fn evaluate_against(&self, raw: &str, solution: &Word) -> Result<Feedback, EngineError> {
        let guess = self
            .vocabulary
            .corpus()
            .parse_guess(raw, self.config.enforce_guess_validity)?;
        Ok(Feedback::evaluate(&guess, solution))
    }

    fn derive_status(&self) -> GameStatus {
        if self.guesses.iter().any(|g| *g.word() == self.solution) {
            GameStatus::Won
        } else if self.guesses.len() >= self.config.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Feedback] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[inline]
    #[must_use]
    pub fn lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    /// Number of guesses made
    #[inline]
    #[must_use]
    pub fn score(&self) -> usize {
        self.guesses.len()
    }

    /// The hidden solution
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Everything learned from the guesses so far
    #[inline]
    #[must_use]
    pub const fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    #[must_use]
    pub fn letter_bank(&self) -> LetterBank {
        LetterBank::new(&self.guesses, &self.constraint)
    }

    /// Every word still consistent with the feedback, sorted
    pub fn candidates(&self) -> impl Iterator<Item = &'v Word> + '_ {
        let index = self.vocabulary.index();
        self.candidates.iter().map(move |i| &index.words()[i])
    }

    /// Candidates that can still be the solution, sorted
    #[must_use]
    pub fn candidate_solutions(&self) -> Vec<Word> {
        let mut set = self.candidates.clone();
        set.intersect_with(self.vocabulary.solution_mask());
        self.vocabulary.index().words_in(&set).copied().collect()
    }

    /// Candidates that are valid guesses but never the solution, sorted
    #[must_use]
    pub fn candidate_non_solutions(&self) -> Vec<Word> {
        let mut set = self.candidates.clone();
        set.subtract(self.vocabulary.solution_mask());
        self.vocabulary.index().words_in(&set).copied().collect()
    }

    #[must_use]
    pub fn candidate_solution_count(&self) -> usize {
        let mut set = self.candidates.clone();
        set.intersect_with(self.vocabulary.solution_mask());
        set.len()
    }

    #[must_use]
    pub fn word_bank(&self) -> WordBank {
        WordBank {
            solutions: self.candidate_solutions(),
            non_solutions: self.candidate_non_solutions(),
        }
    }

    /// Rank every guessable word by average remaining solutions
    #[must_use]
    pub fn rank_guesses(&self, timeout: Option<Duration>) -> RankingResult {
        GuessRanker::new(RankerConfig::default().with_timeout(timeout)).rank(self)
    }

    /// The guess the default ranker would pick, or `None` if no candidate solutions remain
    #[must_use]
    pub fn best_guess(&self) -> Option<Word> {
        GuessRanker::default().best_guess(self)
    }
}

fn parse_solution(vocabulary: &Vocabulary, raw: &str) -> Result<Word, EngineError> {
    let raw = raw.trim();
    Word::new(raw)
        .ok()
        .filter(|w| vocabulary.corpus().is_solution(w))
        .ok_or_else(|| EngineError::NoSolutionConfigured(raw.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Corpus;
    use crate::error::InvalidGuessKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        let corpus = Corpus::from_strs(
            [
                "CRANE", "CRATE", "TRACE", "GRATE", "IRATE", "SLATE", "ERASE", "BRINE", "ABBEY",
            ],
            ["AAHED", "SPEED", "EERIE", "TTTTT"],
        )
        .unwrap();
        Vocabulary::new(corpus)
    }

    fn text(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::as_str).collect()
    }

    #[test]
    fn new_game_starts_with_everything() {
        let vocabulary = vocabulary();
        let game = Game::new(&vocabulary, GameConfig::default(), Some("crane")).unwrap();

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.score(), 0);
        assert_eq!(game.candidates().count(), 13);
        assert_eq!(game.candidate_solutions().len(), 9);
        assert_eq!(game.candidate_non_solutions().len(), 4);
        assert_eq!(game.solution().as_str(), "CRANE");
    }

    #[test]
    fn unknown_solution_is_rejected() {
        let vocabulary = vocabulary();
        for raw in ["SPEED", "ZZZZZ", "nope"] {
            assert!(matches!(
                Game::new(&vocabulary, GameConfig::default(), Some(raw)),
                Err(EngineError::NoSolutionConfigured(_))
            ));
        }
    }

    #[test]
    fn random_solution_comes_from_solutions() {
        let vocabulary = vocabulary();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let game = Game::with_rng(&vocabulary, GameConfig::default(), None, &mut rng).unwrap();
            assert!(vocabulary.corpus().is_solution(game.solution()));
        }
    }

    #[test]
    fn empty_solution_list_cannot_start_random_game() {
        let vocabulary = Vocabulary::new(Corpus::from_strs([], ["AAHED"]).unwrap());
        assert!(matches!(
            Game::new(&vocabulary, GameConfig::default(), None),
            Err(EngineError::InvalidCorpus(_))
        ));
    }

    #[test]
    fn trace_narrows_crane_candidates() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        game.make_guess("trace").unwrap();

        for word in game.candidates() {
            assert_eq!(word.letter_at(1), b'R');
            assert_eq!(word.letter_at(2), b'A');
            assert_eq!(word.letter_at(4), b'E');
        }
        assert_eq!(text(&game.candidate_solutions()), ["CRANE"]);
    }

    #[test]
    fn guesses_are_normalized() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        let feedback = game.make_guess("  sLaTe \n").unwrap();
        assert_eq!(feedback.word().as_str(), "SLATE");
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();

        assert_eq!(
            game.make_guess("cranes"),
            Err(EngineError::InvalidGuess(InvalidGuessKind::WrongLength(6)))
        );
        assert_eq!(
            game.make_guess("zzzzz"),
            Err(EngineError::InvalidGuess(InvalidGuessKind::NotInVocabulary(
                "ZZZZZ".into()
            )))
        );
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn unenforced_game_accepts_unknown_words() {
        let vocabulary = vocabulary();
        let config = GameConfig::default().with_guess_validity(false);
        let mut game = Game::new(&vocabulary, config, Some("CRANE")).unwrap();

        let feedback = game.make_guess("zzzzz").unwrap();
        assert_eq!(feedback.exact_letter_counts().get(b'Z'), Some(0));
        assert_eq!(game.candidates().count(), 13);
    }

    #[test]
    fn winning_ends_the_game() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        game.make_guess("SLATE").unwrap();
        let feedback = game.make_guess("CRANE").unwrap();

        assert!(feedback.is_solved());
        assert!(game.won());
        assert!(!game.lost());
        assert_eq!(game.score(), 2);
        assert_eq!(game.make_guess("TRACE"), Err(EngineError::GameAlreadyOver));
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        for guess in ["SLATE", "GRATE", "IRATE", "ERASE", "ABBEY"] {
            game.make_guess(guess).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.make_guess("BRINE").unwrap();

        assert!(game.lost());
        assert!(!game.won());
        assert_eq!(game.make_guess("CRANE"), Err(EngineError::GameAlreadyOver));
    }

    #[test]
    fn winning_on_the_last_guess_is_a_win() {
        let vocabulary = vocabulary();
        let config = GameConfig::default().with_max_guesses(2);
        let mut game = Game::new(&vocabulary, config, Some("CRANE")).unwrap();
        game.make_guess("SLATE").unwrap();
        game.make_guess("CRANE").unwrap();
        assert!(game.won());
    }

    #[test]
    fn candidates_shrink_and_keep_the_solution() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("ERASE")).unwrap();
        let mut previous = game.candidate_solutions().len();
        for guess in ["SPEED", "EERIE", "SLATE", "TRACE"] {
            game.make_guess(guess).unwrap();
            let solutions = game.candidate_solutions();
            assert!(solutions.len() <= previous);
            assert!(solutions.contains(game.solution()));
            previous = solutions.len();
        }
    }

    #[test]
    fn with_solution_keeps_history() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        game.make_guess("SLATE").unwrap();

        let what_if = game.with_solution("crate").unwrap();
        assert_eq!(what_if.solution().as_str(), "CRATE");
        assert_eq!(what_if.guesses(), game.guesses());
        assert_eq!(what_if.constraint(), game.constraint());

        // SLATE against CRATE differs from SLATE against CRANE
        let mut what_if = what_if;
        let feedback = what_if.make_guess("SLATE").unwrap();
        assert!(feedback.positives().contains(b'T', 3));

        assert!(matches!(
            game.with_solution("AAHED"),
            Err(EngineError::NoSolutionConfigured(_))
        ));
    }

    #[test]
    fn with_solution_rederives_status() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        game.make_guess("SLATE").unwrap();

        assert!(game.with_solution("SLATE").unwrap().won());
        assert!(!game.with_solution("CRATE").unwrap().won());
    }

    #[test]
    fn evaluate_against_is_side_effect_free() {
        let vocabulary = vocabulary();
        let game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();
        let erase = Word::new("ERASE").unwrap();
        let feedback = game.evaluate_against("speed", &erase).unwrap();

        assert_eq!(feedback.minimum_letter_counts().get(b'E'), Some(2));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn word_bank_splits_candidates() {
        let vocabulary = vocabulary();
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("ERASE")).unwrap();
        game.make_guess("CRANE").unwrap();

        let bank = game.word_bank();
        assert_eq!(bank.len(), game.candidates().count());
        assert!(bank.solutions.contains(&Word::new("ERASE").unwrap()));
    }
}
