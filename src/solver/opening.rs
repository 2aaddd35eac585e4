//! Precomputed first-guess rankings
//!
//! Ranking the opening move is the expensive case: every guessable word against every solution.
//! Its result only depends on the corpus, so it can be computed once and stored. The header
//! records the corpus sizes and [`Corpus::fingerprint`], and a book is only used for a corpus
//! that matches all three.
//!
//! File format:
//!
//! ```text
//! # solutions=1043 guessable=1642 fingerprint=3f9a0c2e71b4d856
//! SLATE 23.451
//! CRANE 24.002
//! ...
//! ```

use super::ranker::{RankerConfig, rank_words};
use super::ranking::RankingResult;
use crate::core::{Corpus, Word};
use log::warn;
use std::fmt::Write as _;
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpeningBookError {
    #[error("failed to read opening book: {0}")]
    Io(#[from] io::Error),
    #[error("opening book is missing its `# solutions=N guessable=M fingerprint=H` header")]
    MissingHeader,
    #[error("opening book line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// First-guess scores for one corpus
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningBook {
    solution_count: usize,
    guessable_count: usize,
    fingerprint: u64,
    /// Best first
    scores: Vec<(Word, f64)>,
}

impl OpeningBook {
    /// Score every guessable word of `corpus` as an opening move
    #[must_use]
    pub fn compute(corpus: &Corpus, config: &RankerConfig) -> Self {
        let config = config.exhaustive();
        let ranking = rank_words(corpus, corpus.guessable(), corpus.solutions(), &config);
        Self::from_ranking(corpus, &ranking)
    }

    /// Capture an opening ranking that was computed for `corpus`
    #[must_use]
    pub fn from_ranking(corpus: &Corpus, ranking: &RankingResult) -> Self {
        Self {
            solution_count: corpus.solutions().len(),
            guessable_count: corpus.guessable().len(),
            fingerprint: corpus.fingerprint(),
            scores: ranking
                .ranked()
                .into_iter()
                .map(|r| (r.word, r.score))
                .collect(),
        }
    }

    /// Scores, best first
    #[must_use]
    pub fn scores(&self) -> &[(Word, f64)] {
        &self.scores
    }

    /// Whether this book was computed for `corpus`
    #[must_use]
    pub fn matches(&self, corpus: &Corpus) -> bool {
        self.solution_count == corpus.solutions().len()
            && self.guessable_count == corpus.guessable().len()
            && self.fingerprint == corpus.fingerprint()
    }

    /// The stored ranking, bucketed for `corpus`
    ///
    /// `None` unless the book matches `corpus` and scores exactly its guessable words.
    #[must_use]
    pub fn ranking_for(&self, corpus: &Corpus) -> Option<RankingResult> {
        if !self.matches(corpus) {
            warn!(
                "ignoring opening book for {} solutions / {} guessable ({:016x}); corpus has \
                 {} / {} ({:016x})",
                self.solution_count,
                self.guessable_count,
                self.fingerprint,
                corpus.solutions().len(),
                corpus.guessable().len(),
                corpus.fingerprint()
            );
            return None;
        }

        let mut ranking = RankingResult::default();
        for &(word, score) in &self.scores {
            if !corpus.is_guessable(&word) {
                warn!("ignoring opening book: {word} is not a guessable word");
                return None;
            }
            ranking.record(word, score, corpus.is_solution(&word));
        }
        if ranking.len() != corpus.guessable().len() {
            warn!(
                "ignoring opening book: it scores {} of {} guessable words",
                ranking.len(),
                corpus.guessable().len()
            );
            return None;
        }
        Some(ranking)
    }

    /// Parse the text format
    ///
    /// # Errors
    /// Returns `MissingHeader` or `Malformed` when the text is not an opening book.
    pub fn parse(text: &str) -> Result<Self, OpeningBookError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines.next().ok_or(OpeningBookError::MissingHeader)?;
        let (solution_count, guessable_count, fingerprint) =
            parse_header(header).ok_or(OpeningBookError::MissingHeader)?;

        let mut scores = Vec::new();
        for (line, entry) in lines {
            let malformed = |reason: String| OpeningBookError::Malformed { line, reason };
            let (word, score) = entry
                .split_once(char::is_whitespace)
                .ok_or_else(|| malformed(format!("expected `WORD SCORE`, got {entry:?}")))?;
            let word = Word::new(word).map_err(|e| malformed(e.to_string()))?;
            let score: f64 = score
                .trim()
                .parse()
                .map_err(|e| malformed(format!("bad score: {e}")))?;
            scores.push((word, score));
        }
        scores.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        Ok(Self {
            solution_count,
            guessable_count,
            fingerprint,
            scores,
        })
    }

    /// Render the text format
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            "# solutions={} guessable={} fingerprint={:016x}\n",
            self.solution_count, self.guessable_count, self.fingerprint
        );
        for (word, score) in &self.scores {
            let _ = writeln!(out, "{word} {score}");
        }
        out
    }

    /// Read a book from `path`
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, otherwise as [`OpeningBook::parse`].
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, OpeningBookError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Write the book to `path`
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), OpeningBookError> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

fn parse_header(header: &str) -> Option<(usize, usize, u64)> {
    let rest = header.strip_prefix('#')?.trim();
    let mut solutions = None;
    let mut guessable = None;
    let mut fingerprint = None;
    for field in rest.split_whitespace() {
        match field.split_once('=')? {
            ("solutions", n) => solutions = n.parse().ok(),
            ("guessable", n) => guessable = n.parse().ok(),
            ("fingerprint", h) => fingerprint = u64::from_str_radix(h, 16).ok(),
            _ => {}
        }
    }
    Some((solutions?, guessable?, fingerprint?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_strs(["BATCH", "HATCH", "LATCH", "MATCH", "PATCH"], ["PLUMB"]).unwrap()
    }

    #[test]
    fn compute_scores_every_guessable_word() {
        let corpus = corpus();
        let book = OpeningBook::compute(&corpus, &RankerConfig::default());

        assert_eq!(book.scores().len(), 6);
        assert_eq!(book.scores()[0].0, Word::new("PLUMB").unwrap());
        assert!(book.matches(&corpus));
    }

    #[test]
    fn render_then_parse_preserves_the_book() {
        let book = OpeningBook::compute(&corpus(), &RankerConfig::default());
        let parsed = OpeningBook::parse(&book.render()).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn ranking_for_buckets_by_corpus() {
        let corpus = corpus();
        let book = OpeningBook::compute(&corpus, &RankerConfig::default());
        let ranking = book.ranking_for(&corpus).unwrap();

        assert_eq!(ranking.solution_ranks.len(), 5);
        assert_eq!(ranking.non_solution_ranks.len(), 1);
        assert!(!ranking.timed_out);
    }

    #[test]
    fn mismatched_corpus_is_ignored() {
        let book = OpeningBook::compute(&corpus(), &RankerConfig::default());
        let other = Corpus::from_strs(["CRANE", "CRATE"], []).unwrap();
        assert!(!book.matches(&other));
        assert!(book.ranking_for(&other).is_none());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            OpeningBook::parse(""),
            Err(OpeningBookError::MissingHeader)
        ));
        assert!(matches!(
            OpeningBook::parse("CRANE 1.0"),
            Err(OpeningBookError::MissingHeader)
        ));
        assert!(matches!(
            OpeningBook::parse("# solutions=2 guessable=2\nCRANE 1.0"),
            Err(OpeningBookError::MissingHeader)
        ));
        assert!(matches!(
            OpeningBook::parse("# solutions=2 guessable=2 fingerprint=0\nCRANE one"),
            Err(OpeningBookError::Malformed { line: 2, .. })
        ));
        assert!(matches!(
            OpeningBook::parse("# solutions=2 guessable=2 fingerprint=0\n\nCRANES 1.0"),
            Err(OpeningBookError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn parse_sorts_entries() {
        let text = "# solutions=2 guessable=3 fingerprint=ff\nCRATE 2.5\nCRANE 1.5\n";
        let book = OpeningBook::parse(text).unwrap();
        assert_eq!(book.scores()[0], (Word::new("CRANE").unwrap(), 1.5));
    }

    #[test]
    fn same_sized_corpus_does_not_match() {
        let corpus = corpus();
        let book = OpeningBook::compute(&corpus, &RankerConfig::default());
        let other =
            Corpus::from_strs(["CRANE", "CRATE", "TRACE", "SLATE", "IRATE"], ["AAHED"]).unwrap();
        assert_eq!(other.solutions().len(), corpus.solutions().len());
        assert_eq!(other.guessable().len(), corpus.guessable().len());

        assert!(!book.matches(&other));
        assert!(book.ranking_for(&other).is_none());
    }

    #[test]
    fn ranker_falls_back_to_live_search_for_foreign_book() {
        use crate::game::{Game, GameConfig, Vocabulary};
        use crate::solver::GuessRanker;

        let book = OpeningBook::compute(&corpus(), &RankerConfig::default());
        let vocabulary = Vocabulary::new(
            Corpus::from_strs(["CRANE", "CRATE", "TRACE", "SLATE", "IRATE"], ["AAHED"]).unwrap(),
        );
        let game = Game::new(&vocabulary, GameConfig::default(), Some("CRANE")).unwrap();

        let ranking = GuessRanker::default().with_opening_book(&book).rank(&game);
        assert_eq!(ranking, GuessRanker::default().rank(&game));
        assert_eq!(ranking.len(), 6);
    }

    #[test]
    fn incomplete_book_is_ignored() {
        let corpus = corpus();
        let rendered = OpeningBook::compute(&corpus, &RankerConfig::default()).render();
        let truncated: Vec<&str> = rendered.lines().take(4).collect();
        let book = OpeningBook::parse(&truncated.join("\n")).unwrap();

        assert!(book.matches(&corpus));
        assert!(book.ranking_for(&corpus).is_none());
    }

    #[test]
    fn game_uses_book_on_first_move_only() {
        use crate::game::{Game, GameConfig, Vocabulary};
        use crate::solver::GuessRanker;

        let corpus = corpus();
        let mut book = OpeningBook::compute(&corpus, &RankerConfig::default());
        // Make the book distinguishable from a live ranking
        for entry in &mut book.scores {
            entry.1 = 42.0;
        }

        let vocabulary = Vocabulary::new(corpus);
        let mut game = Game::new(&vocabulary, GameConfig::default(), Some("MATCH")).unwrap();
        let ranker = GuessRanker::default().with_opening_book(&book);

        let opening = ranker.rank(&game);
        assert!(opening.solution_ranks.values().all(|&s| s == 42.0));

        game.make_guess("BATCH").unwrap();
        let later = ranker.rank(&game);
        assert!(later.solution_ranks.values().all(|&s| s != 42.0));
    }
}
