//! Benchmark command
//!
//! Plays the best-guess policy against many solutions in parallel and reports how it did.

use crate::core::Word;
use crate::error::EngineError;
use crate::game::{Game, GameConfig, Vocabulary};
use crate::solver::GuessRanker;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// One simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: Word,
    pub guesses: Vec<Word>,
    pub won: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    /// Over solved games only
    pub average_guesses: f64,
    /// Guess count to number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
}

impl BenchmarkResult {
    /// Summarize finished games
    #[must_use]
    pub fn from_records(records: &[GameRecord], duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failures = Vec::new();
        let mut solved_guesses = 0;

        for record in records {
            if record.won {
                solved_guesses += record.guesses.len();
                *distribution.entry(record.guesses.len()).or_insert(0) += 1;
            } else {
                failures.push(record.solution);
            }
        }
        failures.sort_unstable();

        let solved = records.len() - failures.len();
        Self {
            total_games: records.len(),
            solved,
            average_guesses: if solved > 0 {
                solved_guesses as f64 / solved as f64
            } else {
                0.0
            },
            distribution,
            failures,
            duration,
        }
    }

    /// Fraction of games won, 0 when nothing was played
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_games as f64
        }
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.total_games as f64 / secs
        } else {
            0.0
        }
    }
}

/// Play `ranker`'s best guess until the game ends
///
/// # Errors
/// Returns `NoSolutionConfigured` if `solution` is not a corpus solution.
pub fn simulate_game(
    vocabulary: &Vocabulary,
    config: GameConfig,
    solution: &Word,
    ranker: &GuessRanker<'_>,
) -> Result<GameRecord, EngineError> {
    let mut game = Game::new(vocabulary, config, Some(solution.as_str()))?;

    while !game.status().is_over() {
        let Some(guess) = ranker.best_guess(&game) else {
            break;
        };
        game.make_guess(guess.as_str())?;
    }

    Ok(GameRecord {
        solution: *solution,
        guesses: game.guesses().iter().map(|g| *g.word()).collect(),
        won: game.won(),
    })
}

/// Pick `count` solutions at random, or all of them in random order
#[must_use]
pub fn sample_solutions(solutions: &[Word], count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut sample = solutions.to_vec();
    sample.shuffle(&mut rng);
    if let Some(count) = count {
        sample.truncate(count);
    }
    sample
}

/// Simulate a game for every word of `solutions` in parallel
///
/// # Errors
/// Returns the first error from [`simulate_game`].
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    config: GameConfig,
    solutions: &[Word],
    ranker: &GuessRanker<'_>,
    show_progress: bool,
) -> Result<BenchmarkResult, EngineError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(solutions.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
            .map_or_else(
                |_| ProgressStyle::default_bar(),
                |style| style.progress_chars("█▓▒░"),
            ),
    );

    let records = solutions
        .par_iter()
        .map(|solution| {
            let record = simulate_game(vocabulary, config, solution, ranker);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let result = BenchmarkResult::from_records(&records, start.elapsed());
    info!(
        "benchmark: {} games, {:.3} average guesses, {} failures",
        result.total_games,
        result.average_guesses,
        result.failures.len()
    );
    Ok(result)
}
