//! Guess ranking
//!
//! Scores guesses by the average number of candidate solutions they would leave.

pub mod opening;
mod ranker;
mod ranking;

pub use opening::{OpeningBook, OpeningBookError};
pub use ranker::{GuessRanker, RankerConfig, average_remaining, choose_guess, rank_words};
pub use ranking::{RankedGuess, RankingResult};
