//! Replay a sequence of guesses and rank the next move

use crate::error::EngineError;
use crate::game::{Game, GameConfig, Vocabulary};
use crate::solver::RankingResult;
use std::time::Duration;

/// Start a game against `answer` and submit `guesses` in order
///
/// # Errors
/// Returns the first error from starting the game or submitting a guess.
pub fn replay<'v, S: AsRef<str>>(
    vocabulary: &'v Vocabulary,
    config: GameConfig,
    answer: &str,
    guesses: &[S],
) -> Result<Game<'v>, EngineError> {
    let mut game = Game::new(vocabulary, config, Some(answer))?;
    for guess in guesses {
        game.make_guess(guess.as_ref())?;
    }
    Ok(game)
}

/// Replay `guesses` against `answer`, then rank every guessable word for the next move
///
/// # Errors
/// Same as [`replay`].
pub fn rank_position<'v, S: AsRef<str>>(
    vocabulary: &'v Vocabulary,
    config: GameConfig,
    answer: &str,
    guesses: &[S],
    timeout: Option<Duration>,
) -> Result<(Game<'v>, RankingResult), EngineError> {
    let game = replay(vocabulary, config, answer, guesses)?;
    let ranking = game.rank_guesses(timeout);
    Ok((game, ranking))
}
