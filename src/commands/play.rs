//! Interactive game over any line-based input
//!
//! Reads one guess per line. `hint` asks the ranker for a suggestion and `quit` gives up.

use crate::game::{Game, GameStatus};
use crate::output::{write_board, write_letter_bank, write_share_grid, write_word_bank};
use crate::solver::{GuessRanker, RankerConfig};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::time::Duration;

/// What to show between guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    pub letter_bank: bool,
    pub word_bank: bool,
    /// Time limit for `hint`
    pub hint_timeout: Option<Duration>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            letter_bank: true,
            word_bank: false,
            hint_timeout: Some(Duration::from_secs(5)),
        }
    }
}

/// Play `game` until it is over or the player stops
///
/// # Errors
/// Returns I/O errors from `input` or `out`, and any engine error other than a rejected guess.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    options: &PlayOptions,
    input: R,
    out: &mut W,
) -> Result<GameStatus> {
    let mut lines = input.lines();

    while !game.status().is_over() {
        writeln!(
            out,
            "Make a guess and press enter! ({} for a suggestion, {} to give up)",
            "hint".bold(),
            "quit".bold()
        )?;
        if options.letter_bank {
            write_letter_bank(out, &game.letter_bank())?;
        }
        if options.word_bank {
            write_word_bank(out, &game.word_bank())?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "hint" => {
                let config = RankerConfig::default().with_timeout(options.hint_timeout);
                match GuessRanker::new(config).best_guess(game) {
                    Some(word) => {
                        writeln!(out, "Hint: {}", word.as_str().bright_yellow().bold())?;
                    }
                    None => writeln!(out, "No candidates remain")?,
                }
                continue;
            }
            _ => {}
        }

        match game.make_guess(&line) {
            Ok(_) => {
                writeln!(out)?;
                write_board(out, game.guesses())?;
            }
            Err(err) if err.is_recoverable() => writeln!(out, "{}", err.to_string().red())?,
            Err(err) => return Err(err.into()),
        }
    }

    if game.won() {
        let count = game.score();
        let plural = if count == 1 { "" } else { "es" };
        writeln!(
            out,
            "{}",
            format!("You won in {count} guess{plural}!").green().bold()
        )?;
    } else if game.lost() {
        writeln!(
            out,
            "{} The word was {}",
            "Out of guesses!".red().bold(),
            game.solution()
        )?;
    }

    if game.status().is_over() {
        writeln!(out)?;
        write_share_grid(out, game.guesses())?;
    }

    Ok(game.status())
}
