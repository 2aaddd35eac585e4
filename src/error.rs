//! Error types for the engine
//!
//! Every failure is returned to the immediate caller. Nothing here is retried or swallowed.

use thiserror::Error;

/// Error type for strings that are not well-formed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only the letters A-Z")]
    InvalidCharacters,
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuessKind {
    #[error("not a 5-letter word (got {0} characters)")]
    WrongLength(usize),
    #[error("contains characters other than A-Z")]
    InvalidCharacters,
    #[error("{0:?} is not in the word list")]
    NotInVocabulary(String),
}

impl From<WordError> for InvalidGuessKind {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::WrongLength(len),
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Errors surfaced by corpus construction, games and guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Recoverable; the caller should ask for another guess.
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] InvalidGuessKind),
    #[error("the game is already over")]
    GameAlreadyOver,
    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),
    #[error("{0:?} is not a solution")]
    NoSolutionConfigured(String),
}

impl EngineError {
    /// Whether the caller can simply re-prompt for another guess
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidGuess(_))
    }
}
