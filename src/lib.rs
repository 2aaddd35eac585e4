//! Wordle Engine
//!
//! Constraint filtering for Wordle and an average-remaining guess ranker.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{Corpus, Feedback, Word};
//! use wordle_engine::game::{Game, GameConfig, Vocabulary};
//!
//! // Score a guess against a solution
//! let guess = Word::new("trace").unwrap();
//! let solution = Word::new("crane").unwrap();
//! let feedback = Feedback::evaluate(&guess, &solution);
//! assert_eq!(feedback.exact_letter_counts().get(b'T'), Some(0));
//!
//! // Play a game
//! let corpus = Corpus::from_strs(["crane", "crate", "trace"], ["aahed"]).unwrap();
//! let vocabulary = Vocabulary::new(corpus);
//! let mut game = Game::new(&vocabulary, GameConfig::default(), Some("crane")).unwrap();
//! game.make_guess("trace").unwrap();
//! assert_eq!(game.best_guess(), Some(Word::new("crane").unwrap()));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game state
pub mod game;

// Guess ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
