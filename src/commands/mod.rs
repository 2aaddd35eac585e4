//! Command implementations

pub mod benchmark;
pub mod opening;
pub mod play;
pub mod rank;

pub use benchmark::{BenchmarkResult, GameRecord, run_benchmark, sample_solutions, simulate_game};
pub use opening::build_opening_book;
pub use play::{PlayOptions, play};
pub use rank::{rank_position, replay};
