//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_opening_book, print_ranking_result, write_board,
    write_letter_bank, write_share_grid, write_word_bank,
};
