//! Wordle Engine - CLI
//!
//! Play Wordle in the terminal, rank guesses for a position, benchmark the best-guess policy and
//! precompute opening books.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_engine::{
    commands::{
        PlayOptions, build_opening_book, play, rank_position, run_benchmark, sample_solutions,
    },
    core::Corpus,
    game::{Game, GameConfig, Vocabulary},
    output::{print_benchmark_result, print_opening_book, print_ranking_result},
    solver::{GuessRanker, OpeningBook, RankerConfig},
    wordlists::{
        NON_SOLUTIONS, SOLUTIONS, embedded_corpus,
        loader::{corpus_from_lists, read_word_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle constraint engine and average-remaining guess ranker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Replace the embedded solution list (one word per line)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Replace the embedded non-solution guess list (one word per line)
    #[arg(long, global = true)]
    non_solutions: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play {
        /// Solution to play against instead of a random one
        #[arg(short, long)]
        answer: Option<String>,

        /// Accept any five letters as a guess
        #[arg(long)]
        allow_invalid_guesses: bool,

        /// Hide the letter bank
        #[arg(long)]
        no_letter_bank: bool,

        /// Show the remaining candidate solutions
        #[arg(long)]
        word_bank: bool,

        /// Seconds the `hint` command may spend ranking
        #[arg(long, default_value = "5")]
        hint_timeout: f64,
    },

    /// Replay guesses against a solution and rank the next move
    Rank {
        /// Guesses already made, in order
        guesses: Vec<String>,

        /// The solution the guesses were scored against
        #[arg(short, long)]
        answer: String,

        /// Stop ranking after this many seconds
        #[arg(short, long)]
        timeout: Option<f64>,

        /// Accept any five letters as a guess
        #[arg(long)]
        allow_invalid_guesses: bool,
    },

    /// Simulate the best-guess policy against many solutions
    Benchmark {
        /// Number of random solutions to play (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Opening book answering the first guess
        #[arg(short, long)]
        opening: Option<PathBuf>,

        /// Seed for the solution sample
        #[arg(long)]
        seed: Option<u64>,

        /// Guesses allowed per game
        #[arg(long, default_value_t = GameConfig::DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Rank every opening guess and write an opening book
    Opening {
        /// Where to write the book
        #[arg(short, long)]
        output: PathBuf,

        /// Number of top openings to print
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

/// Build the corpus from the embedded lists, replacing either with a file if given
fn load_corpus(solutions: Option<&Path>, non_solutions: Option<&Path>) -> Result<Corpus> {
    if solutions.is_none() && non_solutions.is_none() {
        return embedded_corpus().context("embedded word lists are invalid");
    }

    let read = |path: Option<&Path>, embedded: &[&str]| -> Result<Vec<String>> {
        match path {
            Some(path) => read_word_file(path)
                .with_context(|| format!("failed to read word list {}", path.display())),
            None => Ok(embedded.iter().map(|&w| w.to_string()).collect()),
        }
    };
    let solutions = read(solutions, SOLUTIONS)?;
    let non_solutions = read(non_solutions, NON_SOLUTIONS)?;
    info!(
        "loaded {} solutions and {} non-solutions",
        solutions.len(),
        non_solutions.len()
    );
    corpus_from_lists(&solutions, &non_solutions).context("invalid word lists")
}

fn seconds(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).with_context(|| format!("invalid duration: {secs}s"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let corpus = load_corpus(cli.solutions.as_deref(), cli.non_solutions.as_deref())?;
    let vocabulary = Vocabulary::new(corpus);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        answer: None,
        allow_invalid_guesses: false,
        no_letter_bank: false,
        word_bank: false,
        hint_timeout: 5.0,
    });

    match command {
        Commands::Play {
            answer,
            allow_invalid_guesses,
            no_letter_bank,
            word_bank,
            hint_timeout,
        } => {
            let config = GameConfig::default().with_guess_validity(!allow_invalid_guesses);
            let options = PlayOptions {
                letter_bank: !no_letter_bank,
                word_bank,
                hint_timeout: Some(seconds(hint_timeout)?),
            };
            run_play_command(&vocabulary, config, answer.as_deref(), &options)
        }
        Commands::Rank {
            guesses,
            answer,
            timeout,
            allow_invalid_guesses,
        } => {
            let config = GameConfig::default().with_guess_validity(!allow_invalid_guesses);
            let timeout = timeout.map(seconds).transpose()?;
            let (game, ranking) =
                rank_position(&vocabulary, config, &answer, guesses.as_slice(), timeout)?;
            print_ranking_result(&game, &ranking);
            Ok(())
        }
        Commands::Benchmark {
            count,
            opening,
            seed,
            max_guesses,
        } => run_benchmark_command(&vocabulary, count, opening.as_deref(), seed, max_guesses),
        Commands::Opening { output, top } => {
            let book = build_opening_book(
                vocabulary.corpus(),
                &RankerConfig::default(),
                &output,
                true,
            )?;
            print_opening_book(&book, top);
            println!(
                "\nWrote {} openings to {}",
                book.scores().len(),
                output.display()
            );
            Ok(())
        }
    }
}

fn run_play_command(
    vocabulary: &Vocabulary,
    config: GameConfig,
    answer: Option<&str>,
    options: &PlayOptions,
) -> Result<()> {
    let mut game = Game::new(vocabulary, config, answer)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(&mut game, options, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_benchmark_command(
    vocabulary: &Vocabulary,
    count: Option<usize>,
    opening: Option<&Path>,
    seed: Option<u64>,
    max_guesses: usize,
) -> Result<()> {
    let book = opening
        .map(|path| {
            OpeningBook::read_from(path)
                .with_context(|| format!("failed to load opening book {}", path.display()))
        })
        .transpose()?;

    let mut ranker = GuessRanker::default();
    if let Some(book) = &book {
        ranker = ranker.with_opening_book(book);
    }

    let solutions = sample_solutions(vocabulary.corpus().solutions(), count, seed);
    println!("Simulating {} games...", solutions.len());

    let config = GameConfig::default().with_max_guesses(max_guesses);
    let result = run_benchmark(vocabulary, config, &solutions, &ranker, true)?;
    print_benchmark_result(&result);
    Ok(())
}
