//! Boggle - CLI
//!
//! Boggle word game with TUI and CLI modes.

use anyhow::{Context, Result};
use boggle::{
    commands::{check_word, roll_board, run_benchmark, run_simple, similar_words},
    dictionary::WordStore,
    game::{GameSession, SessionConfig},
    output::{print_benchmark_result, print_board, print_check_result, print_similar_result},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "boggle",
    about = "Boggle word game with dictionary lookup and similar-word suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (whitespace-separated, sorted lowercase words); defaults to the built-in list
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for dice shuffling and rolling, for reproducible boards
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type words at a prompt)
    Simple,

    /// Check whether a word is legal and show similar words
    Check {
        /// The word to check
        word: String,
    },

    /// List dictionary words similar to a word
    Similar {
        /// The word to look up
        word: String,
    },

    /// Deal and print a board
    Roll,

    /// Benchmark dictionary lookups
    Bench {
        /// Number of dictionary words to query
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn init_tracing(tui: bool) {
    // Keep the TUI screen clean unless logging was asked for explicitly
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if tui { "off" } else { "warn" }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<WordStore> {
    match path {
        Some(path) => WordStore::load(path)
            .with_context(|| format!("failed to load dictionary from {}", path.display())),
        None => WordStore::embedded().context("failed to load built-in dictionary"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(matches!(command, Commands::Play));

    let dictionary = load_dictionary(cli.dictionary.as_ref())?;
    let config = SessionConfig::new(cli.seed);

    match command {
        Commands::Play => run_play_command(dictionary, config),
        Commands::Simple => {
            let mut session = GameSession::new(dictionary, config);
            run_simple(&mut session)
        }
        Commands::Check { word } => {
            let session = GameSession::new(dictionary, config);
            print_check_result(&check_word(&session, &word));
            Ok(())
        }
        Commands::Similar { word } => {
            print_similar_result(&similar_words(&dictionary, &word));
            Ok(())
        }
        Commands::Roll => {
            let mut session = GameSession::new(dictionary, config);
            let result = roll_board(&mut session);
            print_board(&result.faces);
            Ok(())
        }
        Commands::Bench { count } => {
            println!("Running {count} lookups against {} words...", dictionary.len());
            let result = run_benchmark(&dictionary, count);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: WordStore, config: SessionConfig) -> Result<()> {
    use boggle::interactive::{App, run_tui};

    let mut session = GameSession::new(dictionary, config);
    let app = App::new(&mut session);
    run_tui(app)
}
