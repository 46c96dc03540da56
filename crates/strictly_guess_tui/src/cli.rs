//! Command-line interface for strictly_guess.

use crate::difficulty::Difficulty;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Guess - Hot/cold number guessing in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Guess the secret number with colour and sound feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,

        /// Disable sound cues
        #[arg(long)]
        mute: bool,

        /// File to write logs to
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Let a bisecting bot play one game and print the result
    Bot {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Give up after this many guesses
        #[arg(long, default_value = "64")]
        max_turns: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            game: GameArgs::default(),
            mute: false,
            log_file: None,
        }
    }
}

/// Settings shared by every mode. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameArgs {
    /// Preset range for the secret number
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Custom upper bound for the secret number
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..), conflicts_with = "difficulty")]
    pub range: Option<u32>,

    /// Seed for a reproducible secret number
    #[arg(short, long)]
    pub seed: Option<u64>,
}
