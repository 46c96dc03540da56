//! Strictly Guess - terminal number guessing game.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_guess_tui::{AppConfig, Cli, Command, GameSettings, bot, logging, runner};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            game,
            mute,
            log_file,
        } => {
            let log_path = log_file.unwrap_or_else(|| config.log().file().clone());
            logging::init_file(&log_path, config.log().filter())?;

            let settings = GameSettings::resolve(&config, &game);
            let audio = if mute {
                config.audio().clone().muted()
            } else {
                config.audio().clone()
            };
            info!(mute, log = %log_path.display(), "Launching interactive game");
            runner::run(settings, audio).await
        }
        Command::Bot {
            game,
            json,
            max_turns,
        } => {
            logging::init_stderr(config.log().filter());
            let settings = GameSettings::resolve(&config, &game);
            bot::run(settings, json, max_turns).await
        }
    }
}
