//! Terminal front end for Strictly Guess.
//!
//! Wires the pure game core to a ratatui screen, a bell-based audio
//! adapter, and a headless bot mode.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod audio;
pub mod bot;
pub mod cli;
pub mod config;
pub mod difficulty;
pub mod logging;
pub mod runner;
pub mod settings;
pub mod ui;

pub use app::App;
pub use audio::{AudioDriver, AudioError, AudioEvent, BellPlayer, SilentPlayer, SoundPlayer};
pub use bot::{Bisector, BotSummary, Player};
pub use cli::{Cli, Command, GameArgs};
pub use config::{AppConfig, AudioConfig, ConfigError, LogConfig};
pub use difficulty::Difficulty;
pub use settings::GameSettings;
