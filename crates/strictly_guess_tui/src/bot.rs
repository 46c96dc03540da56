//! Automated players for headless games.

use anyhow::{Context, Result, bail};
use derive_new::new;
use serde::{Deserialize, Serialize};
use strictly_guess::{GameSession, Guess, Round, RoundActive, TargetSource};
use tracing::{debug, info, instrument};

use crate::settings::GameSettings;

/// Something that can pick the next guess.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Returns the next guess for the round.
    async fn next_guess(&mut self, round: &RoundActive) -> Result<u32>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Bisects the interval left open by previous guesses.
#[derive(Debug, Clone, new)]
pub struct Bisector {
    #[new(value = "\"bisector\".to_string()")]
    name: String,
}

#[async_trait::async_trait]
impl Player for Bisector {
    async fn next_guess(&mut self, round: &RoundActive) -> Result<u32> {
        let (lo, hi) = round.bracket();
        if lo > hi {
            bail!("Empty bracket {}..={}", lo, hi);
        }
        let guess = lo + (hi - lo) / 2;
        debug!(player = %self.name, lo, hi, guess, "Bisecting");
        Ok(guess)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Result of a bot game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct BotSummary {
    /// Upper bound of the range.
    pub range: u32,
    /// The secret number.
    pub target: u32,
    /// Guesses taken.
    pub attempts: u32,
    /// Every guess, oldest first.
    pub guesses: Vec<u32>,
}

impl std::fmt::Display for BotSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guesses: Vec<String> = self.guesses.iter().map(u32::to_string).collect();
        write!(
            f,
            "Found {} in 1-{} after {} attempts: {}",
            self.target,
            self.range,
            self.attempts,
            guesses.join(" -> ")
        )
    }
}

/// Plays one silent game to the end.
#[instrument(skip(player, source), fields(player = player.name()))]
pub async fn play(
    player: &mut dyn Player,
    settings: &GameSettings,
    source: &mut impl TargetSource,
    max_turns: u32,
) -> Result<BotSummary> {
    let mut session = GameSession::start(*settings.range(), source).without_audio();
    let mut guesses = Vec::new();

    loop {
        let round = match session.round() {
            Round::Active(round) => round,
            Round::Won(_) => break,
        };
        if guesses.len() as u32 >= max_turns {
            bail!("No win after {} guesses", max_turns);
        }

        let value = player.next_guess(round).await?;
        let guess = Guess::new(value, session.range())
            .with_context(|| format!("{} guessed outside the range", player.name()))?;
        let report = session.submit(guess)?;
        info!(
            turn = guesses.len() + 1,
            guess = value,
            proximity = %report.entry.proximity(),
            direction = %report.entry.direction(),
            "Bot guessed"
        );
        guesses.push(value);
    }

    let target = session
        .revealed_target()
        .context("Session ended without a revealed target")?;
    Ok(BotSummary::new(
        session.range().get(),
        target,
        session.attempts(),
        guesses,
    ))
}

/// Runs the bot subcommand and prints its summary.
#[instrument(skip(settings))]
pub async fn run(settings: GameSettings, json: bool, max_turns: u32) -> Result<()> {
    let mut player = Bisector::new();
    let mut source = settings.source();
    let summary = play(&mut player, &settings, &mut source, max_turns).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
