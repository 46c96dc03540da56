//! Game session: owns the round and the sound-gating flag.
//!
//! The front end only reads from a [`GameSession`]. Every change goes
//! through [`GameSession::submit`], [`GameSession::restart`] or the sound
//! status notifications, and transitions hand back [`Effect`]s instead of
//! touching audio directly.

pub mod contracts;
pub mod invariants;
mod phases;
mod typestate;

pub use phases::Phase;
pub use typestate::{RoundActive, RoundResult, RoundState, RoundWon, Submission};

use crate::action::{Effect, SubmitError};
use crate::feedback::{FeedbackDecision, select};
use crate::history::GuessHistory;
use crate::rng::TargetSource;
use crate::types::{Guess, GuessEntry, MaxRange, Proximity};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Round storage for the session wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Round {
    /// Accepting guesses.
    Active(RoundActive),
    /// Target found.
    Won(RoundWon),
}

impl Round {
    fn state(&self) -> &dyn RoundState {
        match self {
            Round::Active(round) => round,
            Round::Won(round) => round,
        }
    }
}

impl From<RoundResult> for Round {
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::Active(round) => Round::Active(round),
            RoundResult::Won(round) => Round::Won(round),
        }
    }
}

/// Outcome of an accepted guess.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    /// The recorded entry.
    pub entry: GuessEntry,
    /// Colour, message and sound for the entry.
    pub feedback: FeedbackDecision,
    /// Requests for the I/O adapters.
    pub effects: Vec<Effect>,
}

impl SubmitReport {
    /// True when this guess found the target.
    pub fn won(&self) -> bool {
        self.entry.direction().is_correct()
    }
}

/// One game from start to win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    range: MaxRange,
    round: Round,
    proximity: Proximity,
    is_playing: bool,
    audio: bool,
}

impl GameSession {
    /// Starts a session with a new target.
    #[instrument(skip(source))]
    pub fn start(range: MaxRange, source: &mut impl TargetSource) -> Self {
        info!(%range, "Starting new game");
        Self {
            range,
            round: Round::Active(RoundActive::start(range, source)),
            proximity: Proximity::default(),
            is_playing: false,
            audio: true,
        }
    }

    /// Builder: marks audio as unavailable. Play requests are then never
    /// emitted and the playing flag never activates.
    pub fn without_audio(mut self) -> Self {
        self.audio = false;
        self
    }

    /// Replaces this session with a fresh one.
    ///
    /// Emits [`Effect::StopSound`] when a sound was still playing.
    #[instrument(skip(self, source), fields(old_range = %self.range))]
    pub fn restart(&mut self, range: MaxRange, source: &mut impl TargetSource) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.is_playing {
            debug!("Stopping sound from previous game");
            effects.push(Effect::StopSound);
        }

        let audio = self.audio;
        *self = Self::start(range, source);
        self.audio = audio;
        effects
    }

    /// Scores a guess and records it.
    ///
    /// Rejected guesses leave the session untouched. Submitting while won or
    /// while a sound plays is a caller error that the input boundary should
    /// prevent by disabling submission.
    #[instrument(skip(self, guess), fields(guess = guess.value(), attempts = self.attempts()))]
    pub fn submit(&mut self, guess: Guess) -> Result<SubmitReport, SubmitError> {
        let active = match &self.round {
            Round::Active(round) => round,
            Round::Won(_) => {
                warn!("Guess submitted after win");
                return Err(SubmitError::AlreadyWon);
            }
        };
        if self.is_playing {
            warn!("Guess submitted while sound playing");
            return Err(SubmitError::SoundPlaying);
        }

        let Submission {
            result,
            entry,
            feedback,
        } = active.clone().submit(guess)?;

        self.round = result.into();
        self.proximity = entry.proximity();

        let mut effects = Vec::new();
        if self.audio {
            self.is_playing = true;
            effects.push(Effect::PlaySound(feedback.sound));
        }

        Ok(SubmitReport {
            entry,
            feedback,
            effects,
        })
    }

    /// The audio collaborator reports that playback ended (naturally or by cap).
    #[instrument(skip(self))]
    pub fn sound_finished(&mut self) {
        if self.is_playing {
            debug!("Sound finished");
        }
        self.is_playing = false;
    }

    /// The audio collaborator could not be initialised; continue visual-only.
    #[instrument(skip(self))]
    pub fn audio_unavailable(&mut self) {
        warn!("Audio unavailable, feedback is visual only");
        self.audio = false;
        self.is_playing = false;
    }

    /// Range of the secret number.
    pub fn range(&self) -> MaxRange {
        self.range
    }

    /// Accepted guesses so far.
    pub fn attempts(&self) -> u32 {
        self.round.state().attempts()
    }

    /// Guesses, newest first.
    pub fn history(&self) -> &GuessHistory {
        self.round.state().history()
    }

    /// The round in its current phase.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.round {
            Round::Active(_) => Phase::Active,
            Round::Won(_) => Phase::Won,
        }
    }

    /// True once the target was found.
    pub fn is_won(&self) -> bool {
        self.phase().is_won()
    }

    /// Proximity of the latest guess, 0 before the first one.
    pub fn proximity(&self) -> Proximity {
        self.proximity
    }

    /// True while a feedback sound is playing.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// True when audio feedback is available.
    pub fn has_audio(&self) -> bool {
        self.audio
    }

    /// Whether the input boundary should accept a submission right now.
    pub fn can_submit(&self) -> bool {
        !self.is_won() && !self.is_playing
    }

    /// The target, only once it has been found.
    pub fn revealed_target(&self) -> Option<u32> {
        match &self.round {
            Round::Won(round) => Some(round.target()),
            Round::Active(_) => None,
        }
    }

    /// Feedback for the latest guess, or the neutral prompt before any.
    pub fn feedback(&self) -> FeedbackDecision {
        match self.history().latest() {
            Some(entry) => select(entry.proximity(), entry.direction()),
            None => FeedbackDecision::prompt(),
        }
    }

    /// Title line.
    pub fn title(&self) -> &'static str {
        if self.is_won() {
            "Congratulations! You found the number!"
        } else {
            "Guess the Number"
        }
    }

    /// Line under the title.
    pub fn headline(&self) -> String {
        match &self.round {
            Round::Won(round) => format!(
                "You found the number {} in {} attempts!",
                round.target(),
                round.attempts()
            ),
            Round::Active(_) => format!(
                "I'm thinking of a number between 1 and {}. Can you guess it?",
                self.range.get()
            ),
        }
    }
}
