//! Side-effect requests and submission errors.
//!
//! State transitions never perform I/O. They return [`Effect`]s that a thin
//! adapter executes (for example, the audio driver).

use super::feedback::SoundCue;
use serde::{Deserialize, Serialize};

/// A request produced by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Play a feedback sound. Fire-and-forget.
    PlaySound(SoundCue),
    /// Stop whatever sound is still playing.
    StopSound,
}

/// Error returned when a guess cannot be submitted.
///
/// None of these change session state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SubmitError {
    /// The number was already found; start a new game first.
    #[display("Game is already won")]
    AlreadyWon,

    /// The previous feedback sound has not finished.
    #[display("Wait for the sound to finish")]
    SoundPlaying,

    /// The guess does not fit this session's range.
    #[display("{} is not between 1 and {}", value, max)]
    OutOfRange {
        /// The rejected guess.
        value: u32,
        /// Upper bound of the session's range.
        max: u32,
    },

    /// A postcondition failed after scoring.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SubmitError {}
