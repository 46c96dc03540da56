//! Strictly Guess - hot/cold number guessing logic
//!
//! The secret number lives in `[1, max]`. Each guess is scored for
//! proximity, recorded in a newest-first history, and turned into feedback
//! (colour, message, sound cue) until the player finds the number.
//!
//! # Architecture
//!
//! - **Scoring**: pure `(guess, target, range) -> (proximity, direction)`
//! - **Feedback**: pure `(proximity, direction) -> (colour, message, sound)`
//! - **History**: append-only log of guesses, newest first
//! - **Session**: typestate rounds wrapped by [`GameSession`], which returns
//!   [`Effect`]s instead of performing I/O
//!
//! # Example
//!
//! ```
//! use strictly_guess::{parse_guess, Effect, FixedTarget, GameSession, MaxRange, SoundCue};
//!
//! let range = MaxRange::new(10)?;
//! let mut session = GameSession::start(range, &mut FixedTarget(5));
//!
//! let guess = parse_guess("5", range)?;
//! let report = session.submit(guess)?;
//!
//! assert!(session.is_won());
//! assert_eq!(report.effects, [Effect::PlaySound(SoundCue::CorrectSound)]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod feedback;
mod history;
mod input;
mod rng;
mod scoring;
mod session;
mod types;

// Crate-level exports - Domain types
pub use types::{Direction, Guess, GuessEntry, MaxRange, Proximity, RangeError};

// Crate-level exports - Scoring and feedback
pub use feedback::{
    CLOSE_THRESHOLD, FeedbackDecision, HEAT_SEGMENTS, Message, Rgb, SUCCESS_COLOR, SoundCue,
    heat_color, heat_segment, select,
};
pub use scoring::{Score, score};

// Crate-level exports - History
pub use history::{GuessHistory, HeatBand};

// Crate-level exports - Input boundary
pub use input::{InputError, parse_guess};

// Crate-level exports - Randomness
pub use rng::{FixedTarget, SeededSource, TargetSource, ThreadRngSource};

// Crate-level exports - Session
pub use action::{Effect, SubmitError};
pub use session::contracts::{Contract, GuessInRange, SubmitContract};
pub use session::invariants::{
    AttemptsMatchHistory, CorrectOnlyAtHead, Invariant, InvariantSet, InvariantViolation,
    RoundInvariants, WonIffLatestCorrect,
};
pub use session::{
    GameSession, Phase, Round, RoundActive, RoundResult, RoundState, RoundWon, SubmitReport,
    Submission,
};
