//! Contracts for guess submission.
//!
//! A contract pairs a precondition on `(state, action)` with a postcondition
//! on `(before, after)`: {P} submit {Q}.

use super::invariants::{InvariantSet, RoundInvariants};
use super::typestate::{RoundActive, RoundResult, RoundState};
use crate::action::SubmitError;
use crate::types::Guess;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// State produced by the transition.
    type After;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SubmitError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &Self::After) -> Result<(), SubmitError>;
}

/// Precondition: the guess lies in the round's range.
pub struct GuessInRange;

impl GuessInRange {
    /// Validates the guess against the round's range.
    #[instrument(skip(round))]
    pub fn check(guess: &Guess, round: &RoundActive) -> Result<(), SubmitError> {
        let range = round.range();
        if range.contains(guess.value()) {
            Ok(())
        } else {
            warn!(value = guess.value(), max = range.get(), "Guess outside session range");
            Err(SubmitError::OutOfRange {
                value: guess.value(),
                max: range.get(),
            })
        }
    }
}

/// Contract for submitting a guess.
///
/// Preconditions:
/// - Guess is inside the round's range
///
/// Postconditions:
/// - Exactly one attempt was counted
/// - The target did not move
/// - All round invariants hold
pub struct SubmitContract;

impl Contract<RoundActive, Guess> for SubmitContract {
    type After = RoundResult;

    fn pre(round: &RoundActive, guess: &Guess) -> Result<(), SubmitError> {
        GuessInRange::check(guess, round)
    }

    fn post(before: &RoundActive, after: &RoundResult) -> Result<(), SubmitError> {
        let state = after.state();
        if state.attempts() != before.attempts() + 1 {
            return Err(SubmitError::InvariantViolation(format!(
                "Postcondition failed: attempts went from {} to {}",
                before.attempts(),
                state.attempts()
            )));
        }

        let target_after = match after {
            RoundResult::Active(round) => round.target,
            RoundResult::Won(round) => round.target(),
        };
        if target_after != before.target {
            return Err(SubmitError::InvariantViolation(
                "Postcondition failed: target changed".to_string(),
            ));
        }

        RoundInvariants::check_all(state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SubmitError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
