//! Invariants over a round's history.
//!
//! Invariants are logical properties that hold after every accepted guess.
//! They are checked in debug builds and are testable on their own.

use super::typestate::RoundState;
use crate::types::Direction;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S: ?Sized, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S: ?Sized, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: one history entry per counted attempt.
pub struct AttemptsMatchHistory;

impl<S: RoundState + ?Sized> Invariant<S> for AttemptsMatchHistory {
    fn holds(state: &S) -> bool {
        usize::try_from(state.attempts()).is_ok_and(|a| a == state.history().len())
    }

    fn description() -> &'static str {
        "Attempt count matches history length"
    }
}

/// Invariant: a correct entry can only be the newest one.
///
/// Once the target is found no further guess is accepted, so nothing can
/// be recorded after it.
pub struct CorrectOnlyAtHead;

impl<S: RoundState + ?Sized> Invariant<S> for CorrectOnlyAtHead {
    fn holds(state: &S) -> bool {
        !state
            .history()
            .all()
            .skip(1)
            .any(|e| e.direction() == Direction::Correct)
    }

    fn description() -> &'static str {
        "Only the newest entry may be correct"
    }
}

/// Invariant: the round is won exactly when the newest entry is correct.
pub struct WonIffLatestCorrect;

impl<S: RoundState + ?Sized> Invariant<S> for WonIffLatestCorrect {
    fn holds(state: &S) -> bool {
        let latest_correct = state
            .history()
            .latest()
            .is_some_and(|e| e.direction().is_correct());
        state.is_won() == latest_correct
    }

    fn description() -> &'static str {
        "Won status matches the newest entry"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (AttemptsMatchHistory, CorrectOnlyAtHead, WonIffLatestCorrect);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedTarget;
    use crate::session::typestate::{RoundActive, RoundResult};
    use crate::types::{Guess, GuessEntry, MaxRange, Proximity};

    fn round(target: u32) -> RoundActive {
        RoundActive::start(MaxRange::new(100).unwrap(), &mut FixedTarget(target))
    }

    fn guess(value: u32) -> Guess {
        Guess::new(value, MaxRange::new(100).unwrap()).unwrap()
    }

    #[test]
    fn test_invariants_hold_for_fresh_round() {
        assert!(RoundInvariants::check_all(&round(50)).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_guesses() {
        let active = match round(50).submit(guess(20)).unwrap().result {
            RoundResult::Active(r) => r,
            RoundResult::Won(_) => panic!("Guess 20 should miss"),
        };
        assert!(RoundInvariants::check_all(&active).is_ok());

        let won = active.submit(guess(50)).unwrap().result;
        assert!(RoundInvariants::check_all(won.state()).is_ok());
    }

    #[test]
    fn test_detects_unrecorded_attempt() {
        let mut corrupted = round(50);
        corrupted.attempts = 2;

        let violations = RoundInvariants::check_all(&corrupted).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, "Attempt count matches history length");
    }

    #[test]
    fn test_detects_correct_entry_buried_in_history() {
        let mut corrupted = round(50);
        corrupted
            .history
            .append(GuessEntry::new(50, Proximity::EXACT, Direction::Correct));
        corrupted
            .history
            .append(GuessEntry::new(10, Proximity::new(60.0), Direction::TooLow));
        corrupted.attempts = 2;

        assert!(!<CorrectOnlyAtHead as Invariant<RoundActive>>::holds(&corrupted));
        assert!(<WonIffLatestCorrect as Invariant<RoundActive>>::holds(&corrupted));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (AttemptsMatchHistory, WonIffLatestCorrect);
        assert!(TwoInvariants::check_all(&round(7)).is_ok());
    }
}
