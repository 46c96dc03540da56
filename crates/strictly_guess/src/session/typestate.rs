//! Round typestates.
//!
//! Each phase is its own type. A `RoundWon` always knows its winning
//! attempt count and target; a `RoundActive` has no outcome at all.

use super::contracts::{Contract, SubmitContract};
use crate::action::SubmitError;
use crate::feedback::{FeedbackDecision, select};
use crate::history::GuessHistory;
use crate::rng::TargetSource;
use crate::scoring::{Score, score};
use crate::types::{Direction, Guess, GuessEntry, MaxRange};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Read access shared by every round phase.
pub trait RoundState {
    /// Range of the secret number.
    fn range(&self) -> MaxRange;
    /// Accepted guesses so far.
    fn attempts(&self) -> u32;
    /// Guesses, newest first.
    fn history(&self) -> &GuessHistory;
    /// True once the target was found.
    fn is_won(&self) -> bool;
}

// ─────────────────────────────────────────────────────────────
//  Active Phase
// ─────────────────────────────────────────────────────────────

/// Round accepting guesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundActive {
    pub(super) range: MaxRange,
    pub(super) target: u32,
    pub(super) attempts: u32,
    pub(super) history: GuessHistory,
}

impl RoundActive {
    /// Starts a round with a fresh target from `source`.
    #[instrument(skip(source))]
    pub fn start(range: MaxRange, source: &mut impl TargetSource) -> Self {
        let target = source.pick(range);
        debug!(target, %range, "New target number");
        Self {
            range,
            target,
            attempts: 0,
            history: GuessHistory::new(),
        }
    }

    /// Scores a guess, consuming the round and returning the next one.
    ///
    /// Preconditions are always checked; postconditions only in debug builds.
    #[instrument(skip(self, guess), fields(attempt = self.attempts + 1, guess = guess.value()))]
    pub fn submit(self, guess: Guess) -> Result<Submission, SubmitError> {
        SubmitContract::pre(&self, &guess)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let Score {
            proximity,
            direction,
        } = score(guess.value(), self.target, self.range);
        let entry = GuessEntry::new(guess.value(), proximity, direction);
        let feedback = select(proximity, direction);

        let mut round = self;
        round.attempts += 1;
        round.history.append(entry);

        info!(
            proximity = proximity.get(),
            %direction,
            attempts = round.attempts,
            "Guess scored"
        );

        let result = if direction.is_correct() {
            info!(attempts = round.attempts, "Target found");
            RoundResult::Won(RoundWon {
                range: round.range,
                target: round.target,
                attempts: round.attempts,
                history: round.history,
            })
        } else {
            RoundResult::Active(round)
        };

        #[cfg(debug_assertions)]
        SubmitContract::post(&before, &result)?;

        Ok(Submission {
            result,
            entry,
            feedback,
        })
    }

    /// Closest-guess bracket known so far: `(low, high)` the target must lie in.
    pub fn bracket(&self) -> (u32, u32) {
        self.history.all().fold((1, self.range.get()), |(lo, hi), e| {
            match e.direction() {
                Direction::TooLow => (lo.max(e.value().saturating_add(1)), hi),
                Direction::TooHigh => (lo, hi.min(e.value().saturating_sub(1))),
                Direction::Correct => (e.value(), e.value()),
            }
        })
    }

    /// Test hook: the hidden target.
    #[cfg(test)]
    pub(crate) fn target(&self) -> u32 {
        self.target
    }
}

impl RoundState for RoundActive {
    fn range(&self) -> MaxRange {
        self.range
    }

    fn attempts(&self) -> u32 {
        self.attempts
    }

    fn history(&self) -> &GuessHistory {
        &self.history
    }

    fn is_won(&self) -> bool {
        false
    }
}

// ─────────────────────────────────────────────────────────────
//  Won Phase
// ─────────────────────────────────────────────────────────────

/// Round whose target was found. Accepts no guesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundWon {
    range: MaxRange,
    target: u32,
    attempts: u32,
    history: GuessHistory,
}

impl RoundWon {
    /// The number that was found.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Starts a new round (consumes the finished one).
    #[instrument(skip(self, source))]
    pub fn restart(self, range: MaxRange, source: &mut impl TargetSource) -> RoundActive {
        RoundActive::start(range, source)
    }
}

impl RoundState for RoundWon {
    fn range(&self) -> MaxRange {
        self.range
    }

    fn attempts(&self) -> u32 {
        self.attempts
    }

    fn history(&self) -> &GuessHistory {
        &self.history
    }

    fn is_won(&self) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Types
// ─────────────────────────────────────────────────────────────

/// Round after a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Still guessing.
    Active(RoundActive),
    /// Target found.
    Won(RoundWon),
}

impl RoundResult {
    /// Borrows whichever phase this is.
    pub fn state(&self) -> &dyn RoundState {
        match self {
            RoundResult::Active(round) => round,
            RoundResult::Won(round) => round,
        }
    }
}

/// Everything a single accepted guess produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// The next round.
    pub result: RoundResult,
    /// The history entry that was recorded.
    pub entry: GuessEntry,
    /// Feedback derived from the entry.
    pub feedback: FeedbackDecision,
}
