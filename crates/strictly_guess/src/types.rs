//! Core domain types for the guessing game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Upper bound of the secret number's range. The range is always `[1, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaxRange(u32);

impl MaxRange {
    /// Creates a range bound, rejecting zero.
    #[instrument]
    pub fn new(max: u32) -> Result<Self, RangeError> {
        if max == 0 {
            return Err(RangeError::Zero);
        }
        Ok(Self(max))
    }

    /// Creates a range bound, treating zero as one.
    pub const fn at_least_one(max: u32) -> Self {
        if max == 0 { Self(1) } else { Self(max) }
    }

    /// Returns the inclusive upper bound.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Checks whether `value` lies in `[1, max]`.
    pub fn contains(self, value: u32) -> bool {
        (1..=self.0).contains(&value)
    }
}

impl TryFrom<u32> for MaxRange {
    type Error = RangeError;

    fn try_from(max: u32) -> Result<Self, Self::Error> {
        Self::new(max)
    }
}

impl From<MaxRange> for u32 {
    fn from(range: MaxRange) -> Self {
        range.0
    }
}

impl std::fmt::Display for MaxRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "1-{}", self.0)
    }
}

/// Error building a [`MaxRange`] or a [`Guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RangeError {
    /// The range must contain at least one number.
    #[display("Range must be at least 1")]
    Zero,

    /// The value falls outside `[1, max]`.
    #[display("{} is not between 1 and {}", value, max)]
    OutOfRange {
        /// The rejected value.
        value: u32,
        /// The range bound it was checked against.
        max: u32,
    },
}

impl std::error::Error for RangeError {}

/// A guess that has been checked against the session's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    value: u32,
}

impl Guess {
    /// Validates `value` against `range`.
    #[instrument]
    pub fn new(value: u32, range: MaxRange) -> Result<Self, RangeError> {
        if !range.contains(value) {
            return Err(RangeError::OutOfRange {
                value,
                max: range.get(),
            });
        }
        Ok(Self { value })
    }

    /// Returns the guessed number.
    pub fn value(self) -> u32 {
        self.value
    }
}

/// Closeness of a guess to the target, from 0 (coldest) to 100 (exact).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Proximity(f64);

impl Proximity {
    /// The score of an exact match.
    pub const EXACT: Proximity = Proximity(100.0);

    /// Creates a proximity, clamping into `[0, 100]`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the raw percentage.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the proximity as a fraction in `[0, 1]`.
    pub fn ratio(self) -> f64 {
        self.0 / 100.0
    }

    /// True only for a perfect score.
    pub fn is_exact(self) -> bool {
        self.0 >= 100.0
    }
}

impl std::fmt::Display for Proximity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// How a guess compares to the target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// The guess is larger than the target.
    TooHigh,
    /// The guess is smaller than the target.
    TooLow,
    /// The guess is the target.
    Correct,
}

impl Direction {
    /// Compares a guess against the target.
    pub fn of(guess: u32, target: u32) -> Self {
        match guess.cmp(&target) {
            std::cmp::Ordering::Equal => Direction::Correct,
            std::cmp::Ordering::Greater => Direction::TooHigh,
            std::cmp::Ordering::Less => Direction::TooLow,
        }
    }

    /// Returns the text shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Direction::TooHigh => "Too High",
            Direction::TooLow => "Too Low",
            Direction::Correct => "Correct!",
        }
    }

    /// True when the guess hit the target.
    pub fn is_correct(self) -> bool {
        matches!(self, Direction::Correct)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One accepted guess, as recorded in the history.
///
/// Entries are created once per accepted guess and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuessEntry {
    value: u32,
    proximity: Proximity,
    direction: Direction,
}

impl GuessEntry {
    /// Creates an entry.
    pub fn new(value: u32, proximity: Proximity, direction: Direction) -> Self {
        Self {
            value,
            proximity,
            direction,
        }
    }

    /// The submitted guess.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// How close the guess was.
    pub fn proximity(&self) -> Proximity {
        self.proximity
    }

    /// Whether the guess was high, low or correct.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_range_rejected() {
        assert_eq!(MaxRange::new(0), Err(RangeError::Zero));
        assert!(MaxRange::new(1).is_ok());
    }

    #[test]
    fn test_range_membership() {
        let range = MaxRange::new(10).unwrap();
        assert!(!range.contains(0));
        assert!(range.contains(1));
        assert!(range.contains(10));
        assert!(!range.contains(11));
    }

    #[test]
    fn test_guess_out_of_range() {
        let range = MaxRange::new(10).unwrap();
        assert!(matches!(
            Guess::new(11, range),
            Err(RangeError::OutOfRange { value: 11, max: 10 })
        ));
        assert_eq!(Guess::new(7, range).unwrap().value(), 7);
    }

    #[test]
    fn test_proximity_clamps() {
        assert_eq!(Proximity::new(150.0).get(), 100.0);
        assert_eq!(Proximity::new(-3.0).get(), 0.0);
        assert_eq!(Proximity::new(f64::NAN).get(), 0.0);
        assert!(Proximity::EXACT.is_exact());
    }

    #[test]
    fn test_direction_of() {
        assert_eq!(Direction::of(5, 5), Direction::Correct);
        assert_eq!(Direction::of(6, 5), Direction::TooHigh);
        assert_eq!(Direction::of(4, 5), Direction::TooLow);
    }

    #[test]
    fn test_max_range_serde_rejects_zero() {
        assert!(serde_json::from_str::<MaxRange>("0").is_err());
        assert_eq!(
            serde_json::from_str::<MaxRange>("100").unwrap(),
            MaxRange::new(100).unwrap()
        );
    }
}
