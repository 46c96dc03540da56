//! Proximity scoring: how close a guess is to the target.
//!
//! Scoring is a pure function of `(guess, target, range)`. Range membership
//! is the input boundary's job; the scorer only measures distance.

use super::types::{Direction, MaxRange, Proximity};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of scoring a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Closeness in `[0, 100]`.
    pub proximity: Proximity,
    /// Comparison against the target.
    pub direction: Direction,
}

/// Scores `guess` against `target`.
///
/// `proximity = 100 - min(100, distance / max * 100)`, so an exact match
/// scores 100 and the score falls linearly with distance.
#[instrument(level = "trace")]
pub fn score(guess: u32, target: u32, range: MaxRange) -> Score {
    let distance = guess.abs_diff(target);
    let penalty = (f64::from(distance) * 100.0 / f64::from(range.get())).min(100.0);

    Score {
        proximity: Proximity::new(100.0 - penalty),
        direction: Direction::of(guess, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(max: u32) -> MaxRange {
        MaxRange::new(max).unwrap()
    }

    #[test]
    fn test_exact_match_scores_100() {
        let s = score(5, 5, range(10));
        assert_eq!(s.proximity, Proximity::EXACT);
        assert_eq!(s.direction, Direction::Correct);
    }

    #[test]
    fn test_medium_range_example() {
        let s = score(60, 50, range(100));
        assert_eq!(s.proximity.get(), 90.0);
        assert_eq!(s.direction, Direction::TooHigh);
    }

    #[test]
    fn test_hard_range_far_guess() {
        let s = score(1, 500, range(1000));
        assert!((s.proximity.get() - 50.1).abs() < 1e-9);
        assert_eq!(s.direction, Direction::TooLow);
    }

    #[test]
    fn test_single_value_range() {
        let s = score(1, 1, range(1));
        assert!(s.proximity.is_exact());
    }

    #[test]
    fn test_distance_beyond_range_clamps_to_zero() {
        // Out-of-range input is a caller error, but the score still stays in bounds.
        let s = score(50, 1, range(10));
        assert_eq!(s.proximity.get(), 0.0);
    }
}
