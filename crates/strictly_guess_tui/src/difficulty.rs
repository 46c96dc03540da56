//! Difficulty presets: the size of the secret number's range.

use serde::{Deserialize, Serialize};
use strictly_guess::MaxRange;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A preset range for the secret number.
///
/// Defaults to [`Difficulty::Easy`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Numbers 1 to 10.
    #[default]
    Easy,
    /// Numbers 1 to 100.
    Medium,
    /// Numbers 1 to 1000.
    Hard,
}

impl Difficulty {
    /// Upper bound of the preset.
    pub fn max(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 100,
            Self::Hard => 1000,
        }
    }

    /// The preset as a range.
    pub fn range(self) -> MaxRange {
        MaxRange::at_least_one(self.max())
    }

    /// Returns the display label, e.g. `Easy (1-10)`.
    #[instrument]
    pub fn label(self) -> String {
        format!("{} ({})", self, self.range())
    }

    /// Finds the preset with the given upper bound.
    pub fn from_max(max: u32) -> Option<Self> {
        Self::iter().find(|d| d.max() == max)
    }

    /// The next preset, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// The previous preset, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Difficulty::Easy.label(), "Easy (1-10)");
        assert_eq!(Difficulty::Medium.label(), "Medium (1-100)");
        assert_eq!(Difficulty::Hard.label(), "Hard (1-1000)");
    }

    #[test]
    fn test_from_max() {
        assert_eq!(Difficulty::from_max(100), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_max(50), None);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Hard);
        for d in Difficulty::iter() {
            assert_eq!(d.next().previous(), d);
        }
    }
}
