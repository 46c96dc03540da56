//! Guess history, newest first.

use super::types::{GuessEntry, Proximity};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{instrument, trace};

/// Append-only log of accepted guesses.
///
/// Entries are never removed one at a time; the whole log is cleared when a
/// new game starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuessHistory {
    entries: VecDeque<GuessEntry>,
}

impl GuessHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a guess. It becomes the first entry.
    #[instrument(level = "trace", skip(self))]
    pub fn append(&mut self, entry: GuessEntry) {
        self.entries.push_front(entry);
        trace!(len = self.entries.len(), "Guess recorded");
    }

    /// Iterates over all entries, most recent first.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &GuessEntry> + DoubleEndedIterator {
        self.entries.iter()
    }

    /// Returns the most recent entry.
    pub fn latest(&self) -> Option<&GuessEntry> {
        self.entries.front()
    }

    /// Number of recorded guesses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first guess.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a GuessHistory {
    type Item = &'a GuessEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, GuessEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Coarse temperature of a history entry, used to colour the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum HeatBand {
    /// The guess was correct.
    Found,
    /// Proximity above 75.
    Scorching,
    /// Proximity above 50.
    Warm,
    /// Proximity above 25.
    Tepid,
    /// Everything else.
    Cold,
}

impl HeatBand {
    /// Classifies an entry.
    pub fn of(entry: &GuessEntry) -> Self {
        if entry.direction().is_correct() {
            return HeatBand::Found;
        }
        Self::of_proximity(entry.proximity())
    }

    /// Classifies a miss by proximity alone.
    pub fn of_proximity(proximity: Proximity) -> Self {
        match proximity.get() {
            p if p > 75.0 => HeatBand::Scorching,
            p if p > 50.0 => HeatBand::Warm,
            p if p > 25.0 => HeatBand::Tepid,
            _ => HeatBand::Cold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn entry(value: u32, proximity: f64, direction: Direction) -> GuessEntry {
        GuessEntry::new(value, Proximity::new(proximity), direction)
    }

    #[test]
    fn test_newest_first() {
        let mut history = GuessHistory::new();
        history.append(entry(3, 40.0, Direction::TooLow));
        history.append(entry(8, 70.0, Direction::TooHigh));

        let values: Vec<u32> = history.all().map(|e| e.value()).collect();
        assert_eq!(values, [8, 3]);
        assert_eq!(history.latest().map(|e| e.value()), Some(8));
    }

    #[test]
    fn test_clear_empties_log() {
        let mut history = GuessHistory::new();
        history.append(entry(3, 40.0, Direction::TooLow));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }

    #[test]
    fn test_heat_bands() {
        assert_eq!(HeatBand::of(&entry(5, 100.0, Direction::Correct)), HeatBand::Found);
        assert_eq!(HeatBand::of(&entry(5, 80.0, Direction::TooLow)), HeatBand::Scorching);
        assert_eq!(HeatBand::of(&entry(5, 75.0, Direction::TooLow)), HeatBand::Warm);
        assert_eq!(HeatBand::of(&entry(5, 50.0, Direction::TooLow)), HeatBand::Tepid);
        assert_eq!(HeatBand::of(&entry(5, 25.0, Direction::TooLow)), HeatBand::Cold);
    }
}
