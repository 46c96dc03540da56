//! Session phases.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Accepting guesses.
    Active,
    /// The target was found. Terminal until the next start.
    Won,
}

impl Phase {
    /// True once the target has been found.
    pub fn is_won(self) -> bool {
        matches!(self, Phase::Won)
    }
}
