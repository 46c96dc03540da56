//! Effective game settings: command-line flags layered over the config file.

use crate::cli::GameArgs;
use crate::config::AppConfig;
use crate::difficulty::Difficulty;
use derive_getters::Getters;
use strictly_guess::{MaxRange, SeededSource, TargetSource, ThreadRngSource};
use tracing::{debug, instrument};

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSettings {
    /// Upper bound of the secret number.
    range: MaxRange,
    /// Seed for reproducible targets.
    seed: Option<u64>,
}

impl GameSettings {
    /// Resolves settings. A flag beats the config file, and an explicit
    /// range beats any difficulty from the same layer.
    #[instrument(skip(config))]
    pub fn resolve(config: &AppConfig, args: &GameArgs) -> Self {
        let range = match (args.range, args.difficulty, *config.range()) {
            (Some(max), _, _) => MaxRange::at_least_one(max),
            (None, Some(d), _) => d.range(),
            (None, None, Some(max)) => MaxRange::at_least_one(max),
            (None, None, None) => config.difficulty().range(),
        };
        let seed = args.seed.or(*config.seed());
        debug!(%range, ?seed, "Resolved game settings");
        Self { range, seed }
    }

    /// Preset matching the range, if any.
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_max(self.range.get())
    }

    /// Target source for these settings.
    pub fn source(&self) -> Box<dyn TargetSource + Send> {
        match self.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(ThreadRngSource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_easy() {
        let settings = GameSettings::resolve(&AppConfig::default(), &GameArgs::default());
        assert_eq!(settings.range().get(), 10);
        assert_eq!(settings.difficulty(), Some(Difficulty::Easy));
        assert_eq!(*settings.seed(), None);
    }

    #[test]
    fn test_flag_beats_config() {
        let config = AppConfig::default().with_range(500).with_seed(1);
        let args = GameArgs {
            difficulty: Some(Difficulty::Medium),
            range: None,
            seed: Some(9),
        };
        let settings = GameSettings::resolve(&config, &args);
        assert_eq!(settings.range().get(), 100);
        assert_eq!(*settings.seed(), Some(9));
    }

    #[test]
    fn test_config_range_beats_config_difficulty() {
        let config = AppConfig::default()
            .with_difficulty(Difficulty::Hard)
            .with_range(42);
        let settings = GameSettings::resolve(&config, &GameArgs::default());
        assert_eq!(settings.range().get(), 42);
        assert_eq!(settings.difficulty(), None);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let config = AppConfig::default().with_seed(7);
        let settings = GameSettings::resolve(&config, &GameArgs::default());
        let range = *settings.range();
        assert_eq!(settings.source().pick(range), settings.source().pick(range));
    }
}
