//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::strategy::Difficulty;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rounds per series (default: 5).
    /// Fixed for the lifetime of the engine.
    pub total_rounds: u32,

    /// Starting difficulty (default: medium).
    pub difficulty: Difficulty,

    /// Whether sound cues are played at startup (default: true).
    pub sound_enabled: bool,

    /// Random seed for the easy strategy.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Name recorded on leaderboard entries.
    pub player_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            difficulty: Difficulty::Medium,
            sound_enabled: true,
            seed: None,
            player_name: "Player".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn with_total_rounds(mut self, rounds: u32) -> Self {
        self.total_rounds = rounds;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.total_rounds == 0 {
            return Err(EngineError::InvalidConfig(
                "total_rounds must be at least 1".to_string(),
            ));
        }
        if self.player_name.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "player_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.total_rounds, 5);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert!(config.sound_enabled);
        assert_eq!(config.seed, None);
        assert_eq!(config.player_name, "Player");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_total_rounds(3)
            .with_difficulty(Difficulty::Hard)
            .with_sound(false)
            .with_seed(123);

        assert_eq!(config.total_rounds, 3);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert!(!config.sound_enabled);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate() {
        assert!(EngineConfig::default().with_total_rounds(0).validate().is_err());
        assert!(EngineConfig::default().with_player_name("  ").validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: EngineConfig = serde_json::from_str(r#"{"difficulty": "hard"}"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.total_rounds, 5);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
