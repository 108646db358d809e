//! Game configuration.
//!
//! `GameConfig::default()` reproduces the standard game: 21-card piles,
//! 3-card opening hands, one center slot, a 2 second opponent reaction
//! interval and permissive plays.

use serde::{Deserialize, Serialize};

use crate::cards::DEFAULT_SPLASH_COUNT;

/// Cards in each player's pile at the start of a game.
pub const DEFAULT_PILE_SIZE: usize = 21;

/// Cards drawn into each hand at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 3;

/// Number of open center cards.
pub const DEFAULT_CENTER_SLOTS: usize = 1;

/// Minimum time between two opponent decisions.
pub const DEFAULT_AI_REACTION_MS: u64 = 2000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards generated into each pile (before the opening draw).
    pub pile_size: usize,

    /// Opening hand size, drawn from the pile.
    pub hand_size: usize,

    /// Number of center slots (at least 1).
    pub center_slots: usize,

    /// Opponent reaction interval in milliseconds.
    pub ai_reaction_ms: u64,

    /// Splashes painted on each generated card.
    pub splash_count: usize,

    /// Reject plays whose card does not match the target center.
    ///
    /// Off by default: the engine trusts its caller to only offer legal
    /// plays.
    pub strict_plays: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pile_size: DEFAULT_PILE_SIZE,
            hand_size: DEFAULT_HAND_SIZE,
            center_slots: DEFAULT_CENTER_SLOTS,
            ai_reaction_ms: DEFAULT_AI_REACTION_MS,
            splash_count: DEFAULT_SPLASH_COUNT,
            strict_plays: false,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pile_size(mut self, size: usize) -> Self {
        self.pile_size = size;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the number of center slots.
    #[must_use]
    pub fn with_center_slots(mut self, slots: usize) -> Self {
        assert!(slots > 0, "Must have at least 1 center slot");
        self.center_slots = slots;
        self
    }

    #[must_use]
    pub fn with_ai_reaction_ms(mut self, ms: u64) -> Self {
        self.ai_reaction_ms = ms;
        self
    }

    #[must_use]
    pub fn with_splash_count(mut self, count: usize) -> Self {
        self.splash_count = count;
        self
    }

    /// Reject non-matching plays with `PlayError::IllegalMove`.
    #[must_use]
    pub fn with_strict_plays(mut self) -> Self {
        self.strict_plays = true;
        self
    }

    /// Check a configuration assembled field by field, e.g. from user
    /// input, before any builder asserts can fire.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.center_slots == 0 {
            return Err(ConfigError::NoCenterSlots);
        }
        Ok(())
    }
}

/// A configuration no game can be dealt from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    NoCenterSlots,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoCenterSlots => f.write_str("must have at least 1 center slot"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.pile_size, 21);
        assert_eq!(config.hand_size, 3);
        assert_eq!(config.center_slots, 1);
        assert_eq!(config.ai_reaction_ms, 2000);
        assert_eq!(config.splash_count, 5);
        assert!(!config.strict_plays);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_pile_size(10)
            .with_hand_size(4)
            .with_center_slots(3)
            .with_ai_reaction_ms(500)
            .with_splash_count(0)
            .with_strict_plays();

        assert_eq!(config.pile_size, 10);
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.center_slots, 3);
        assert_eq!(config.ai_reaction_ms, 500);
        assert_eq!(config.splash_count, 0);
        assert!(config.strict_plays);
    }

    #[test]
    fn test_validate() {
        assert_eq!(GameConfig::default().validate(), Ok(()));

        let config = GameConfig {
            center_slots: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoCenterSlots));
        assert_eq!(
            ConfigError::NoCenterSlots.to_string(),
            "must have at least 1 center slot"
        );
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 center slot")]
    fn test_zero_center_slots() {
        let _ = GameConfig::new().with_center_slots(0);
    }
}
