//! Engine configuration.
//!
//! - `EngineConfig`: tube capacity and how difficulty scales with level
//! - `DifficultyTier`: a level range mapped to a color count
//! - `EconomyConfig`: coin prices and rewards used by `GameSession`
//!
//! Defaults reproduce the classic game: 4 balls per tube, 2 colors for
//! levels 1-3 rising to 6 colors from level 26.

use serde::{Deserialize, Serialize};

/// Balls per tube in the classic game.
pub const DEFAULT_CAPACITY: usize = 4;

/// Levels up to and including `max_level` use `colors` colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    pub max_level: u32,
    pub colors: u8,
}

impl DifficultyTier {
    #[must_use]
    pub const fn new(max_level: u32, colors: u8) -> Self {
        Self { max_level, colors }
    }
}

/// Coin prices, rewards and allowances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Coins a fresh (or reset) player starts with.
    pub starting_coins: u32,

    /// Undos per level that cost nothing.
    pub free_undos: u32,

    /// Price of an undo once the free ones are used up.
    pub undo_cost: u32,

    /// Price of the extra empty tube.
    pub extra_tube_cost: u32,

    /// First level where the extra tube can be bought.
    pub extra_tube_min_level: u32,

    /// Coins granted for clearing a level.
    pub win_reward: u32,

    /// Coins granted once per calendar day.
    pub daily_reward: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_coins: 100,
            free_undos: 5,
            undo_cost: 5,
            extra_tube_cost: 50,
            extra_tube_min_level: 3,
            win_reward: 25,
            daily_reward: 50,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Balls per tube.
    pub capacity: usize,

    /// Difficulty tiers, ordered by ascending `max_level`.
    pub tiers: Vec<DifficultyTier>,

    /// Color count for levels past the last tier.
    pub max_colors: u8,

    /// Levels with at least this many colors get two empty tubes, else one.
    pub empty_tubes_threshold: u8,

    /// Coin economy used by `GameSession`.
    pub economy: EconomyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            tiers: vec![
                DifficultyTier::new(3, 2),
                DifficultyTier::new(8, 3),
                DifficultyTier::new(15, 4),
                DifficultyTier::new(25, 5),
            ],
            max_colors: 6,
            empty_tubes_threshold: 4,
            economy: EconomyConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set the tube capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Tube capacity must be at least 1");
        self.capacity = capacity;
        self
    }

    /// Replace the difficulty tiers.
    #[must_use]
    pub fn with_tiers(mut self, tiers: Vec<DifficultyTier>, max_colors: u8) -> Self {
        self.tiers = tiers;
        self.max_colors = max_colors;
        self
    }

    /// Set the color count from which levels get two empty tubes.
    #[must_use]
    pub fn with_empty_tubes_threshold(mut self, colors: u8) -> Self {
        self.empty_tubes_threshold = colors;
        self
    }

    /// Replace the coin economy.
    #[must_use]
    pub fn with_economy(mut self, economy: EconomyConfig) -> Self {
        self.economy = economy;
        self
    }

    /// Number of colors dealt for a level. Level 0 counts as level 1.
    #[must_use]
    pub fn colors_for_level(&self, level: u32) -> u8 {
        let level = level.max(1);
        self.tiers
            .iter()
            .find(|tier| level <= tier.max_level)
            .map_or(self.max_colors, |tier| tier.colors)
    }

    /// Number of empty tubes dealt alongside `colors` full ones.
    #[must_use]
    pub fn empty_tubes_for(&self, colors: u8) -> usize {
        if colors >= self.empty_tubes_threshold {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let config = EngineConfig::default();

        let expected = [
            (1, 2),
            (3, 2),
            (4, 3),
            (8, 3),
            (9, 4),
            (15, 4),
            (16, 5),
            (25, 5),
            (26, 6),
            (1000, 6),
        ];
        for (level, colors) in expected {
            assert_eq!(config.colors_for_level(level), colors, "level {}", level);
        }
    }

    #[test]
    fn test_level_zero_counts_as_one() {
        let config = EngineConfig::default();
        assert_eq!(config.colors_for_level(0), 2);
    }

    #[test]
    fn test_empty_tubes() {
        let config = EngineConfig::default();
        assert_eq!(config.empty_tubes_for(2), 1);
        assert_eq!(config.empty_tubes_for(3), 1);
        assert_eq!(config.empty_tubes_for(4), 2);
        assert_eq!(config.empty_tubes_for(6), 2);
    }

    #[test]
    fn test_default_economy() {
        let economy = EconomyConfig::default();
        assert_eq!(economy.starting_coins, 100);
        assert_eq!(economy.free_undos, 5);
        assert_eq!(economy.undo_cost, 5);
        assert_eq!(economy.extra_tube_cost, 50);
        assert_eq!(economy.extra_tube_min_level, 3);
        assert_eq!(economy.win_reward, 25);
        assert_eq!(economy.daily_reward, 50);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_capacity(3)
            .with_tiers(vec![DifficultyTier::new(1, 1)], 2)
            .with_empty_tubes_threshold(2);

        assert_eq!(config.capacity, 3);
        assert_eq!(config.colors_for_level(1), 1);
        assert_eq!(config.colors_for_level(2), 2);
        assert_eq!(config.empty_tubes_for(1), 1);
        assert_eq!(config.empty_tubes_for(2), 2);
    }

    #[test]
    #[should_panic(expected = "Tube capacity must be at least 1")]
    fn test_zero_capacity() {
        let _ = EngineConfig::default().with_capacity(0);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
