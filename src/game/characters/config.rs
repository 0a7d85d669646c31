// Character construction settings

use super::stats::CharacterStats;
use super::CharacterError;

/// Default number of weapons a character can carry
pub const MAX_WEAPONS: usize = 3;

/// Speed above which a moving character plays the walk animation
pub const WALK_THRESHOLD: f32 = 0.1;

/// Everything needed to build a character besides its collaborators
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterConfig {
    pub stats: CharacterStats,
    /// Inventory capacity
    pub max_weapons: usize,
    /// Collision capsule radius
    pub capsule_radius: f32,
    /// Collision capsule total height, caps included
    pub capsule_height: f32,
    /// Body mass in kilograms
    pub mass: f32,
    /// Speed above which the character counts as walking
    pub walk_threshold: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            stats: CharacterStats::standard(),
            max_weapons: MAX_WEAPONS,
            capsule_radius: 0.5,
            capsule_height: 2.0,
            mass: 80.0,
            walk_threshold: WALK_THRESHOLD,
        }
    }
}

impl CharacterConfig {
    /// Replace the stats
    pub fn with_stats(mut self, stats: CharacterStats) -> Self {
        self.stats = stats;
        self
    }

    /// Replace the inventory capacity
    pub fn with_max_weapons(mut self, max_weapons: usize) -> Self {
        self.max_weapons = max_weapons;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), CharacterError> {
        if self.max_weapons == 0 {
            return Err(CharacterError::NoWeaponSlots);
        }

        let physical = [
            ("capsule_radius", self.capsule_radius),
            ("capsule_height", self.capsule_height),
            ("mass", self.mass),
        ];
        for (name, value) in self.stats.named().into_iter().chain(physical) {
            if !value.is_finite() || value <= 0.0 {
                return Err(CharacterError::InvalidStat { name, value });
            }
        }

        if self.capsule_height < self.capsule_radius * 2.0 {
            return Err(CharacterError::InvalidCapsule {
                radius: self.capsule_radius,
                height: self.capsule_height,
            });
        }
        if !self.walk_threshold.is_finite() || self.walk_threshold < 0.0 {
            return Err(CharacterError::InvalidStat {
                name: "walk_threshold",
                value: self.walk_threshold,
            });
        }

        Ok(())
    }
}
