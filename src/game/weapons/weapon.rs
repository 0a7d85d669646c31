// Weapon state: ammo, firing and reloading

use log::debug;

use super::WeaponError;
use crate::core::math::approx_equal;

/// Tolerance for reload timers driven by accumulated fixed timesteps
const RELOAD_EPSILON: f32 = 1e-4;

/// Weapon properties
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponStats {
    /// Magazine capacity
    pub max_ammo: u32,
    /// Rounds currently loaded
    pub current_ammo: u32,
    /// Damage per shot
    pub damage: f32,
    /// Effective range in world units
    pub range: f32,
    /// Seconds a reload takes
    pub reload_time: f32,
    /// Shots per second
    pub fire_rate: f32,
}

impl WeaponStats {
    fn validate(&self) -> Result<(), WeaponError> {
        if self.max_ammo == 0 {
            return Err(WeaponError::EmptyMagazine);
        }
        if self.current_ammo > self.max_ammo {
            return Err(WeaponError::AmmoExceedsCapacity {
                current: self.current_ammo,
                max: self.max_ammo,
            });
        }

        let checks = [
            ("damage", self.damage, self.damage >= 0.0),
            ("range", self.range, self.range > 0.0),
            ("reload_time", self.reload_time, self.reload_time >= 0.0),
            ("fire_rate", self.fire_rate, self.fire_rate > 0.0),
        ];
        for (name, value, ok) in checks {
            if !value.is_finite() || !ok {
                return Err(WeaponError::InvalidStat { name, value });
            }
        }

        Ok(())
    }
}

/// A round that left the barrel. Hit resolution belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub damage: f32,
    pub range: f32,
    /// Game time the shot was fired at
    pub time: f32,
}

/// A weapon that can be picked up and fired
#[derive(Debug, Clone)]
pub struct Weapon {
    weapon_type: String,
    stats: WeaponStats,
    last_shot_time: Option<f32>,
    reloading: bool,
    reload_started_at: f32,
}

impl Weapon {
    /// Create a weapon, rejecting impossible stats
    pub fn new(weapon_type: &str, stats: WeaponStats) -> Result<Self, WeaponError> {
        stats.validate()?;
        Ok(Self::preset(weapon_type, stats))
    }

    /// Create a weapon from stats known to be valid
    pub(super) fn preset(weapon_type: &str, stats: WeaponStats) -> Self {
        debug_assert!(stats.validate().is_ok(), "invalid preset {weapon_type}");
        Self {
            weapon_type: weapon_type.to_string(),
            stats,
            last_shot_time: None,
            reloading: false,
            reload_started_at: 0.0,
        }
    }

    /// Whether a shot can be fired right now
    pub fn can_shoot(&self) -> bool {
        !self.reloading && self.stats.current_ammo > 0
    }

    /// Whether the magazine is empty
    pub fn needs_reload(&self) -> bool {
        self.stats.current_ammo == 0
    }

    /// Whether the magazine is full
    pub fn is_full(&self) -> bool {
        self.stats.current_ammo == self.stats.max_ammo
    }

    /// Fire one round if possible
    pub fn shoot(&mut self, now: f32) -> Option<Shot> {
        if !self.can_shoot() {
            return None;
        }

        self.stats.current_ammo -= 1;
        self.last_shot_time = Some(now);

        Some(Shot {
            damage: self.stats.damage,
            range: self.stats.range,
            time: now,
        })
    }

    /// Begin reloading. Returns false if a reload is already in progress.
    pub fn start_reload(&mut self, now: f32) -> bool {
        if self.reloading {
            return false;
        }

        self.reloading = true;
        self.reload_started_at = now;
        debug!("{} reload started at {:.3}s", self.weapon_type, now);
        true
    }

    /// Advance the reload timer. Returns true on the tick the reload finishes.
    pub fn update(&mut self, now: f32) -> bool {
        if !self.reloading {
            return false;
        }

        let elapsed = now - self.reload_started_at;
        if elapsed < self.stats.reload_time
            && !approx_equal(elapsed, self.stats.reload_time, RELOAD_EPSILON)
        {
            return false;
        }

        self.stats.current_ammo = self.stats.max_ammo;
        self.reloading = false;
        debug!("{} reloaded to {} rounds", self.weapon_type, self.stats.max_ammo);
        true
    }

    /// Fraction of the current reload completed (0 when not reloading)
    pub fn reload_progress(&self, now: f32) -> f32 {
        if !self.reloading {
            return 0.0;
        }
        if self.stats.reload_time <= 0.0 {
            return 1.0;
        }
        ((now - self.reload_started_at) / self.stats.reload_time).clamp(0.0, 1.0)
    }

    /// Seconds until the fire-rate interval since the last shot has passed.
    /// Shooting is never blocked by this; callers that want fire-rate gating
    /// check it before calling [`Weapon::shoot`].
    pub fn cooldown_remaining(&self, now: f32) -> f32 {
        match self.last_shot_time {
            Some(last) => (1.0 / self.stats.fire_rate - (now - last)).max(0.0),
            None => 0.0,
        }
    }

    /// Get the weapon type name
    pub fn weapon_type(&self) -> &str {
        &self.weapon_type
    }

    /// Get the weapon stats
    pub fn stats(&self) -> &WeaponStats {
        &self.stats
    }

    /// Rounds currently loaded
    pub fn current_ammo(&self) -> u32 {
        self.stats.current_ammo
    }

    /// Whether a reload is in progress
    pub fn is_reloading(&self) -> bool {
        self.reloading
    }

    /// Game time of the last successful shot
    pub fn last_shot_time(&self) -> Option<f32> {
        self.last_shot_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stats(max_ammo: u32, current_ammo: u32) -> WeaponStats {
        WeaponStats {
            max_ammo,
            current_ammo,
            damage: 10.0,
            range: 50.0,
            reload_time: 2.0,
            fire_rate: 4.0,
        }
    }

    fn weapon(max_ammo: u32, current_ammo: u32) -> Weapon {
        Weapon::new("test", stats(max_ammo, current_ammo)).unwrap()
    }

    #[test]
    fn test_new_rejects_overfull_magazine() {
        let err = Weapon::new("test", stats(5, 6)).unwrap_err();
        assert_eq!(err, WeaponError::AmmoExceedsCapacity { current: 6, max: 5 });
    }

    #[test]
    fn test_new_rejects_bad_stats() {
        assert_eq!(
            Weapon::new("test", stats(0, 0)).unwrap_err(),
            WeaponError::EmptyMagazine
        );

        let mut bad = stats(5, 5);
        bad.fire_rate = 0.0;
        assert!(matches!(
            Weapon::new("test", bad).unwrap_err(),
            WeaponError::InvalidStat { name: "fire_rate", .. }
        ));

        let mut bad = stats(5, 5);
        bad.range = f32::NAN;
        assert!(Weapon::new("test", bad).is_err());
    }

    #[test]
    fn test_shoot_decrements_by_one() {
        let mut w = weapon(10, 3);
        let shot = w.shoot(1.5).unwrap();
        assert_eq!(w.current_ammo(), 2);
        assert_eq!(shot.time, 1.5);
        assert_eq!(shot.damage, 10.0);
        assert_eq!(w.last_shot_time(), Some(1.5));
    }

    #[test]
    fn test_shoot_noop_when_empty() {
        let mut w = weapon(10, 0);
        assert!(!w.can_shoot());
        assert!(w.shoot(0.0).is_none());
        assert_eq!(w.current_ammo(), 0);
        assert_eq!(w.last_shot_time(), None);
    }

    #[test]
    fn test_shoot_noop_while_reloading() {
        let mut w = weapon(10, 4);
        w.start_reload(0.0);
        assert!(!w.can_shoot());
        assert!(w.shoot(0.5).is_none());
        assert_eq!(w.current_ammo(), 4);
    }

    #[test]
    fn test_needs_reload_ignores_reloading_flag() {
        let mut empty = weapon(10, 0);
        assert!(empty.needs_reload());
        empty.start_reload(0.0);
        assert!(empty.needs_reload());

        let mut loaded = weapon(10, 1);
        loaded.start_reload(0.0);
        assert!(!loaded.needs_reload());
    }

    #[test]
    fn test_repeated_shots_are_not_rate_gated() {
        let mut w = weapon(10, 10);
        for _ in 0..3 {
            assert!(w.shoot(0.0).is_some());
        }
        assert_eq!(w.current_ammo(), 7);
    }

    #[test]
    fn test_cooldown_remaining() {
        let mut w = weapon(10, 10);
        assert_eq!(w.cooldown_remaining(0.0), 0.0);

        w.shoot(1.0);
        assert_relative_eq!(w.cooldown_remaining(1.0), 0.25);
        assert_relative_eq!(w.cooldown_remaining(1.1), 0.15, epsilon = 1e-5);
        assert_eq!(w.cooldown_remaining(2.0), 0.0);
    }

    #[test]
    fn test_start_reload_only_once() {
        let mut w = weapon(10, 0);
        assert!(w.start_reload(1.0));
        assert!(!w.start_reload(1.5));
        assert!(w.is_reloading());
    }

    #[test]
    fn test_reload_completes_after_reload_time() {
        let mut w = weapon(10, 0);
        w.start_reload(1.0);

        assert!(!w.update(2.5));
        assert!(w.is_reloading());
        assert_eq!(w.current_ammo(), 0);

        assert!(w.update(3.0));
        assert!(!w.is_reloading());
        assert_eq!(w.current_ammo(), 10);
        assert!(w.can_shoot());

        // Finishing is reported once
        assert!(!w.update(4.0));
    }

    #[test]
    fn test_reload_progress() {
        let mut w = weapon(10, 0);
        assert_eq!(w.reload_progress(0.0), 0.0);

        w.start_reload(0.0);
        assert_relative_eq!(w.reload_progress(0.5), 0.25);
        assert_eq!(w.reload_progress(10.0), 1.0);
    }
}
