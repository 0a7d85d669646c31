// Character entity: movement, combat and animation selection

use std::sync::Arc;

use glam::Vec3;
use log::{debug, warn};

use crate::core::math;
use crate::engine::clock::{GameClock, SimClock};
use crate::engine::physics::{CapsuleBody, CollisionBody};
use crate::game::weapons::{Shot, Weapon};

use super::animation::{AnimationPlayer, ClipLibrary};
use super::config::CharacterConfig;
use super::inventory::Inventory;
use super::state::{clips, CharacterState, MovementState};
use super::stats::CharacterStats;
use super::{CharacterError, InventoryError};

/// A playable soldier
#[derive(Debug)]
pub struct Character {
    // Transform
    /// World position of the character's feet
    position: Vec3,
    /// Euler angles in degrees; `y` is yaw
    rotation: Vec3,
    /// Velocity set by the last move
    velocity: Vec3,

    /// Stats, capacity and physics settings
    config: CharacterConfig,
    /// Movement state and combat overlays
    state: CharacterState,
    /// Carried weapons
    inventory: Inventory,
    /// Current clip playback
    animation: AnimationPlayer,

    /// Collision shape driven by this character
    physics: Box<dyn CollisionBody>,
    /// Game time used to stamp shots and reloads
    clock: SimClock,
}

impl Character {
    /// Create a character and configure its collision body
    pub fn new(
        position: Vec3,
        config: CharacterConfig,
        mut physics: Box<dyn CollisionBody>,
        clips: Arc<ClipLibrary>,
    ) -> Result<Self, CharacterError> {
        config.validate()?;

        physics.set_collision_capsule(config.capsule_radius, config.capsule_height);
        physics.set_mass(config.mass);

        let mut character = Self {
            position,
            rotation: Vec3::ZERO,
            velocity: Vec3::ZERO,
            inventory: Inventory::new(config.max_weapons),
            config,
            state: CharacterState::new(),
            animation: AnimationPlayer::new(clips),
            physics,
            clock: SimClock::new(),
        };
        character.update_animation();

        Ok(character)
    }

    /// Create a character with default config, a rapier capsule and the
    /// standard clip library
    pub fn spawn(position: Vec3) -> Result<Self, CharacterError> {
        Self::new(
            position,
            CharacterConfig::default(),
            Box::new(CapsuleBody::new(position)),
            ClipLibrary::standard()?,
        )
    }

    /// Move along `direction` for `dt` seconds.
    ///
    /// A zero-length or non-finite direction means standing still.
    pub fn move_in(&mut self, direction: Vec3, dt: f32) {
        let heading = match math::direction(direction) {
            Some(heading) => heading,
            None => {
                if !direction.is_finite() {
                    warn!("Ignoring non-finite move direction {direction:?}");
                }
                Vec3::ZERO
            }
        };

        self.velocity = heading * self.effective_speed();
        if dt.is_finite() && dt > 0.0 {
            self.position += self.velocity * dt;
        }

        self.state
            .settle(self.velocity.length(), self.config.walk_threshold);
        self.update_animation();

        self.position = self.physics.update_collision(self.position);
    }

    /// Turn by `yaw_delta` (scaled by rotation speed) over `dt` seconds
    pub fn rotate(&mut self, yaw_delta: f32, dt: f32) {
        let yaw = self.rotation.y + yaw_delta * self.config.stats.rotation_speed * dt;
        if yaw.is_finite() {
            self.rotation.y = math::wrap_degrees(yaw);
        }
    }

    /// Pick up a weapon. Returns false when the inventory is full.
    pub fn pickup_weapon(&mut self, weapon: Weapon) -> bool {
        self.try_pickup_weapon(weapon).is_ok()
    }

    /// Pick up a weapon and return the slot it went into
    pub fn try_pickup_weapon(&mut self, weapon: Weapon) -> Result<usize, InventoryError> {
        let name = weapon.weapon_type().to_string();
        let slot = self.inventory.try_add(weapon)?;
        debug!("Picked up {name} into slot {slot}");
        Ok(slot)
    }

    /// Equip the weapon in `slot`. Refused mid-reload.
    pub fn switch_weapon(&mut self, slot: usize) -> bool {
        if self.state.is_reloading() {
            return false;
        }
        match self.inventory.equip(slot) {
            Ok(()) => {
                debug!("Switched to slot {slot}");
                true
            }
            Err(err) => {
                debug!("Weapon switch refused: {err}");
                false
            }
        }
    }

    /// Fire the equipped weapon, or start reloading it if it is empty
    pub fn shoot(&mut self) -> Option<Shot> {
        if self.state.is_reloading() {
            return None;
        }

        let now = self.clock.now();
        let weapon = self.inventory.equipped_mut()?;

        if weapon.can_shoot() {
            let shot = weapon.shoot(now);
            self.state.set_shooting(true);
            self.play_animation(clips::SHOOT);
            shot
        } else {
            if weapon.needs_reload() {
                self.reload();
            }
            None
        }
    }

    /// Start reloading the equipped weapon
    pub fn reload(&mut self) {
        if self.state.is_reloading() {
            return;
        }

        let now = self.clock.now();
        let Some(weapon) = self.inventory.equipped_mut() else {
            return;
        };

        weapon.start_reload(now);
        self.state.set_reloading(true);
        self.play_animation(clips::RELOAD);
    }

    /// Crouch or stand up
    pub fn toggle_crouch(&mut self) {
        self.state
            .toggle_crouch(self.velocity.length(), self.config.walk_threshold);
        self.update_animation();
    }

    /// Start sprinting. Ignored while crouched or aiming.
    pub fn start_sprint(&mut self) {
        if self.state.start_sprint() {
            self.update_animation();
        }
    }

    /// Stop sprinting
    pub fn stop_sprint(&mut self) {
        self.state
            .stop_sprint(self.velocity.length(), self.config.walk_threshold);
        self.update_animation();
    }

    /// Raise the weapon. Aiming cancels a sprint.
    pub fn start_aim(&mut self) {
        self.state
            .start_aim(self.velocity.length(), self.config.walk_threshold);
        self.update_animation();
    }

    /// Lower the weapon
    pub fn stop_aim(&mut self) {
        self.state.stop_aim();
    }

    /// Advance game time, animation playback and the equipped weapon's reload
    pub fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.animation.update(dt);

        let now = self.clock.now();
        let mut changed = false;

        if self.state.is_reloading() {
            let finished = self.inventory.equipped_mut().map_or(true, |weapon| {
                weapon.update(now);
                !weapon.is_reloading()
            });
            if finished {
                self.state.set_reloading(false);
                changed = true;
            }
        }

        if self.state.is_shooting()
            && (self.animation.current_animation() != Some(clips::SHOOT)
                || self.animation.is_finished())
        {
            self.state.set_shooting(false);
            changed = true;
        }

        if changed {
            self.update_animation();
        }
    }

    /// Clip name the current state calls for
    pub fn determine_animation(&self) -> &'static str {
        self.state
            .animation_name(self.velocity.length(), self.config.walk_threshold)
    }

    /// Play the clip the current state calls for, unless it is already playing
    pub fn update_animation(&mut self) {
        let name = self.determine_animation();
        self.animation.play_if_changed(name);
    }

    /// Restart `name` from its first frame. Unknown names are ignored.
    pub fn play_animation(&mut self, name: &str) -> bool {
        self.animation.play(name)
    }

    fn effective_speed(&self) -> f32 {
        let stats = &self.config.stats;
        match self.state.movement() {
            MovementState::Crouching => stats.speed * stats.crouch_speed_multiplier,
            MovementState::Running => stats.speed * stats.sprint_speed_multiplier,
            MovementState::Idle | MovementState::Walking => stats.speed,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Heading in degrees, within [0, 360)
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.config.stats
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn current_weapon(&self) -> Option<&Weapon> {
        self.inventory.equipped()
    }

    pub fn current_animation(&self) -> Option<&str> {
        self.animation.current_animation()
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }

    /// Game time seen by this character
    pub fn now(&self) -> f32 {
        self.clock.now()
    }
}
