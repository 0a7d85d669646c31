// Character system
//
// This module contains everything related to the playable soldier:
// - Character data structure and per-tick operations
// - Stats and construction config
// - Movement state and combat overlays
// - Weapon inventory
// - Animation clip library and playback

pub mod animation;
pub mod character;
pub mod command;
pub mod config;
pub mod inventory;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer, ClipLibrary};
pub use character::Character;
pub use command::Command;
pub use config::{CharacterConfig, MAX_WEAPONS, WALK_THRESHOLD};
pub use inventory::Inventory;
pub use state::{clips, CharacterState, MovementState};
pub use stats::CharacterStats;

/// Character construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CharacterError {
    #[error("Invalid character stat {name}: {value}")]
    InvalidStat { name: &'static str, value: f32 },

    #[error("Capsule of radius {radius} does not fit in height {height}")]
    InvalidCapsule { radius: f32, height: f32 },

    #[error("Character must have at least one weapon slot")]
    NoWeaponSlots,

    #[error("Animation setup failed: {0}")]
    Animation(#[from] AnimationError),
}

/// Clip library errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimationError {
    #[error("Clip registered twice: {0}")]
    DuplicateClip(String),

    #[error("Clip has no frames: {0}")]
    EmptyClip(String),

    #[error("Clip {name} has invalid frame duration {duration}")]
    InvalidFrameDuration { name: String, duration: f32 },
}

/// Inventory errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory full: {capacity} weapons carried")]
    Full { capacity: usize },

    #[error("No weapon in slot {0}")]
    EmptySlot(usize),
}
