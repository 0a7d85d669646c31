// Weapon system
//
// Weapons own their ammo and fire/reload state. Time always comes in from
// the caller's game clock, so the same weapon behaves identically no matter
// who holds it.

pub mod presets;
pub mod weapon;

pub use weapon::{Shot, Weapon, WeaponStats};

/// Weapon construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeaponError {
    #[error("Magazine holds {max} rounds, cannot load {current}")]
    AmmoExceedsCapacity { current: u32, max: u32 },

    #[error("Magazine capacity must be at least one round")]
    EmptyMagazine,

    #[error("Invalid weapon stat {name}: {value}")]
    InvalidStat { name: &'static str, value: f32 },
}
