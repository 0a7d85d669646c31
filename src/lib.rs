// Playable military character: movement, weapons and animation selection

pub mod core;
pub mod engine;
pub mod game;

pub use game::characters::{Character, CharacterConfig, Command};
pub use game::weapons::{Weapon, WeaponStats};
