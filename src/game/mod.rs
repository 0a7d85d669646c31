// Gameplay objects

pub mod characters;
pub mod weapons;
