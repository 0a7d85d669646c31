// Engine services the character layer talks to: game clock, physics

pub mod clock;
pub mod physics;
