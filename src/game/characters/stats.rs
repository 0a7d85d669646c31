// Character stats - constant for the lifetime of a character

/// Base character properties
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Condition
    /// Health points
    pub health: f32,
    /// Stamina points
    pub stamina: f32,

    // Movement
    /// Base movement speed (units/second)
    pub speed: f32,
    /// Turn rate (degrees/second per unit of yaw input)
    pub rotation_speed: f32,
    /// Speed multiplier while crouching
    pub crouch_speed_multiplier: f32,
    /// Speed multiplier while sprinting
    pub sprint_speed_multiplier: f32,
}

/// Standard infantry stats
pub const BASE_STATS: CharacterStats = CharacterStats {
    health: 100.0,
    stamina: 100.0,

    speed: 5.0,
    rotation_speed: 180.0,
    crouch_speed_multiplier: 0.5,
    sprint_speed_multiplier: 1.5,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl CharacterStats {
    /// Get the standard character stats
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Iterate over every stat by name, for validation and logging
    pub fn named(&self) -> [(&'static str, f32); 6] {
        [
            ("health", self.health),
            ("stamina", self.stamina),
            ("speed", self.speed),
            ("rotation_speed", self.rotation_speed),
            ("crouch_speed_multiplier", self.crouch_speed_multiplier),
            ("sprint_speed_multiplier", self.sprint_speed_multiplier),
        ]
    }
}
