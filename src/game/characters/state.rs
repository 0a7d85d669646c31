// Character movement state and combat overlays

/// Animation clip names
pub mod clips {
    pub const IDLE: &str = "idle";
    pub const WALK: &str = "walk";
    pub const RUN: &str = "run";
    pub const CROUCH: &str = "crouch";
    pub const SHOOT: &str = "shoot";
    pub const RELOAD: &str = "reload";

    /// Every clip a character may select
    pub const ALL: [&str; 6] = [IDLE, WALK, RUN, CROUCH, SHOOT, RELOAD];
}

/// How the character is moving. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    /// Standing still
    #[default]
    Idle,
    /// Moving at base speed
    Walking,
    /// Sprinting
    Running,
    /// Crouched, moving or not
    Crouching,
}

impl MovementState {
    /// Idle or Walking depending on speed
    pub fn from_speed(speed: f32, walk_threshold: f32) -> Self {
        if speed > walk_threshold {
            Self::Walking
        } else {
            Self::Idle
        }
    }

    pub fn is_crouching(&self) -> bool {
        matches!(self, Self::Crouching)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Running and crouching persist across moves; the rest follow speed
    pub fn is_stance(&self) -> bool {
        matches!(self, Self::Running | Self::Crouching)
    }
}

/// Movement state plus the combat flags layered on top of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterState {
    movement: MovementState,
    aiming: bool,
    shooting: bool,
    reloading: bool,
}

impl CharacterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movement(&self) -> MovementState {
        self.movement
    }

    pub fn is_running(&self) -> bool {
        self.movement.is_running()
    }

    pub fn is_crouching(&self) -> bool {
        self.movement.is_crouching()
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    pub fn is_shooting(&self) -> bool {
        self.shooting
    }

    pub fn is_reloading(&self) -> bool {
        self.reloading
    }

    /// Re-derive Idle/Walking after a move. Stances are kept.
    pub fn settle(&mut self, speed: f32, walk_threshold: f32) {
        if !self.movement.is_stance() {
            self.movement = MovementState::from_speed(speed, walk_threshold);
        }
    }

    /// Crouch, or stand back up into Idle/Walking
    pub fn toggle_crouch(&mut self, speed: f32, walk_threshold: f32) {
        self.movement = if self.movement.is_crouching() {
            MovementState::from_speed(speed, walk_threshold)
        } else {
            MovementState::Crouching
        };
    }

    /// Start sprinting unless crouched or aiming. Returns whether it took effect.
    pub fn start_sprint(&mut self) -> bool {
        if self.movement.is_crouching() || self.aiming {
            return false;
        }
        self.movement = MovementState::Running;
        true
    }

    /// Stop sprinting. Has no effect on other movement states.
    pub fn stop_sprint(&mut self, speed: f32, walk_threshold: f32) {
        if self.movement.is_running() {
            self.movement = MovementState::from_speed(speed, walk_threshold);
        }
    }

    /// Raise the weapon; aiming drops a sprint
    pub fn start_aim(&mut self, speed: f32, walk_threshold: f32) {
        self.aiming = true;
        self.stop_sprint(speed, walk_threshold);
    }

    pub fn stop_aim(&mut self) {
        self.aiming = false;
    }

    pub fn set_shooting(&mut self, shooting: bool) {
        self.shooting = shooting;
    }

    pub fn set_reloading(&mut self, reloading: bool) {
        self.reloading = reloading;
    }

    /// Select the clip for this state, first match wins:
    /// reload, shoot, crouch, run, walk (speed above threshold), idle
    pub fn animation_name(&self, speed: f32, walk_threshold: f32) -> &'static str {
        if self.reloading {
            return clips::RELOAD;
        }
        if self.shooting {
            return clips::SHOOT;
        }
        match self.movement {
            MovementState::Crouching => clips::CROUCH,
            MovementState::Running => clips::RUN,
            MovementState::Idle | MovementState::Walking if speed > walk_threshold => clips::WALK,
            MovementState::Idle | MovementState::Walking => clips::IDLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.1;

    fn state(movement: MovementState, shooting: bool, reloading: bool) -> CharacterState {
        CharacterState {
            movement,
            aiming: false,
            shooting,
            reloading,
        }
    }

    #[test]
    fn test_initial_state() {
        let s = CharacterState::new();
        assert_eq!(s.movement(), MovementState::Idle);
        assert!(!s.is_aiming() && !s.is_shooting() && !s.is_reloading());
        assert_eq!(s.animation_name(0.0, THRESHOLD), clips::IDLE);
    }

    #[test]
    fn test_animation_priority_table() {
        let movements = [
            MovementState::Idle,
            MovementState::Walking,
            MovementState::Running,
            MovementState::Crouching,
        ];

        for movement in movements {
            for shooting in [false, true] {
                for reloading in [false, true] {
                    for speed in [0.0, 0.1, 0.11, 7.5] {
                        let s = state(movement, shooting, reloading);
                        let expected = if reloading {
                            clips::RELOAD
                        } else if shooting {
                            clips::SHOOT
                        } else if movement == MovementState::Crouching {
                            clips::CROUCH
                        } else if movement == MovementState::Running {
                            clips::RUN
                        } else if speed > THRESHOLD {
                            clips::WALK
                        } else {
                            clips::IDLE
                        };
                        assert_eq!(s.animation_name(speed, THRESHOLD), expected);
                        assert!(clips::ALL.contains(&expected));
                    }
                }
            }
        }
    }

    #[test]
    fn test_walk_threshold_is_exclusive() {
        let s = CharacterState::new();
        assert_eq!(s.animation_name(0.1, THRESHOLD), clips::IDLE);
        assert_eq!(s.animation_name(0.1001, THRESHOLD), clips::WALK);
    }

    #[test]
    fn test_sprint_blocked_while_crouching() {
        let mut s = CharacterState::new();
        s.toggle_crouch(0.0, THRESHOLD);
        assert!(!s.start_sprint());
        assert!(!s.is_running());
        assert!(s.is_crouching());
    }

    #[test]
    fn test_sprint_blocked_while_aiming() {
        let mut s = CharacterState::new();
        s.start_aim(0.0, THRESHOLD);
        assert!(!s.start_sprint());
        assert!(!s.is_running());
    }

    #[test]
    fn test_aiming_drops_sprint() {
        let mut s = CharacterState::new();
        assert!(s.start_sprint());
        s.start_aim(5.0, THRESHOLD);
        assert!(s.is_aiming());
        assert_eq!(s.movement(), MovementState::Walking);
    }

    #[test]
    fn test_crouch_replaces_sprint() {
        let mut s = CharacterState::new();
        s.start_sprint();
        s.toggle_crouch(7.5, THRESHOLD);
        assert!(s.is_crouching());
        assert!(!s.is_running());

        s.toggle_crouch(7.5, THRESHOLD);
        assert_eq!(s.movement(), MovementState::Walking);
    }

    #[test]
    fn test_stop_sprint_keeps_crouch() {
        let mut s = CharacterState::new();
        s.toggle_crouch(0.0, THRESHOLD);
        s.stop_sprint(0.0, THRESHOLD);
        assert!(s.is_crouching());
    }

    #[test]
    fn test_settle_keeps_stances() {
        let mut s = CharacterState::new();
        s.settle(5.0, THRESHOLD);
        assert_eq!(s.movement(), MovementState::Walking);
        s.settle(0.0, THRESHOLD);
        assert_eq!(s.movement(), MovementState::Idle);

        s.start_sprint();
        s.settle(0.0, THRESHOLD);
        assert_eq!(s.movement(), MovementState::Running);
    }
}
