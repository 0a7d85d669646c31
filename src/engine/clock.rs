// Simulation clock
//
// Game time advances only when the host steps the simulation, so weapons
// stamp shots and reloads with deterministic timestamps instead of wall time.

/// Target simulation rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// A source of game time in seconds
pub trait GameClock {
    /// Current game time in seconds
    fn now(&self) -> f32;
}

/// Clock driven by the simulation's own tick deltas
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    /// Total simulated time in seconds
    elapsed: f32,

    /// Number of ticks applied
    tick_count: u64,
}

impl SimClock {
    /// Create a clock starting at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at a given time
    pub fn starting_at(elapsed: f32) -> Self {
        Self {
            elapsed: elapsed.max(0.0),
            tick_count: 0,
        }
    }

    /// Advance the clock by one tick. Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        self.elapsed += dt;
        self.tick_count += 1;
    }

    /// Get the number of ticks applied so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl GameClock for SimClock {
    fn now(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_starts_at_zero() {
        let clock = SimClock::new();
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_clock_advance() {
        let mut clock = SimClock::new();
        for _ in 0..60 {
            clock.advance(FIXED_TIMESTEP);
        }
        assert_relative_eq!(clock.now(), 1.0, epsilon = 1e-4);
        assert_eq!(clock.tick_count(), 60);
    }

    #[test]
    fn test_clock_ignores_bad_deltas() {
        let mut clock = SimClock::starting_at(2.0);
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.now(), 2.0);
        assert_eq!(clock.tick_count(), 0);
    }
}
