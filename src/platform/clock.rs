//! Monotonic frame timer

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Measures the time between successive frames.
///
/// Deltas are capped so a stalled frame (debugger, suspended window) cannot
/// push one giant step into the simulation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(MAX_FRAME_DT)
    }

    pub fn with_max_dt(max_dt: f32) -> Self {
        Self {
            last: Instant::now(),
            max_dt: crate::sanitize_dt(max_dt),
        }
    }

    /// Seconds since the previous call (or since construction/restart)
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self.delta_between(self.last, now);
        self.last = now;
        dt
    }

    /// Forget time spent so far (e.g. after a restart)
    pub fn restart(&mut self) {
        self.last = Instant::now();
    }

    fn delta_between(&self, earlier: Instant, later: Instant) -> f32 {
        let elapsed = later.saturating_duration_since(earlier);
        clamp_delta(elapsed, self.max_dt)
    }
}

fn clamp_delta(elapsed: Duration, max_dt: f32) -> f32 {
    elapsed.as_secs_f32().min(max_dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_capped() {
        assert_eq!(clamp_delta(Duration::from_secs(3), 0.1), 0.1);
        assert!((clamp_delta(Duration::from_millis(16), 0.1) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_delta_is_non_negative() {
        let mut clock = FrameClock::new();
        let dt = clock.delta();
        assert!(dt >= 0.0);
        assert!(dt <= MAX_FRAME_DT);
    }

    #[test]
    fn test_reversed_instants_clamp_to_zero() {
        let clock = FrameClock::new();
        let now = Instant::now();
        let later = now + Duration::from_millis(5);
        assert_eq!(clock.delta_between(later, now), 0.0);
    }

    #[test]
    fn test_bad_cap_is_zero() {
        let mut clock = FrameClock::with_max_dt(f32::NAN);
        assert_eq!(clock.delta(), 0.0);
    }
}
