//! Ptero Run - dodge the rocks for as long as you can
//!
//! Core modules:
//! - `sim`: Simulation (flight physics, obstacle field, collisions, run state)
//! - `tuning`: Data-driven game balance
//! - `platform`: Frame clock and input-to-intent reduction
//! - `renderer`: Instance side table for a rendering layer
//! - `highscores` / `persistence`: Leaderboard and versioned JSON saves

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use sim::{GamePhase, GameSession, Intents, Snapshot};
pub use tuning::{DifficultyPreset, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by headless runs (60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the frame clock will report
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Flyer defaults (velocities are per-tick displacements)
    pub const FLYER_SPEED: f32 = 0.15;
    pub const FLYER_GRAVITY: f32 = -0.005;
    pub const FLYER_LIFT: f32 = 0.015;
    pub const FLYER_RADIUS: f32 = 1.0;
    pub const FLYER_MAX_VERTICAL_SPEED: f32 = 0.2;
    pub const FLYER_ALTITUDE_LIMIT: f32 = 10.0;
    /// Lateral velocity multiplier per tick when no steer intent is held
    pub const FLYER_LATERAL_DAMPING: f32 = 0.95;
    /// Tilt = -velocity.y * TILT_FACTOR
    pub const FLYER_TILT_FACTOR: f32 = 2.0;

    /// Obstacle field defaults
    pub const ROCK_SPEED: f32 = 0.2;
    pub const SPAWN_DISTANCE: f32 = -100.0;
    pub const SPAWN_HALF_WIDTH: f32 = 15.0;
    pub const SPAWN_HALF_HEIGHT: f32 = 10.0;
    /// Spawn interval in seconds of accumulated dt
    pub const SPAWN_INTERVAL: f32 = 60.0;
    pub const MIN_SPAWN_INTERVAL: f32 = 20.0;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.1;
    pub const INITIAL_DIFFICULTY: f32 = 1.0;
    pub const MAX_DIFFICULTY: f32 = 3.0;
    pub const DIFFICULTY_STEP: f32 = 0.01;
    pub const ROCK_BASE_SIZE: f32 = 1.0;
    pub const ROCK_SIZE_SPREAD: f32 = 2.0;
    /// bounding_radius = size * ROCK_RADIUS_SCALE
    pub const ROCK_RADIUS_SCALE: f32 = 1.2;
    /// Obstacles further than this behind the viewpoint are retired
    pub const RETIRE_MARGIN: f32 = 10.0;

    /// Camera position the field retires obstacles against
    pub const VIEWPOINT_Z: f32 = 5.0;
}

/// Clamp a frame delta to something the simulation can consume.
///
/// Negative, NaN and infinite deltas become zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(0.0), 0.0);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }
}
