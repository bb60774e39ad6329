//! The player-controlled pterodactyl
//!
//! Vertical motion accelerates under gravity and lift; lateral motion is set
//! directly while steering and damps out otherwise. Velocities are per-tick
//! displacements: `update` advances the position by `velocity` once per call
//! regardless of `dt`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision;
use super::obstacle::Obstacle;
use crate::tuning::FlyerTuning;

/// Control intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub ascend: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

/// The flyer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Lateral speed while steering
    pub speed: f32,
    pub gravity: f32,
    pub lift: f32,
    pub bounding_radius: f32,
    /// Roll hint for presentation, derived from vertical velocity
    pub tilt: f32,
    max_vertical_speed: f32,
    altitude_limit: f32,
    lateral_damping: f32,
    tilt_factor: f32,
}

impl Default for Flyer {
    fn default() -> Self {
        Self::new(&FlyerTuning::default())
    }
}

impl Flyer {
    pub fn new(tuning: &FlyerTuning) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            speed: tuning.speed,
            gravity: tuning.gravity,
            lift: tuning.lift,
            bounding_radius: tuning.bounding_radius,
            tilt: 0.0,
            max_vertical_speed: tuning.max_vertical_speed,
            altitude_limit: tuning.altitude_limit,
            lateral_damping: tuning.lateral_damping,
            tilt_factor: tuning.tilt_factor,
        }
    }

    /// Advance one tick.
    ///
    /// `_dt` is accepted for the per-frame contract but does not scale the
    /// integration step.
    pub fn update(&mut self, intents: &Intents, _dt: f32) {
        self.velocity.y += self.gravity;
        if intents.ascend {
            self.velocity.y += self.lift;
        }

        // Left wins when both are held
        if intents.steer_left {
            self.velocity.x = -self.speed;
        } else if intents.steer_right {
            self.velocity.x = self.speed;
        } else {
            self.velocity.x *= self.lateral_damping;
        }

        self.velocity.y = self
            .velocity
            .y
            .clamp(-self.max_vertical_speed, self.max_vertical_speed);

        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;

        // Inelastic floor and ceiling
        if self.position.y > self.altitude_limit {
            self.position.y = self.altitude_limit;
            self.velocity.y = 0.0;
        }
        if self.position.y < -self.altitude_limit {
            self.position.y = -self.altitude_limit;
            self.velocity.y = 0.0;
        }

        self.tilt = -self.velocity.y * self.tilt_factor;
    }

    /// True if any obstacle overlaps the flyer's bounding sphere
    pub fn check_collision(&self, obstacles: &[Obstacle]) -> bool {
        collision::first_hit(self.position, self.bounding_radius, obstacles).is_some()
    }

    /// Back to the origin at rest. Tuning is kept.
    pub fn reset(&mut self) {
        self.position = Vec3::ZERO;
        self.velocity = Vec3::ZERO;
        self.tilt = 0.0;
    }

    /// Wing flap angle for presentation at the given run time
    pub fn wing_angle(&self, elapsed: f32) -> f32 {
        (elapsed * 5.0).sin() * 0.2
    }

    pub fn altitude_limit(&self) -> f32 {
        self.altitude_limit
    }

    pub fn max_vertical_speed(&self) -> f32 {
        self.max_vertical_speed
    }
}
