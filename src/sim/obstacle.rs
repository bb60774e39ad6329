//! Rocks and the field that spawns, moves and retires them
//!
//! Live obstacles are plain value records in spawn order. Nothing here holds
//! rendering state; a presentation layer maps them to visuals by index.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::tuning::FieldTuning;

/// A rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec3,
    pub size: f32,
    /// Always `size * radius_scale`
    pub bounding_radius: f32,
    /// Presentation-only orientation (radians per axis)
    pub rotation: Vec3,
}

impl Obstacle {
    /// Build an obstacle with the stock radius scale
    pub fn new(position: Vec3, size: f32) -> Self {
        Self::with_radius_scale(position, size, crate::consts::ROCK_RADIUS_SCALE)
    }

    pub fn with_radius_scale(position: Vec3, size: f32, radius_scale: f32) -> Self {
        Self {
            position,
            size,
            bounding_radius: size * radius_scale,
            rotation: Vec3::ZERO,
        }
    }

    /// Move toward (and past) the camera
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.position.z += speed;
    }

    /// Passed behind the viewpoint by more than `margin`
    #[inline]
    pub fn is_out_of_bounds(&self, viewpoint: Vec3, margin: f32) -> bool {
        self.position.z > viewpoint.z + margin
    }
}

/// Owner of every live obstacle plus the spawn timer and difficulty curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    spawn_timer: f32,
    spawn_interval: f32,
    difficulty: f32,
    tuning: FieldTuning,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new(FieldTuning::default())
    }
}

impl ObstacleField {
    pub fn new(tuning: FieldTuning) -> Self {
        Self {
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            spawn_interval: tuning.initial_spawn_interval,
            difficulty: tuning.initial_difficulty,
            tuning,
        }
    }

    /// Spawn one rock ahead of the camera.
    ///
    /// Draw order is x, y, size, then the three rotation angles.
    pub fn spawn(&mut self, rng: &mut impl RandomSource) -> &Obstacle {
        let t = &self.tuning;
        let x = rng.range(-t.spawn_half_width, t.spawn_half_width);
        let y = rng.range(-t.spawn_half_height, t.spawn_half_height);
        let size = t.base_size + rng.unit() * t.size_spread * self.difficulty;

        let mut rock =
            Obstacle::with_radius_scale(Vec3::new(x, y, t.spawn_distance), size, t.radius_scale);
        let pi = std::f32::consts::PI;
        rock.rotation = Vec3::new(rng.unit() * pi, rng.unit() * pi, rng.unit() * pi);

        log::debug!(
            "Spawned rock #{} at ({:.2}, {:.2}) size {:.2} (interval {:.1}, difficulty {:.2})",
            self.obstacles.len(),
            x,
            y,
            size,
            self.spawn_interval,
            self.difficulty
        );

        self.obstacles.push(rock);
        // Just pushed
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Advance spawn timer, move every rock, drop the ones behind the camera.
    ///
    /// Returns true if a rock was spawned this call.
    pub fn update(&mut self, dt: f32, viewpoint: Vec3, rng: &mut impl RandomSource) -> bool {
        let dt = crate::sanitize_dt(dt);
        self.spawn_timer += dt;

        let mut spawned = false;
        if self.spawn_timer > self.spawn_interval {
            self.spawn(rng);
            self.spawn_timer = 0.0;
            self.spawn_interval = (self.spawn_interval - self.tuning.spawn_interval_step)
                .max(self.tuning.min_spawn_interval);
            self.difficulty =
                (self.difficulty + self.tuning.difficulty_step).min(self.tuning.max_difficulty);
            spawned = true;
        }

        let speed = self.tuning.rock_speed;
        let margin = self.tuning.retire_margin;
        self.obstacles.retain_mut(|rock| {
            rock.advance(speed);
            !rock.is_out_of_bounds(viewpoint, margin)
        });

        spawned
    }

    /// Drop every rock and restart the difficulty curve
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
        self.spawn_interval = self.tuning.initial_spawn_interval;
        self.difficulty = self.tuning.initial_difficulty;
    }

    /// Place a hand-built rock (scenario setup, replays)
    pub fn insert(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Rocks currently tracked, in spawn order
    pub fn live_obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    pub fn tuning(&self) -> &FieldTuning {
        &self.tuning
    }
}
