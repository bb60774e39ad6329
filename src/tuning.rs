//! Data-driven game balance
//!
//! Every gameplay constant lives here so a run can be rebalanced from a JSON
//! file without recompiling. `Tuning::default()` reproduces the stock game.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("Failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Named balance presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Hard => "Hard",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyPreset::Easy),
            "normal" | "norm" => Some(DifficultyPreset::Normal),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }
}

/// Flight model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyerTuning {
    /// Lateral speed while a steer intent is held (units per tick)
    pub speed: f32,
    /// Vertical acceleration applied every tick (negative = down)
    pub gravity: f32,
    /// Extra vertical acceleration while ascending
    pub lift: f32,
    pub bounding_radius: f32,
    /// |velocity.y| cap
    pub max_vertical_speed: f32,
    /// |position.y| cap
    pub altitude_limit: f32,
    /// Lateral velocity multiplier when not steering
    pub lateral_damping: f32,
    pub tilt_factor: f32,
}

impl Default for FlyerTuning {
    fn default() -> Self {
        Self {
            speed: FLYER_SPEED,
            gravity: FLYER_GRAVITY,
            lift: FLYER_LIFT,
            bounding_radius: FLYER_RADIUS,
            max_vertical_speed: FLYER_MAX_VERTICAL_SPEED,
            altitude_limit: FLYER_ALTITUDE_LIMIT,
            lateral_damping: FLYER_LATERAL_DAMPING,
            tilt_factor: FLYER_TILT_FACTOR,
        }
    }
}

/// Obstacle spawning, motion and difficulty curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    /// Forward (+z) distance every obstacle travels per tick
    pub rock_speed: f32,
    /// z coordinate new obstacles appear at
    pub spawn_distance: f32,
    pub spawn_half_width: f32,
    pub spawn_half_height: f32,
    pub initial_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub spawn_interval_step: f32,
    pub initial_difficulty: f32,
    pub max_difficulty: f32,
    pub difficulty_step: f32,
    pub base_size: f32,
    pub size_spread: f32,
    pub radius_scale: f32,
    pub retire_margin: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            rock_speed: ROCK_SPEED,
            spawn_distance: SPAWN_DISTANCE,
            spawn_half_width: SPAWN_HALF_WIDTH,
            spawn_half_height: SPAWN_HALF_HEIGHT,
            initial_spawn_interval: SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            initial_difficulty: INITIAL_DIFFICULTY,
            max_difficulty: MAX_DIFFICULTY,
            difficulty_step: DIFFICULTY_STEP,
            base_size: ROCK_BASE_SIZE,
            size_spread: ROCK_SIZE_SPREAD,
            radius_scale: ROCK_RADIUS_SCALE,
            retire_margin: RETIRE_MARGIN,
        }
    }
}

/// Complete balance sheet for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub flyer: FlyerTuning,
    pub field: FieldTuning,
    /// Camera position; obstacles are retired relative to its z
    pub viewpoint: Vec3,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            flyer: FlyerTuning::default(),
            field: FieldTuning::default(),
            viewpoint: Vec3::new(0.0, 0.0, VIEWPOINT_Z),
        }
    }
}

impl Tuning {
    /// Create tuning from a preset (Normal is the stock game)
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        let mut tuning = Self::default();
        tuning.apply_preset(preset);
        tuning
    }

    /// Apply a preset on top of the current values
    pub fn apply_preset(&mut self, preset: DifficultyPreset) {
        match preset {
            DifficultyPreset::Easy => {
                self.field.min_spawn_interval = 30.0;
                self.field.max_difficulty = 2.0;
                self.field.rock_speed = 0.15;
            }
            DifficultyPreset::Normal => {}
            DifficultyPreset::Hard => {
                self.field.initial_spawn_interval = 40.0;
                self.field.min_spawn_interval = 10.0;
                self.field.rock_speed = 0.3;
                self.field.difficulty_step = 0.02;
            }
        }
    }

    /// Parse and validate tuning from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let f = &self.flyer;
        let d = &self.field;

        let all = [
            ("flyer.speed", f.speed),
            ("flyer.gravity", f.gravity),
            ("flyer.lift", f.lift),
            ("flyer.bounding_radius", f.bounding_radius),
            ("flyer.max_vertical_speed", f.max_vertical_speed),
            ("flyer.altitude_limit", f.altitude_limit),
            ("flyer.lateral_damping", f.lateral_damping),
            ("flyer.tilt_factor", f.tilt_factor),
            ("field.rock_speed", d.rock_speed),
            ("field.spawn_distance", d.spawn_distance),
            ("field.spawn_half_width", d.spawn_half_width),
            ("field.spawn_half_height", d.spawn_half_height),
            ("field.initial_spawn_interval", d.initial_spawn_interval),
            ("field.min_spawn_interval", d.min_spawn_interval),
            ("field.spawn_interval_step", d.spawn_interval_step),
            ("field.initial_difficulty", d.initial_difficulty),
            ("field.max_difficulty", d.max_difficulty),
            ("field.difficulty_step", d.difficulty_step),
            ("field.base_size", d.base_size),
            ("field.size_spread", d.size_spread),
            ("field.radius_scale", d.radius_scale),
            ("field.retire_margin", d.retire_margin),
            ("viewpoint.x", self.viewpoint.x),
            ("viewpoint.y", self.viewpoint.y),
            ("viewpoint.z", self.viewpoint.z),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }

        if f.bounding_radius < 0.0 {
            return Err(invalid("flyer.bounding_radius", "must be >= 0"));
        }
        if f.max_vertical_speed <= 0.0 {
            return Err(invalid("flyer.max_vertical_speed", "must be > 0"));
        }
        if f.altitude_limit <= 0.0 {
            return Err(invalid("flyer.altitude_limit", "must be > 0"));
        }
        if !(0.0..=1.0).contains(&f.lateral_damping) {
            return Err(invalid("flyer.lateral_damping", "must be within [0, 1]"));
        }
        if d.base_size <= 0.0 {
            return Err(invalid("field.base_size", "must be > 0"));
        }
        if d.size_spread < 0.0 {
            return Err(invalid("field.size_spread", "must be >= 0"));
        }
        if d.radius_scale <= 0.0 {
            return Err(invalid("field.radius_scale", "must be > 0"));
        }
        if d.min_spawn_interval < 0.0 {
            return Err(invalid("field.min_spawn_interval", "must be >= 0"));
        }
        if d.min_spawn_interval > d.initial_spawn_interval {
            return Err(invalid(
                "field.min_spawn_interval",
                format!(
                    "floor {} is above the initial interval {}",
                    d.min_spawn_interval, d.initial_spawn_interval
                ),
            ));
        }
        if d.spawn_interval_step < 0.0 {
            return Err(invalid("field.spawn_interval_step", "must be >= 0"));
        }
        if d.initial_difficulty <= 0.0 {
            return Err(invalid("field.initial_difficulty", "must be > 0"));
        }
        if d.max_difficulty < d.initial_difficulty {
            return Err(invalid(
                "field.max_difficulty",
                format!(
                    "ceiling {} is below the initial difficulty {}",
                    d.max_difficulty, d.initial_difficulty
                ),
            ));
        }
        if d.difficulty_step < 0.0 {
            return Err(invalid("field.difficulty_step", "must be >= 0"));
        }
        if d.rock_speed <= 0.0 {
            return Err(invalid("field.rock_speed", "must be > 0 or rocks never retire"));
        }
        if d.spawn_half_width < 0.0 {
            return Err(invalid("field.spawn_half_width", "must be >= 0"));
        }
        if d.spawn_half_height < 0.0 {
            return Err(invalid("field.spawn_half_height", "must be >= 0"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
    TuningError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
        for preset in [
            DifficultyPreset::Easy,
            DifficultyPreset::Normal,
            DifficultyPreset::Hard,
        ] {
            assert!(Tuning::from_preset(preset).validate().is_ok(), "{}", preset.as_str());
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(DifficultyPreset::from_str("HARD"), Some(DifficultyPreset::Hard));
        assert_eq!(DifficultyPreset::from_str("norm"), Some(DifficultyPreset::Normal));
        assert_eq!(DifficultyPreset::from_str("nightmare"), None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "field": { "rock_speed": 0.5 } }"#).unwrap();
        assert_eq!(tuning.field.rock_speed, 0.5);
        assert_eq!(tuning.field.min_spawn_interval, MIN_SPAWN_INTERVAL);
        assert_eq!(tuning.flyer, FlyerTuning::default());
        assert_eq!(tuning.viewpoint.z, VIEWPOINT_Z);
    }

    #[test]
    fn test_rejects_inverted_interval_bounds() {
        let json = r#"{ "field": { "initial_spawn_interval": 10.0, "min_spawn_interval": 20.0 } }"#;
        match Tuning::from_json(json) {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "field.min_spawn_interval"),
            other => panic!("expected invalid interval, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_degenerate_rock_size() {
        let mut tuning = Tuning::default();
        tuning.field.base_size = 0.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_stalled_rocks() {
        for speed in [0.0, -0.2] {
            let mut tuning = Tuning::default();
            tuning.field.rock_speed = speed;
            match tuning.validate() {
                Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "field.rock_speed"),
                other => panic!("expected rock_speed rejection, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_negative_spawn_extent_names_its_axis() {
        let mut tuning = Tuning::default();
        tuning.field.spawn_half_height = -1.0;
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "field.spawn_half_height"),
            other => panic!("expected spawn_half_height rejection, got {:?}", other),
        }

        let mut tuning = Tuning::default();
        tuning.field.spawn_half_width = -1.0;
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "field.spawn_half_width"),
            other => panic!("expected spawn_half_width rejection, got {:?}", other),
        }

        // Zero extents are fine: every rock spawns on the axis
        let mut tuning = Tuning::default();
        tuning.field.spawn_half_width = 0.0;
        tuning.field.spawn_half_height = 0.0;
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_rejects_garbage_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_preset() {
        let hard = Tuning::from_preset(DifficultyPreset::Hard);
        let json = hard.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), hard);
    }
}
