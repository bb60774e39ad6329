//! Simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per display frame, driven by the caller
//! - Randomness only through an injected `RandomSource`
//! - Entities are plain values in spawn order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod flyer;
pub mod obstacle;
pub mod random;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{clearance, first_hit, spheres_overlap};
pub use flyer::{Flyer, Intents};
pub use obstacle::{Obstacle, ObstacleField};
pub use random::{RandomSource, ScriptedRandom};
pub use state::{FlyerPose, GamePhase, GameSession, MAX_PENDING_EVENTS, SimEvent, Snapshot};
