//! Session state and read-only snapshots
//!
//! A `GameSession` is a caller-owned value: any number of independent runs can
//! exist side by side (headless sims, tests, split screen).

use std::collections::VecDeque;

use glam::Vec3;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::obstacle::{Obstacle, ObstacleField};
use super::random::{self, RandomSource};
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; frozen until restart
    GameOver,
}

/// Something presentation or audio may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A rock was spawned at the back of the field
    ObstacleSpawned { size: f32 },
    /// A whole second of running time elapsed
    ScoreIncreased { score: u64 },
    /// The flyer hit the rock at this index in the live set
    Collided { obstacle: usize },
    Restarted,
}

/// Most events kept between drains; the oldest are dropped past this
pub const MAX_PENDING_EVENTS: usize = 256;

/// One run of the game
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = Pcg32> {
    pub(super) phase: GamePhase,
    /// Accumulated in f64 so the whole-second boundaries stay exact on long runs
    pub(super) elapsed: f64,
    pub(super) score: u64,
    pub(super) flyer: Flyer,
    pub(super) field: ObstacleField,
    pub(super) viewpoint: Vec3,
    pub(super) rng: R,
    pub(super) events: VecDeque<SimEvent>,
}

impl GameSession<Pcg32> {
    /// Stock tuning, seeded PCG randomness
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&Tuning::default(), random::seeded(seed))
    }

    pub fn with_tuning(tuning: &Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, random::seeded(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Build a session around any random source
    pub fn with_rng(tuning: &Tuning, rng: R) -> Self {
        Self {
            phase: GamePhase::Running,
            elapsed: 0.0,
            score: 0,
            flyer: Flyer::new(&tuning.flyer),
            field: ObstacleField::new(tuning.field.clone()),
            viewpoint: tuning.viewpoint,
            rng,
            events: VecDeque::new(),
        }
    }

    /// Start a fresh run from any phase
    pub fn restart(&mut self) {
        if self.phase == GamePhase::GameOver {
            log::info!("Restarting after game over (score {})", self.score);
        } else {
            log::info!("Restarting mid-run (score {})", self.score);
        }
        self.phase = GamePhase::Running;
        self.score = 0;
        self.elapsed = 0.0;
        self.flyer.reset();
        self.field.reset();
        self.push_event(SimEvent::Restarted);
    }

    /// Queue an event, dropping the oldest once the queue is full
    pub(super) fn push_event(&mut self, event: SimEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Running time in seconds (frozen while game over)
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    /// Mutable field access for scenario setup (e.g. placing a rock)
    pub fn field_mut(&mut self) -> &mut ObstacleField {
        &mut self.field
    }

    pub fn viewpoint(&self) -> Vec3 {
        self.viewpoint
    }

    /// Take every event raised since the last drain, oldest first.
    ///
    /// Hosts should drain once per frame. Undrained events are capped at
    /// [`MAX_PENDING_EVENTS`]; older ones are discarded.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain(..).collect()
    }

    /// Copy of everything a renderer or HUD needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            elapsed: self.elapsed,
            flyer: FlyerPose {
                position: self.flyer.position,
                velocity: self.flyer.velocity,
                tilt: self.flyer.tilt,
                wing_angle: self.flyer.wing_angle(self.elapsed as f32),
                bounding_radius: self.flyer.bounding_radius,
            },
            obstacles: self.field.live_obstacles().to_vec(),
            difficulty: self.field.difficulty(),
        }
    }
}

/// Flyer pose for presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyerPose {
    pub position: Vec3,
    pub velocity: Vec3,
    pub tilt: f32,
    pub wing_angle: f32,
    pub bounding_radius: f32,
}

/// Serializable view of a session at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub elapsed: f64,
    pub flyer: FlyerPose,
    /// Live rocks in spawn order
    pub obstacles: Vec<Obstacle>,
    pub difficulty: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedRandom;

    #[test]
    fn test_new_session_is_running() {
        let session = GameSession::new(1);
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.elapsed(), 0.0);
        assert!(session.field().is_empty());
        assert_eq!(session.viewpoint(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_restart_from_running() {
        let mut session = GameSession::with_rng(&Tuning::default(), ScriptedRandom::new(vec![0.5]));
        session.field_mut().insert(Obstacle::new(Vec3::new(5.0, 5.0, -50.0), 1.0));
        session.flyer.position = Vec3::new(3.0, 2.0, 0.0);
        session.score = 7;
        session.elapsed = 7.5;

        session.restart();
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.elapsed(), 0.0);
        assert_eq!(session.flyer().position, Vec3::ZERO);
        assert!(session.field().is_empty());
        assert_eq!(session.drain_events(), vec![SimEvent::Restarted]);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut session = GameSession::with_rng(&Tuning::default(), ScriptedRandom::new(vec![0.5]));
        for _ in 0..MAX_PENDING_EVENTS + 10 {
            session.restart();
        }
        session.score = 41;
        session.push_event(SimEvent::ScoreIncreased { score: 42 });

        let events = session.drain_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert_eq!(events.last(), Some(&SimEvent::ScoreIncreased { score: 42 }));
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = GameSession::new(3);
        session.field_mut().insert(Obstacle::new(Vec3::new(1.0, 2.0, -30.0), 1.5));
        let snap = session.snapshot();
        assert_eq!(snap.obstacles.len(), 1);

        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
