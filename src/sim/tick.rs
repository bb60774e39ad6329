//! Per-frame simulation step
//!
//! Order within a running tick: clock and score, flyer, field, collision.

use super::collision;
use super::flyer::Intents;
use super::random::RandomSource;
use super::state::{GamePhase, GameSession, SimEvent};

impl<R: RandomSource> GameSession<R> {
    /// Advance the run by one frame of `dt` seconds.
    ///
    /// A no-op while game over. Bad deltas (negative, NaN, infinite) count as
    /// zero elapsed time; physics still steps once.
    pub fn tick(&mut self, intents: &Intents, dt: f32) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        let dt = crate::sanitize_dt(dt);

        // At most one point per tick, no catch-up for long frames
        let before = self.elapsed;
        self.elapsed += f64::from(dt);
        if self.elapsed.floor() > before.floor() {
            self.score += 1;
            self.push_event(SimEvent::ScoreIncreased { score: self.score });
        }

        self.flyer.update(intents, dt);

        if self.field.update(dt, self.viewpoint, &mut self.rng) {
            if let Some(rock) = self.field.live_obstacles().last() {
                let size = rock.size;
                self.push_event(SimEvent::ObstacleSpawned { size });
            }
        }

        if let Some(index) = collision::first_hit(
            self.flyer.position,
            self.flyer.bounding_radius,
            self.field.live_obstacles(),
        ) {
            self.phase = GamePhase::GameOver;
            self.push_event(SimEvent::Collided { obstacle: index });
            log::info!(
                "Game over after {:.1}s with score {} ({} rocks live)",
                self.elapsed,
                self.score,
                self.field.len()
            );
        }
    }
}
