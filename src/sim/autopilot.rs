//! Idle/demo controller
//!
//! Produces intents from session state so attract mode and headless runs can
//! play without a human: dodge the closest rock that is about to reach the
//! flyer's plane, otherwise drift back toward the center. Altitude is held
//! near zero throughout.

use glam::Vec3;

use super::flyer::{Flyer, Intents};
use super::obstacle::Obstacle;
use super::random::RandomSource;
use super::state::GameSession;

/// How far ahead (in -z) rocks are considered threats
const LOOKAHEAD: f32 = 30.0;
/// Extra lateral clearance to keep beyond touching spheres
const SAFETY_MARGIN: f32 = 1.0;
/// Dead zone around the lateral home position
const HOME_TOLERANCE: f32 = 1.5;

/// Pick intents for the next tick
pub fn autopilot<R: RandomSource>(session: &GameSession<R>) -> Intents {
    steer(session.flyer(), session.field().live_obstacles())
}

/// Intents for a flyer facing the given rocks
pub fn steer(flyer: &Flyer, obstacles: &[Obstacle]) -> Intents {
    let mut intents = Intents::default();
    let pos = flyer.position;

    match most_urgent_threat(flyer, obstacles) {
        // Lateral control is instant and unbounded, so always dodge sideways
        Some(rock) => {
            if pos.x < rock.position.x {
                intents.steer_left = true;
            } else {
                intents.steer_right = true;
            }
        }
        None => {
            if pos.x > HOME_TOLERANCE {
                intents.steer_left = true;
            } else if pos.x < -HOME_TOLERANCE {
                intents.steer_right = true;
            }
        }
    }
    intents.ascend = hold_altitude(flyer, 0.0);

    intents
}

/// Nearest rock ahead that would clip the flyer if nothing changed
fn most_urgent_threat<'a>(flyer: &Flyer, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let pos = flyer.position;
    obstacles
        .iter()
        .filter(|rock| {
            let ahead = pos.z - rock.position.z;
            let reach = flyer.bounding_radius + rock.bounding_radius + SAFETY_MARGIN;
            ahead > -reach && ahead < LOOKAHEAD && planar_distance(pos, rock.position) < reach
        })
        .min_by(|a, b| {
            (pos.z - a.position.z)
                .partial_cmp(&(pos.z - b.position.z))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Ascend when below target, or when falling fast near it
fn hold_altitude(flyer: &Flyer, target_y: f32) -> bool {
    let limit = flyer.altitude_limit() - flyer.bounding_radius;
    let target = target_y.clamp(-limit, limit);
    let error = target - flyer.position.y;
    // Lead the target by a few ticks of current vertical velocity
    error - flyer.velocity.y * 8.0 > 0.0
}
