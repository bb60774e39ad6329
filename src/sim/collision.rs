//! Sphere-vs-sphere collision between the flyer and the rock field
//!
//! Every entity is approximated by a bounding sphere. Two spheres collide when
//! the distance between centers is strictly less than the sum of the radii.

use glam::Vec3;

use super::obstacle::Obstacle;

/// Whether two bounding spheres overlap
#[inline]
pub fn spheres_overlap(a: Vec3, a_radius: f32, b: Vec3, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    reach > 0.0 && a.distance_squared(b) < reach * reach
}

/// Index of the first obstacle (in spawn order) overlapping the sphere.
///
/// Stops at the first hit.
pub fn first_hit(position: Vec3, radius: f32, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|rock| spheres_overlap(position, radius, rock.position, rock.bounding_radius))
}

/// Distance between sphere surfaces (negative when overlapping)
#[inline]
pub fn clearance(a: Vec3, a_radius: f32, b: Vec3, b_radius: f32) -> f32 {
    a.distance(b) - (a_radius + b_radius)
}
