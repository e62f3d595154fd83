//! Pursuit step: walk straight at the player on the ground plane.
//!
//! No pathfinding and no separation between zombies; overlapping is fine.

use glam::Vec3;

use horde_core::types::planar_offset;

/// Below this planar distance a zombie is considered on top of its target.
const ARRIVAL_EPSILON: f32 = 1e-4;

/// Result of one pursuit step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitStep {
    pub position: Vec3,
    pub facing: f32,
}

/// Move from `position` toward `target` at `speed` for `dt` seconds.
///
/// Height is left untouched. Facing is `atan2(dir.x, dir.z)`; when already
/// on the target the zombie stays put and keeps `facing`.
pub fn step(position: Vec3, facing: f32, target: Vec3, speed: f32, dt: f32) -> PursuitStep {
    let offset = planar_offset(position, target);
    let distance = offset.length();
    if distance < ARRIVAL_EPSILON {
        return PursuitStep { position, facing };
    }

    let direction = offset / distance;
    let displacement = direction * speed.max(0.0) * dt.max(0.0);

    PursuitStep {
        position: Vec3::new(
            position.x + displacement.x,
            position.y,
            position.z + displacement.z,
        ),
        facing: direction.x.atan2(direction.z),
    }
}
