//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ZombieArchetype;
use crate::types::{Aabb, ZombieId};

/// Per-zombie identity and fixed-at-spawn stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zombie {
    pub id: ZombieId,
    pub archetype: ZombieArchetype,
    /// Ground speed in units per second (wave scaling already applied).
    pub speed: f32,
    /// Contact damage dealt to the player.
    pub damage: i32,
    /// Score awarded for the kill.
    pub score_value: u32,
    /// One-way flag. Dead zombies stay in the roster until wave cleanup.
    pub is_dead: bool,
}

/// World placement. `position` is the point on the ground under the zombie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Heading in radians, `atan2(dir.x, dir.z)` of the last pursuit direction.
    pub facing: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Bounding geometry used by the hitscan test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub half_width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn bounds_at(&self, position: Vec3) -> Aabb {
        Aabb::from_footprint(position, self.half_width, self.height)
    }
}
