//! Collision monitor: pure proximity query between the player and live zombies.

use glam::Vec3;
use hecs::World;

use horde_core::components::{Transform, Zombie};
use horde_core::types::{planar_distance, ZombieId};

/// A live zombie touching the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub zombie_id: ZombieId,
    pub damage: i32,
}

/// First live zombie (in roster order) within `radius` of the player on the
/// ground plane. Does not mutate anything; cooldowns are the caller's job.
pub fn check(world: &World, player_position: Vec3, radius: f32) -> Option<Contact> {
    world
        .query::<(&Zombie, &Transform)>()
        .iter()
        .filter(|(_, (zombie, transform))| {
            !zombie.is_dead && planar_distance(player_position, transform.position) < radius
        })
        .map(|(_, (zombie, _))| Contact {
            zombie_id: zombie.id,
            damage: zombie.damage,
        })
        .min_by_key(|contact| contact.zombie_id)
}
