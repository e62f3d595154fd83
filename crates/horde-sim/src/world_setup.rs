//! Entity spawn factories for the roster world.

use glam::Vec3;
use hecs::World;

use horde_ai::profiles::SpawnStats;
use horde_core::components::*;
use horde_core::enums::ZombieArchetype;
use horde_core::types::ZombieId;

/// Spawn a single live zombie with the given (already wave-scaled) stats.
pub fn spawn_zombie(
    world: &mut World,
    id: ZombieId,
    archetype: ZombieArchetype,
    stats: &SpawnStats,
    position: Vec3,
) -> hecs::Entity {
    world.spawn((
        Zombie {
            id,
            archetype,
            speed: stats.speed,
            damage: stats.damage,
            score_value: stats.score_value,
            is_dead: false,
        },
        Transform {
            position,
            facing: 0.0,
        },
        Health {
            current: stats.health,
            max: stats.health,
        },
        stats.hitbox,
    ))
}

/// Find the entity carrying `id`.
pub fn find_zombie(world: &World, id: ZombieId) -> Option<hecs::Entity> {
    world
        .query::<&Zombie>()
        .iter()
        .find(|(_, zombie)| zombie.id == id)
        .map(|(entity, _)| entity)
}

/// Number of zombies in the roster, dead or alive.
pub fn roster_len(world: &World) -> usize {
    world.query::<&Zombie>().iter().count()
}

/// Number of live zombies in the roster.
pub fn live_count(world: &World) -> usize {
    world
        .query::<&Zombie>()
        .iter()
        .filter(|(_, zombie)| !zombie.is_dead)
        .count()
}
