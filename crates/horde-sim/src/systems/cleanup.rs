//! Cleanup system: purges dead zombies from the roster.

use hecs::{Entity, World};

use horde_core::components::Zombie;

/// Despawn every dead zombie. Returns how many were removed.
/// Uses a caller-owned buffer to avoid per-call allocation.
pub fn purge_dead(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, zombie) in world.query_mut::<&Zombie>() {
        if zombie.is_dead {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
