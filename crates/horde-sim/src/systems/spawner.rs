//! Spawner: creates a batch of zombies around the player.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use horde_ai::profiles::stats_for_wave;
use horde_ai::spawn::{roll_archetype, roll_spawn_point};
use horde_core::config::SpawnTuning;
use horde_core::enums::ZombieArchetype;
use horde_core::events::SceneEvent;
use horde_core::types::ZombieId;

use crate::feedback::Feedback;
use crate::session::SessionState;
use crate::world_setup;

/// Spawn `count` zombies for the session's current wave on a ring around
/// the player. Adds them to the wave's expected kill count.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    session: &mut SessionState,
    count: u32,
    tuning: &SpawnTuning,
    feedback: &mut Feedback,
) -> Vec<ZombieId> {
    let wave = session.wave;
    let center = session.player.position;
    let mut spawned = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let archetype = roll_archetype(rng, wave, tuning);
        let position = roll_spawn_point(rng, center, tuning);
        spawned.push(spawn_one(
            world, next_id, wave, archetype, position, tuning, feedback,
        ));
    }

    session.record_spawned(count);
    log::debug!("Spawned {count} zombies for wave {wave}");
    spawned
}

/// Place one zombie of a chosen archetype. Does not touch wave counters.
pub fn spawn_one(
    world: &mut World,
    next_id: &mut u32,
    wave: u32,
    archetype: ZombieArchetype,
    position: Vec3,
    tuning: &SpawnTuning,
    feedback: &mut Feedback,
) -> ZombieId {
    let id = ZombieId(*next_id);
    *next_id += 1;

    let stats = stats_for_wave(archetype, wave, tuning);
    world_setup::spawn_zombie(world, id, archetype, &stats, position);
    feedback.scene(SceneEvent::ZombieSpawned {
        id,
        archetype,
        position,
    });
    id
}
