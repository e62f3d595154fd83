//! Spawn policy: which archetype, and where.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use horde_core::config::SpawnTuning;
use horde_core::enums::ZombieArchetype;

/// Pick an archetype from a uniform roll `r` in [0, 1).
///
/// Tanks are checked first, then runners; each only once its wave is reached.
pub fn archetype_for_roll(r: f32, wave: u32, tuning: &SpawnTuning) -> ZombieArchetype {
    if wave >= tuning.tank_unlock_wave && r < tuning.tank_chance {
        ZombieArchetype::Tank
    } else if wave >= tuning.runner_unlock_wave && r < tuning.runner_chance {
        ZombieArchetype::Runner
    } else {
        ZombieArchetype::Walker
    }
}

/// Roll an archetype for the given wave.
pub fn roll_archetype<R: Rng>(rng: &mut R, wave: u32, tuning: &SpawnTuning) -> ZombieArchetype {
    let r: f32 = rng.gen();
    archetype_for_roll(r, wave, tuning)
}

/// Ground point at `distance` from `center` along `angle` (radians).
pub fn ring_point(center: Vec3, angle: f32, distance: f32) -> Vec3 {
    Vec3::new(
        center.x + angle.cos() * distance,
        0.0,
        center.z + angle.sin() * distance,
    )
}

/// Random ground point on the spawn ring around `center`.
pub fn roll_spawn_point<R: Rng>(rng: &mut R, center: Vec3, tuning: &SpawnTuning) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(tuning.min_distance..tuning.max_distance);
    ring_point(center, angle, distance)
}
