//! Wave controller: detects a cleared wave and starts the next one.
//!
//! The machine is cyclic: wave_active → wave_cleared → (next wave spawned)
//! → wave_active, with the wave number as the only distinguishing state.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use horde_core::components::Zombie;
use horde_core::config::GameConfig;
use horde_core::enums::NoticeLevel;

use crate::feedback::Feedback;
use crate::session::SessionState;
use crate::systems::{cleanup, spawner};

/// Result of a completion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveCheck {
    NotReady,
    Advanced { wave: u32, spawned: u32 },
}

/// Whether the current wave counts as cleared at `now`.
///
/// Requires a non-empty roster with every zombie dead, the wave to have
/// run for longer than `min_wave_secs`, and kills to match spawns.
pub fn is_cleared(world: &World, session: &SessionState, now: f64, min_wave_secs: f64) -> bool {
    let mut roster = 0usize;
    let mut any_alive = false;
    for (_entity, zombie) in world.query::<&Zombie>().iter() {
        roster += 1;
        if !zombie.is_dead {
            any_alive = true;
            break;
        }
    }

    roster > 0
        && !any_alive
        && now - session.wave_started_at > min_wave_secs
        && session.killed_this_wave == session.spawned_this_wave
}

/// Check for completion and advance if cleared. Touches nothing otherwise.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    session: &mut SessionState,
    config: &GameConfig,
    now: f64,
    despawn_buffer: &mut Vec<Entity>,
    feedback: &mut Feedback,
) -> WaveCheck {
    if !is_cleared(world, session, now, config.waves.min_wave_secs) {
        return WaveCheck::NotReady;
    }
    advance(world, rng, next_id, session, config, now, despawn_buffer, feedback)
}

/// Start the next wave: heal, refill, purge the dead, spawn the new batch.
#[allow(clippy::too_many_arguments)]
pub fn advance(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    session: &mut SessionState,
    config: &GameConfig,
    now: f64,
    despawn_buffer: &mut Vec<Entity>,
    feedback: &mut Feedback,
) -> WaveCheck {
    let wave = session.advance_wave(config.waves.clear_heal, now);
    let purged = cleanup::purge_dead(world, despawn_buffer);
    let count = config.waves.wave_size(wave);
    spawner::run(world, rng, next_id, session, count, &config.spawn, feedback);

    log::debug!("Wave {wave}: purged {purged} dead, spawning {count}");
    feedback.notice(
        NoticeLevel::Info,
        Some(&format!("Wave {wave}")),
        format!("{count} zombies are approaching!"),
        now,
    );

    WaveCheck::Advanced {
        wave,
        spawned: count,
    }
}
