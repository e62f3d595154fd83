//! Snapshot system: reads the roster and session and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use horde_core::components::*;
use horde_core::events::{Notice, SceneEvent};
use horde_core::state::*;
use horde_core::types::SimTime;

use crate::session::SessionState;

/// Build a complete GameStateSnapshot from the current roster and session.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &SessionState,
    scene_events: Vec<SceneEvent>,
    notices: Vec<Notice>,
) -> GameStateSnapshot {
    let zombies = build_zombies(world);
    let alive = zombies.iter().filter(|z| !z.is_dead).count() as u32;

    GameStateSnapshot {
        time: *time,
        status: session.status,
        player: PlayerView {
            health: session.health,
            max_health: session.max_health,
            position: session.player.position,
            yaw: session.player.yaw,
            pitch: session.player.pitch,
            damage_flash: session.damage_cooldown,
        },
        weapon: WeaponView {
            ammo: session.ammo,
            max_ammo: session.max_ammo,
            reloading: session.reloading,
            recoil: session.recoil,
        },
        wave: WaveView {
            number: session.wave,
            spawned: session.spawned_this_wave,
            killed: session.killed_this_wave,
            alive,
            elapsed_secs: (time.elapsed_secs - session.wave_started_at).max(0.0),
        },
        score: ScoreView {
            score: session.score,
            kills: session.kills,
        },
        zombies,
        scene_events,
        notices,
    }
}

/// Zombie views in roster (spawn) order.
fn build_zombies(world: &World) -> Vec<ZombieView> {
    let mut zombies: Vec<ZombieView> = world
        .query::<(&Zombie, &Transform, &Health)>()
        .iter()
        .map(|(_, (zombie, transform, health))| ZombieView {
            id: zombie.id,
            archetype: zombie.archetype,
            position: transform.position,
            facing: transform.facing,
            health: health.current,
            max_health: health.max,
            is_dead: zombie.is_dead,
        })
        .collect();
    zombies.sort_by_key(|z| z.id);
    zombies
}
