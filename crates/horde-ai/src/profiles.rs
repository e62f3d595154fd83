//! Archetype descriptors.
//!
//! Type-specific numbers are looked up once at spawn; nothing downstream
//! branches on the archetype again.

use horde_core::components::Hitbox;
use horde_core::config::SpawnTuning;
use horde_core::constants::*;
use horde_core::enums::ZombieArchetype;

/// Base stats for an archetype, before wave scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeDescriptor {
    pub base_health: i32,
    /// Units per second.
    pub base_speed: f32,
    pub base_damage: i32,
    pub score_value: u32,
    pub hitbox: Hitbox,
}

/// Stats of a single zombie at spawn time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnStats {
    pub health: i32,
    pub speed: f32,
    pub damage: i32,
    pub score_value: u32,
    pub hitbox: Hitbox,
}

/// Get the descriptor for a given archetype.
pub fn descriptor(archetype: ZombieArchetype) -> ArchetypeDescriptor {
    match archetype {
        ZombieArchetype::Walker => ArchetypeDescriptor {
            base_health: WALKER_HEALTH,
            base_speed: WALKER_SPEED,
            base_damage: WALKER_DAMAGE,
            score_value: WALKER_SCORE,
            hitbox: Hitbox {
                half_width: 0.35,
                height: 1.8,
            },
        },
        ZombieArchetype::Runner => ArchetypeDescriptor {
            base_health: RUNNER_HEALTH,
            base_speed: RUNNER_SPEED,
            base_damage: RUNNER_DAMAGE,
            score_value: RUNNER_SCORE,
            hitbox: Hitbox {
                half_width: 0.3,
                height: 1.7,
            },
        },
        ZombieArchetype::Tank => ArchetypeDescriptor {
            base_health: TANK_HEALTH,
            base_speed: TANK_SPEED,
            base_damage: TANK_DAMAGE,
            score_value: TANK_SCORE,
            hitbox: Hitbox {
                half_width: 0.55,
                height: 2.2,
            },
        },
    }
}

/// Apply additive wave scaling to an archetype's base stats.
///
/// Wave 1 gets the base values; each later wave adds a fixed increment
/// to health and speed. Damage and score do not scale.
pub fn stats_for_wave(archetype: ZombieArchetype, wave: u32, tuning: &SpawnTuning) -> SpawnStats {
    let d = descriptor(archetype);
    let levels = wave.saturating_sub(1);
    SpawnStats {
        health: d.base_health + tuning.health_per_wave * levels as i32,
        speed: d.base_speed + tuning.speed_per_wave * levels as f32,
        damage: d.base_damage,
        score_value: d.score_value,
        hitbox: d.hitbox,
    }
}
