//! Combat resolver: single-ray hitscan against live zombies.
//!
//! Ammo and scoring are the caller's business; this only finds the target
//! and applies damage.

use hecs::World;

use horde_core::components::{Health, Hitbox, Transform, Zombie};
use horde_core::enums::ZombieArchetype;
use horde_core::events::SceneEvent;
use horde_core::types::{Ray, ZombieId};

use crate::feedback::Feedback;

/// Result of one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Miss,
    /// Target survived.
    Hit { zombie_id: ZombieId, remaining: i32 },
    /// Target died from this shot.
    Kill {
        zombie_id: ZombieId,
        archetype: ZombieArchetype,
        score_value: u32,
    },
}

impl FireOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, FireOutcome::Miss)
    }

    pub fn is_kill(&self) -> bool {
        matches!(self, FireOutcome::Kill { .. })
    }
}

/// Find the nearest live zombie whose hitbox `ray` enters within `max_range`.
/// Equal distances go to the earlier-spawned zombie.
pub fn pick_target(world: &World, ray: &Ray, max_range: f32) -> Option<(hecs::Entity, f32)> {
    let mut best: Option<(hecs::Entity, f32, ZombieId)> = None;

    for (entity, (zombie, transform, hitbox)) in
        world.query::<(&Zombie, &Transform, &Hitbox)>().iter()
    {
        if zombie.is_dead {
            continue;
        }
        let Some(t) = hitbox.bounds_at(transform.position).ray_intersection(ray) else {
            continue;
        };
        if t > max_range {
            continue;
        }
        let closer = match best {
            None => true,
            Some((_, best_t, best_id)) => t < best_t || (t == best_t && zombie.id < best_id),
        };
        if closer {
            best = Some((entity, t, zombie.id));
        }
    }

    best.map(|(entity, t, _)| (entity, t))
}

/// Cast the shot and apply `damage` to whatever it hits.
pub fn fire(
    world: &mut World,
    ray: &Ray,
    damage: i32,
    max_range: f32,
    feedback: &mut Feedback,
) -> FireOutcome {
    let Some((entity, distance)) = pick_target(world, ray, max_range) else {
        return FireOutcome::Miss;
    };

    let remaining = match world.get::<&mut Health>(entity) {
        Ok(mut health) => {
            health.current -= damage;
            health.current
        }
        Err(_) => return FireOutcome::Miss,
    };

    let Ok(mut zombie) = world.get::<&mut Zombie>(entity) else {
        return FireOutcome::Miss;
    };

    if remaining > 0 {
        log::debug!(
            "Hit {} at {:.1}u, {} health left",
            zombie.id,
            distance,
            remaining
        );
        return FireOutcome::Hit {
            zombie_id: zombie.id,
            remaining,
        };
    }

    zombie.is_dead = true;
    feedback.scene(SceneEvent::ZombieRemoved { id: zombie.id });
    log::debug!("Killed {} ({})", zombie.id, zombie.archetype.as_str());

    FireOutcome::Kill {
        zombie_id: zombie.id,
        archetype: zombie.archetype,
        score_value: zombie.score_value,
    }
}
