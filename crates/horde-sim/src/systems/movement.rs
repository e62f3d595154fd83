//! Movement systems: zombie pursuit and player locomotion.

use glam::Vec3;
use hecs::World;

use horde_ai::pursuit;
use horde_core::components::{Transform, Zombie};
use horde_core::config::PlayerTuning;

use crate::session::PlayerState;

/// Move every live zombie toward the player. Dead zombies are left where they fell.
pub fn run_zombies(world: &mut World, player_position: Vec3, dt: f32) {
    for (_entity, (zombie, transform)) in world.query_mut::<(&Zombie, &mut Transform)>() {
        if zombie.is_dead {
            continue;
        }
        let result = pursuit::step(
            transform.position,
            transform.facing,
            player_position,
            zombie.speed,
            dt,
        );
        transform.position = result.position;
        transform.facing = result.facing;
    }
}

/// Integrate held movement keys, jump and gravity for one frame.
pub fn run_player(player: &mut PlayerState, tuning: &PlayerTuning, dt: f32) {
    let keys = player.keys;
    let mut local = Vec3::ZERO;
    if keys.forward != keys.backward {
        local.z = if keys.forward { -1.0 } else { 1.0 };
    }
    if keys.left != keys.right {
        local.x = if keys.left { -1.0 } else { 1.0 };
    }
    let local = local.normalize_or_zero();

    // Rotate into world space around the vertical axis.
    let (sin_yaw, cos_yaw) = player.yaw.sin_cos();
    let world_dir = Vec3::new(
        local.x * cos_yaw + local.z * sin_yaw,
        0.0,
        -local.x * sin_yaw + local.z * cos_yaw,
    );

    let speed = if keys.sprint {
        tuning.sprint_speed
    } else {
        tuning.walk_speed
    };
    player.position += world_dir * speed * dt;

    if !player.on_ground {
        player.vertical_velocity -= tuning.gravity * dt;
    }
    player.position.y += player.vertical_velocity * dt;

    if player.position.y <= tuning.eye_height {
        player.position.y = tuning.eye_height;
        player.vertical_velocity = 0.0;
        player.on_ground = true;
    }
}

/// Leave the ground if standing on it. Returns whether the jump happened.
pub fn jump(player: &mut PlayerState, tuning: &PlayerTuning) -> bool {
    if !player.on_ground {
        return false;
    }
    player.vertical_velocity = tuning.jump_velocity;
    player.on_ground = false;
    true
}
