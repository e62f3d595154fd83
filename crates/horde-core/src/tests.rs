#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, GameConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SceneEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    // ---- Geometry ----

    #[test]
    fn test_planar_distance_ignores_height() {
        let a = Vec3::new(0.0, 1.6, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert!((planar_distance(a, b) - 5.0).abs() < 1e-6);
        assert_eq!(planar_offset(a, b).y, 0.0);
    }

    #[test]
    fn test_aim_direction_default_looks_down_negative_z() {
        let dir = aim_direction(0.0, 0.0);
        assert!(dir.x.abs() < 1e-6);
        assert!(dir.y.abs() < 1e-6);
        assert!((dir.z + 1.0).abs() < 1e-6);

        let up = aim_direction(0.0, std::f32::consts::FRAC_PI_2);
        assert!((up.y - 1.0).abs() < 1e-6);

        let left = aim_direction(std::f32::consts::FRAC_PI_2, 0.0);
        assert!((left.x + 1.0).abs() < 1e-6, "positive yaw turns left");
    }

    #[test]
    fn test_ray_hits_box_in_front() {
        let aabb = Aabb::from_footprint(Vec3::new(0.0, 0.0, -10.0), 0.5, 2.0);
        let ray = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let t = aabb.ray_intersection(&ray).expect("ray should hit");
        assert!((t - 9.5).abs() < 1e-5, "entry distance should be 9.5, got {t}");
        assert!(aabb.contains(ray.at(t + 0.01)));
    }

    #[test]
    fn test_ray_misses_box_behind_or_above() {
        let aabb = Aabb::from_footprint(Vec3::new(0.0, 0.0, 10.0), 0.5, 2.0);
        let forward = Ray::new(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(aabb.ray_intersection(&forward).is_none(), "box is behind");

        let short = Aabb::from_footprint(Vec3::new(0.0, 0.0, -10.0), 0.5, 1.0);
        assert!(
            short.ray_intersection(&forward).is_none(),
            "level ray at eye height passes over a 1-unit box"
        );
    }

    #[test]
    fn test_ray_starting_inside_box() {
        let aabb = Aabb::from_footprint(Vec3::ZERO, 1.0, 2.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert_eq!(aabb.ray_intersection(&ray), Some(0.0));
    }

    #[test]
    fn test_zero_direction_ray_only_hits_when_inside() {
        let aabb = Aabb::from_footprint(Vec3::new(0.0, 0.0, -5.0), 0.5, 2.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        assert!(aabb.ray_intersection(&ray).is_none());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_zombie_id_display_and_order() {
        assert_eq!(ZombieId(7).to_string(), "Z-0007");
        assert!(ZombieId(1) < ZombieId(2));
    }

    // ---- Serde ----

    /// Commands arrive as JSON from the input bridge.
    #[test]
    fn test_player_command_from_json() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Fire"}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::Fire));

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"Look","yaw":0.5,"pitch":-0.1}"#).unwrap();
        match cmd {
            PlayerCommand::Look { yaw, pitch } => {
                assert!((yaw - 0.5).abs() < 1e-6);
                assert!((pitch + 0.1).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }

        let json = concat!(
            r#"{"type":"SetMovement","forward":true,"backward":false,"#,
            r#""left":false,"right":true,"sprint":false}"#,
        );
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::SetMovement {
                forward: true,
                right: true,
                ..
            }
        ));
    }

    #[test]
    fn test_scene_event_is_tagged() {
        let event = SceneEvent::ZombieRemoved { id: ZombieId(3) };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"ZombieRemoved""#), "got {json}");
        let back: SceneEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.status, GameStatus::Menu);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"Menu\""));
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.player.max_health, PLAYER_MAX_HEALTH);
        assert_eq!(config.weapon.max_ammo, MAX_AMMO);
        assert_eq!(config.weapon.damage, WEAPON_DAMAGE);
        assert_eq!(config.waves.initial_size, INITIAL_WAVE_SIZE);
        assert_eq!(config.spawn.tank_unlock_wave, TANK_UNLOCK_WAVE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_override() {
        let config =
            GameConfig::from_json_str(r#"{"weapon":{"max_ammo":12},"waves":{"min_wave_secs":1.5}}"#)
                .unwrap();
        assert_eq!(config.weapon.max_ammo, 12);
        assert_eq!(config.weapon.damage, WEAPON_DAMAGE, "unlisted fields keep defaults");
        assert!((config.waves.min_wave_secs - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = GameConfig::from_json_str(r#"{"weapon":{"max_ammo":0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json_str(r#"{"spawn":{"min_distance":60.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here/horde.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("horde.json"));
    }

    #[test]
    fn test_wave_size_formula() {
        let config = GameConfig::default();
        assert_eq!(config.waves.wave_size(2), 9);
        assert_eq!(config.waves.wave_size(5), 15);
    }

    #[test]
    fn test_archetype_names() {
        let names: Vec<&str> = ZombieArchetype::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["walker", "runner", "tank"]);
        assert!(GameStatus::Playing.is_simulating());
        assert!(!GameStatus::Paused.is_simulating());
    }
}
