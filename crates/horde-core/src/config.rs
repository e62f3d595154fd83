//! Tuning configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! config file only needs to list what it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete gameplay tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerTuning,
    pub weapon: WeaponTuning,
    pub waves: WaveTuning,
    pub spawn: SpawnTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: i32,
    pub eye_height: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            eye_height: PLAYER_EYE_HEIGHT,
            walk_speed: PLAYER_WALK_SPEED,
            sprint_speed: PLAYER_SPRINT_SPEED,
            jump_velocity: PLAYER_JUMP_VELOCITY,
            gravity: GRAVITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    pub max_ammo: u32,
    pub damage: i32,
    pub reload_secs: f64,
    pub recoil_reset_secs: f64,
    pub max_range: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            max_ammo: MAX_AMMO,
            damage: WEAPON_DAMAGE,
            reload_secs: RELOAD_SECS,
            recoil_reset_secs: RECOIL_RESET_SECS,
            max_range: MAX_FIRE_RANGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    pub initial_size: u32,
    pub base_count: u32,
    pub count_per_level: u32,
    pub min_wave_secs: f64,
    pub clear_heal: i32,
    pub contact_radius: f32,
    pub damage_cooldown_secs: f64,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            initial_size: INITIAL_WAVE_SIZE,
            base_count: WAVE_BASE_COUNT,
            count_per_level: WAVE_COUNT_PER_LEVEL,
            min_wave_secs: MIN_WAVE_SECS,
            clear_heal: WAVE_CLEAR_HEAL,
            contact_radius: CONTACT_RADIUS,
            damage_cooldown_secs: DAMAGE_COOLDOWN_SECS,
        }
    }
}

impl WaveTuning {
    /// Number of zombies spawned when `wave` begins (after the first).
    pub fn wave_size(&self, wave: u32) -> u32 {
        self.base_count + self.count_per_level * wave
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub min_distance: f32,
    pub max_distance: f32,
    pub runner_unlock_wave: u32,
    pub runner_chance: f32,
    pub tank_unlock_wave: u32,
    pub tank_chance: f32,
    pub health_per_wave: i32,
    pub speed_per_wave: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            min_distance: SPAWN_MIN_DISTANCE,
            max_distance: SPAWN_MAX_DISTANCE,
            runner_unlock_wave: RUNNER_UNLOCK_WAVE,
            runner_chance: RUNNER_CHANCE,
            tank_unlock_wave: TANK_UNLOCK_WAVE,
            tank_chance: TANK_CHANCE,
            health_per_wave: HEALTH_PER_WAVE,
            speed_per_wave: SPEED_PER_WAVE,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            log::warn!("Rejected tuning: {err}");
            return Err(err);
        }
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(config)
    }

    /// Reject tuning the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.player.max_health <= 0 {
            return invalid("player.max_health must be positive");
        }
        if self.weapon.max_ammo == 0 {
            return invalid("weapon.max_ammo must be positive");
        }
        if self.weapon.damage <= 0 {
            return invalid("weapon.damage must be positive");
        }
        if self.weapon.reload_secs < 0.0 || self.weapon.recoil_reset_secs < 0.0 {
            return invalid("weapon timers must not be negative");
        }
        if self.waves.contact_radius <= 0.0 {
            return invalid("waves.contact_radius must be positive");
        }
        if self.waves.min_wave_secs < 0.0 || self.waves.damage_cooldown_secs < 0.0 {
            return invalid("wave timers must not be negative");
        }
        if self.spawn.min_distance <= 0.0 || self.spawn.min_distance >= self.spawn.max_distance {
            return invalid("spawn distances must satisfy 0 < min_distance < max_distance");
        }
        let chance_ok = |c: f32| (0.0..=1.0).contains(&c);
        if !chance_ok(self.spawn.runner_chance) || !chance_ok(self.spawn.tank_chance) {
            return invalid("spawn chances must lie in [0, 1]");
        }
        Ok(())
    }
}
