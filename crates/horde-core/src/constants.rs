//! Simulation constants and tuning defaults.
//!
//! Distances are world units, times are seconds, speeds are units per second.

// --- Frame loop ---

/// Nominal driver frame rate (Hz).
pub const FRAME_RATE: u32 = 60;

/// Largest frame delta the simulation will integrate in one step.
pub const MAX_FRAME_DT: f32 = 0.1;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Camera height above the ground when standing.
pub const PLAYER_EYE_HEIGHT: f32 = 1.6;

/// Player spawn point (eye position).
pub const PLAYER_START_Z: f32 = 5.0;

pub const PLAYER_WALK_SPEED: f32 = 5.0;

pub const PLAYER_SPRINT_SPEED: f32 = 10.0;

pub const PLAYER_JUMP_VELOCITY: f32 = 15.0;

pub const GRAVITY: f32 = 500.0;

/// Pitch limit for the look command (radians, ~89 degrees).
pub const MAX_PITCH: f32 = 1.553;

// --- Weapon ---

pub const MAX_AMMO: u32 = 30;

/// Damage per shot of the base loadout.
pub const WEAPON_DAMAGE: i32 = 25;

pub const RELOAD_SECS: f64 = 2.0;

/// How long the recoil kick is shown after a shot.
pub const RECOIL_RESET_SECS: f64 = 0.1;

/// Hitscan range.
pub const MAX_FIRE_RANGE: f32 = 200.0;

// --- Contact ---

/// Planar distance under which a live zombie touches the player.
pub const CONTACT_RADIUS: f32 = 1.0;

/// Global gate between two contact-damage applications.
pub const DAMAGE_COOLDOWN_SECS: f64 = 1.0;

// --- Waves ---

/// Zombies spawned when a session starts.
pub const INITIAL_WAVE_SIZE: u32 = 5;

/// Next-wave size is `WAVE_BASE_COUNT + WAVE_COUNT_PER_LEVEL * new_wave`.
pub const WAVE_BASE_COUNT: u32 = 5;

pub const WAVE_COUNT_PER_LEVEL: u32 = 2;

/// A wave cannot clear before it has been running this long.
pub const MIN_WAVE_SECS: f64 = 5.0;

/// Health restored when a wave clears (capped at max).
pub const WAVE_CLEAR_HEAL: i32 = 20;

// --- Spawning ---

pub const SPAWN_MIN_DISTANCE: f32 = 30.0;

pub const SPAWN_MAX_DISTANCE: f32 = 50.0;

pub const RUNNER_UNLOCK_WAVE: u32 = 3;

pub const RUNNER_CHANCE: f32 = 0.4;

pub const TANK_UNLOCK_WAVE: u32 = 5;

pub const TANK_CHANCE: f32 = 0.2;

/// Added to base health per wave after the first.
pub const HEALTH_PER_WAVE: i32 = 10;

/// Added to base speed per wave after the first.
pub const SPEED_PER_WAVE: f32 = 0.2;

// --- Archetypes ---

pub const WALKER_HEALTH: i32 = 100;
pub const WALKER_SPEED: f32 = 3.0;
pub const WALKER_DAMAGE: i32 = 15;
pub const WALKER_SCORE: u32 = 100;

pub const RUNNER_HEALTH: i32 = 50;
pub const RUNNER_SPEED: f32 = 5.0;
pub const RUNNER_DAMAGE: i32 = 10;
pub const RUNNER_SCORE: u32 = 150;

pub const TANK_HEALTH: i32 = 200;
pub const TANK_SPEED: f32 = 2.0;
pub const TANK_DAMAGE: i32 = 25;
pub const TANK_SCORE: u32 = 300;
