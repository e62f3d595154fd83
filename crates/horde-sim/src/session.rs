//! Session record: the single mutable record of player-facing counters.
//!
//! Fields are public for reading; every change in gameplay goes through
//! one of the named transitions below.

use glam::Vec3;

use horde_core::config::GameConfig;
use horde_core::constants::{MAX_PITCH, PLAYER_START_Z};
use horde_core::enums::GameStatus;
use horde_core::types::aim_direction;

/// Movement keys currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Eye (camera) position.
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub vertical_velocity: f32,
    pub on_ground: bool,
    pub keys: MovementKeys,
}

impl PlayerState {
    pub fn spawn(eye_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, eye_height, PLAYER_START_Z),
            yaw: 0.0,
            pitch: 0.0,
            vertical_velocity: 0.0,
            on_ground: true,
            keys: MovementKeys::default(),
        }
    }

    pub fn aim_direction(&self) -> Vec3 {
        aim_direction(self.yaw, self.pitch)
    }

    pub fn look(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() {
            self.yaw = yaw;
        }
        if pitch.is_finite() {
            self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        }
    }
}

/// Outcome of a contact-damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Player survives with this much health.
    Wounded { remaining: i32 },
    /// Health hit zero; the session is over.
    Fatal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub status: GameStatus,
    pub health: i32,
    pub max_health: i32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub score: u32,
    pub kills: u32,
    pub wave: u32,
    pub player: PlayerState,

    // --- Wave bookkeeping ---
    /// Simulation time the current wave began.
    pub wave_started_at: f64,
    pub spawned_this_wave: u32,
    pub killed_this_wave: u32,

    // --- Flags resolved by scheduled tasks ---
    pub reloading: bool,
    /// Global contact-damage gate (also drives the damage flash).
    pub damage_cooldown: bool,
    pub recoil: bool,
}

impl SessionState {
    /// Idle record shown on the menu before the first session.
    pub fn menu(config: &GameConfig) -> Self {
        Self {
            status: GameStatus::Menu,
            ..Self::fresh(config, 0.0)
        }
    }

    /// A brand-new playing session.
    pub fn start(config: &GameConfig, now: f64) -> Self {
        Self::fresh(config, now)
    }

    fn fresh(config: &GameConfig, now: f64) -> Self {
        Self {
            status: GameStatus::Playing,
            health: config.player.max_health,
            max_health: config.player.max_health,
            ammo: config.weapon.max_ammo,
            max_ammo: config.weapon.max_ammo,
            score: 0,
            kills: 0,
            wave: 1,
            player: PlayerState::spawn(config.player.eye_height),
            wave_started_at: now,
            spawned_this_wave: 0,
            killed_this_wave: 0,
            reloading: false,
            damage_cooldown: false,
            recoil: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Subtract contact damage, clamping at zero. Zero health ends the session.
    pub fn apply_contact_damage(&mut self, damage: i32) -> DamageOutcome {
        let remaining = self.health - damage.max(0);
        if remaining <= 0 {
            self.health = 0;
            self.status = GameStatus::GameOver;
            DamageOutcome::Fatal
        } else {
            self.health = remaining;
            DamageOutcome::Wounded { remaining }
        }
    }

    /// Spend one round. Returns false (and changes nothing) when empty.
    pub fn consume_round(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    /// Start a reload. Ignored while already reloading or with a full magazine.
    pub fn begin_reload(&mut self) -> bool {
        if self.reloading || self.ammo >= self.max_ammo {
            return false;
        }
        self.reloading = true;
        true
    }

    pub fn complete_reload(&mut self) {
        self.ammo = self.max_ammo;
        self.reloading = false;
    }

    pub fn record_kill(&mut self, score_value: u32) {
        self.score += score_value;
        self.kills += 1;
        self.killed_this_wave += 1;
    }

    pub fn record_spawned(&mut self, count: u32) {
        self.spawned_this_wave += count;
    }

    /// Session side of a wave transition: bump the wave, heal, refill,
    /// reset per-wave counters. Returns the new wave number.
    pub fn advance_wave(&mut self, heal: i32, now: f64) -> u32 {
        self.wave += 1;
        self.health = (self.health + heal.max(0)).min(self.max_health);
        self.ammo = self.max_ammo;
        self.spawned_this_wave = 0;
        self.killed_this_wave = 0;
        self.wave_started_at = now;
        self.wave
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        true
    }
}
