//! Game state snapshot: everything the presentation collaborator reads each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Notice, SceneEvent};
use crate::types::{SimTime, ZombieId};

/// Complete visible state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub status: GameStatus,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub wave: WaveView,
    pub score: ScoreView,
    /// Live and dead-pending-cleanup zombies, in roster order.
    pub zombies: Vec<ZombieView>,
    pub scene_events: Vec<SceneEvent>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: i32,
    pub max_health: i32,
    /// Eye position.
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Contact damage was applied less than a cooldown ago.
    pub damage_flash: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    pub recoil: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    pub spawned: u32,
    pub killed: u32,
    pub alive: u32,
    /// Seconds since the current wave began.
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub kills: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieView {
    pub id: ZombieId,
    pub archetype: ZombieArchetype,
    pub position: Vec3,
    pub facing: f32,
    pub health: i32,
    pub max_health: i32,
    pub is_dead: bool,
}
