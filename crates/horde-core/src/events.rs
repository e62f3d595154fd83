//! Events emitted by the simulation for the scene and notification collaborators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::ZombieId;

/// Requests to add or remove a visual representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    ZombieSpawned {
        id: ZombieId,
        archetype: ZombieArchetype,
        position: Vec3,
    },
    ZombieRemoved { id: ZombieId },
}

/// Fire-and-forget message for the toast/log collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: Option<String>,
    pub message: String,
    /// Simulation time the notice was raised at.
    pub time_secs: f64,
}
