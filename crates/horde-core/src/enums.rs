//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session status (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Whether the per-frame systems run in this status.
    pub fn is_simulating(self) -> bool {
        self == GameStatus::Playing
    }
}

/// Zombie archetype. Fixed at spawn; selects base stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieArchetype {
    /// Baseline shambler.
    #[default]
    Walker,
    /// Fast and fragile. Unlocks on wave 3.
    Runner,
    /// Slow, tough, hits hard. Unlocks on wave 5.
    Tank,
}

impl ZombieArchetype {
    pub const ALL: [ZombieArchetype; 3] = [
        ZombieArchetype::Walker,
        ZombieArchetype::Runner,
        ZombieArchetype::Tank,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ZombieArchetype::Walker => "walker",
            ZombieArchetype::Runner => "runner",
            ZombieArchetype::Tank => "tank",
        }
    }
}

/// Severity of a player-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Critical,
}
