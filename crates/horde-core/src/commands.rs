//! Player commands delivered by the input collaborator.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a new session from the menu or the game-over screen.
    StartGame,
    /// Throw away the current session and start a fresh one.
    Restart,
    Pause,
    Resume,

    // --- Movement ---
    /// Replace the held movement keys.
    SetMovement {
        forward: bool,
        backward: bool,
        left: bool,
        right: bool,
        sprint: bool,
    },
    /// Set camera orientation (radians). Pitch is clamped.
    Look { yaw: f32, pitch: f32 },
    Jump,

    // --- Weapon ---
    Fire,
    Reload,
}
