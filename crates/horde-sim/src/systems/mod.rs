//! Systems that operate on the roster world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for queries).
//! Session-level state is passed in explicitly by the engine.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod timers;
pub mod wave;
