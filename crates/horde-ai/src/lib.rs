//! Zombie AI for HORDE.
//!
//! Archetype descriptors, wave-gated spawn rolls and the pursuit step.
//! No ECS dependency; operates on plain data.

pub mod profiles;
pub mod pursuit;
pub mod spawn;

pub use horde_core as core;
