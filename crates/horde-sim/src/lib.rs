//! Simulation engine for HORDE.
//!
//! Owns the hecs world that holds the zombie roster, the session record and
//! the scheduled-task list, runs the per-frame systems and produces
//! `GameStateSnapshot`s for the presentation layer.

pub mod engine;
pub mod feedback;
pub mod session;
pub mod systems;
pub mod tasks;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use horde_core as core;
