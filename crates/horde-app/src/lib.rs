//! HORDE headless driver.
//!
//! Runs the simulation engine on its own frame-loop thread and bridges
//! JSON-lines input to it, standing in for the browser render loop,
//! keyboard/mouse input and HUD.

pub mod bridge;
pub mod game_loop;
pub mod state;

pub use horde_core as core;
