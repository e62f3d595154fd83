//! Input bridge: turns JSON-lines input into game loop traffic.
//!
//! Each non-blank line is either a `PlayerCommand` object
//! (`{"type":"Fire"}`) or one of the bare words `status` and `quit`.

use anyhow::{anyhow, Context, Result};

use horde_core::commands::PlayerCommand;
use horde_core::state::GameStateSnapshot;
use horde_sim::engine::SimConfig;

use crate::game_loop::{self, SnapshotSink};
use crate::state::{AppState, GameLoopCommand};

/// One parsed input line.
#[derive(Debug, Clone)]
pub enum BridgeRequest {
    Command(PlayerCommand),
    /// Print the latest snapshot.
    Status,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<BridgeRequest>> {
    let line = line.trim();
    match line {
        "" => Ok(None),
        "status" => Ok(Some(BridgeRequest::Status)),
        "quit" | "exit" => Ok(Some(BridgeRequest::Quit)),
        _ => {
            let command: PlayerCommand = serde_json::from_str(line)
                .with_context(|| format!("not a player command: {line}"))?;
            Ok(Some(BridgeRequest::Command(command)))
        }
    }
}

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig, sink: SnapshotSink) -> Result<()> {
    let mut running = state
        .running
        .lock()
        .map_err(|e| anyhow!("running flag poisoned: {e}"))?;

    if *running {
        return Err(anyhow!("Simulation already running"));
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), sink)
        .context("failed to spawn game loop thread")?;

    *state
        .command_tx
        .lock()
        .map_err(|e| anyhow!("command channel poisoned: {e}"))? = Some(cmd_tx);
    *state
        .loop_handle
        .lock()
        .map_err(|e| anyhow!("loop handle poisoned: {e}"))? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<()> {
    let tx_lock = state
        .command_tx
        .lock()
        .map_err(|e| anyhow!("command channel poisoned: {e}"))?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| anyhow!("Failed to send command: {e}")),
        None => Err(anyhow!("Simulation not started")),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|e| anyhow!("snapshot poisoned: {e}"))?;
    Ok(lock.clone())
}

/// Ask the game loop to stop and wait for it. A no-op if it never started.
pub fn stop_simulation(state: &AppState) -> Result<()> {
    let mut running = state
        .running
        .lock()
        .map_err(|e| anyhow!("running flag poisoned: {e}"))?;
    if !*running {
        return Ok(());
    }

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|e| anyhow!("command channel poisoned: {e}"))?
        .take()
    {
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state
        .loop_handle
        .lock()
        .map_err(|e| anyhow!("loop handle poisoned: {e}"))?
        .take();
    if let Some(handle) = handle {
        handle
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))?;
    }
    *running = false;
    Ok(())
}
