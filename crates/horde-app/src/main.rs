//! horde: run the HORDE simulation headless, driven by JSON lines on stdin.
//!
//! Usage:
//!   horde [--config tuning.json] [--seed N]
//!
//! Input (one per line):
//!   {"type":"StartGame"}  any PlayerCommand as JSON
//!   status                print the latest snapshot
//!   quit                  stop and exit

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use horde_app::bridge::{self, BridgeRequest};
use horde_app::game_loop::SnapshotSink;
use horde_app::state::AppState;
use horde_core::config::GameConfig;
use horde_sim::engine::SimConfig;

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    let options = parse_options(&args)?;

    let game = match &options.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let mut config = SimConfig {
        game,
        ..Default::default()
    };
    if let Some(seed) = options.seed {
        config.seed = seed;
    }
    log::info!("Starting HORDE with seed {}", config.seed);

    let state = AppState::new();
    bridge::start_simulation(&state, config, notice_printer())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match bridge::parse_line(&line) {
            Ok(None) => {}
            Ok(Some(BridgeRequest::Command(command))) => bridge::send_command(&state, command)?,
            Ok(Some(BridgeRequest::Status)) => {
                if let Some(snapshot) = bridge::get_snapshot(&state)? {
                    println!("{}", serde_json::to_string(&snapshot)?);
                }
            }
            Ok(Some(BridgeRequest::Quit)) => break,
            Err(err) => log::warn!("Ignoring input: {err:#}"),
        }
    }

    bridge::stop_simulation(&state)
}

/// Print scene events and notices as they happen, one JSON object per line.
fn notice_printer() -> SnapshotSink {
    Box::new(|snapshot| {
        for event in &snapshot.scene_events {
            if let Ok(json) = serde_json::to_string(event) {
                println!("{json}");
            }
        }
        for notice in &snapshot.notices {
            if let Ok(json) = serde_json::to_string(notice) {
                println!("{json}");
            }
        }
    })
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = iter.next() else {
                    bail!("--config needs a path");
                };
                options.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let Some(value) = iter.next() else {
                    bail!("--seed needs a number");
                };
                options.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid seed: {value}"))?,
                );
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(options)
}

fn print_usage() {
    eprintln!(
        "horde: headless HORDE simulation\n\
         \n\
           --config <path>  JSON tuning file (missing fields keep their defaults)\n\
           --seed <N>       RNG seed (default: 42)\n\
         \n\
         Reads one PlayerCommand JSON object per line from stdin, e.g.\n\
         \n\
           {{\"type\":\"StartGame\"}}\n\
           {{\"type\":\"Look\",\"yaw\":0.5,\"pitch\":0.0}}\n\
           {{\"type\":\"Fire\"}}\n\
         \n\
         `status` prints the latest snapshot, `quit` exits.\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        let options = parse_options(&args(&["--config", "tuning.json", "--seed", "9"])).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("tuning.json")));
        assert_eq!(options.seed, Some(9));

        assert!(parse_options(&[]).unwrap().config.is_none());
        assert!(parse_options(&args(&["--seed"])).is_err());
        assert!(parse_options(&args(&["--seed", "x"])).is_err());
        assert!(parse_options(&args(&["--verbose"])).is_err());
    }
}
