//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the roster world, the session record and the
//! scheduled tasks, processes player commands, runs all systems once per
//! frame and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horde_core::commands::PlayerCommand;
use horde_core::components::Zombie;
use horde_core::config::GameConfig;
use horde_core::constants::MAX_FRAME_DT;
use horde_core::enums::{GameStatus, NoticeLevel, ZombieArchetype};
use horde_core::events::SceneEvent;
use horde_core::state::GameStateSnapshot;
use horde_core::types::{Ray, SimTime, ZombieId};

use crate::feedback::Feedback;
use crate::session::{DamageOutcome, MovementKeys, SessionState};
use crate::systems;
use crate::systems::combat::FireOutcome;
use crate::tasks::{ScheduledTasks, TaskKind};

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the roster and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: GameConfig,
    rng: ChaCha8Rng,
    session: SessionState,
    tasks: ScheduledTasks,
    next_zombie_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    feedback: Feedback,
    last_fire: Option<FireOutcome>,
}

impl SimulationEngine {
    /// Create a new engine sitting on the menu.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            session: SessionState::menu(&config.game),
            config: config.game,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tasks: ScheduledTasks::default(),
            next_zombie_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            feedback: Feedback::default(),
            last_fire: None,
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot. `dt` is clamped to [0, MAX_FRAME_DT].
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.session.status.is_simulating() {
            let dt = clamp_frame_dt(dt);
            self.time.advance(dt);
            self.run_systems(dt);
        }

        let (scene_events, notices) = self.feedback.take();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.session,
            scene_events,
            notices,
        )
    }

    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn tasks(&self) -> &ScheduledTasks {
        &self.tasks
    }

    /// Get a read-only reference to the roster world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Outcome of the most recent shot that reached the hit test.
    pub fn last_fire(&self) -> Option<FireOutcome> {
        self.last_fire
    }

    /// Place a zombie of a chosen archetype at `position` as part of the
    /// current wave. Used for scripted setups and tests.
    pub fn spawn_zombie_at(&mut self, archetype: ZombieArchetype, position: Vec3) -> ZombieId {
        let id = systems::spawner::spawn_one(
            &mut self.world,
            &mut self.next_zombie_id,
            self.session.wave,
            archetype,
            position,
            &self.config.spawn,
            &mut self.feedback,
        );
        self.session.record_spawned(1);
        id
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.session.status, GameStatus::Menu | GameStatus::GameOver) {
                    self.start_session();
                } else {
                    log::debug!("StartGame ignored while {:?}", self.session.status);
                }
            }
            PlayerCommand::Restart => self.start_session(),
            PlayerCommand::Pause => {
                if self.session.pause() {
                    systems::timers::cancel_reload(&mut self.session, &mut self.tasks);
                    log::info!("Paused at wave {}", self.session.wave);
                }
            }
            PlayerCommand::Resume => {
                if self.session.resume() {
                    log::info!("Resumed");
                }
            }
            PlayerCommand::SetMovement {
                forward,
                backward,
                left,
                right,
                sprint,
            } => {
                self.session.player.keys = MovementKeys {
                    forward,
                    backward,
                    left,
                    right,
                    sprint,
                };
            }
            PlayerCommand::Look { yaw, pitch } => self.session.player.look(yaw, pitch),
            PlayerCommand::Jump => {
                if self.session.is_playing() {
                    systems::movement::jump(&mut self.session.player, &self.config.player);
                }
            }
            PlayerCommand::Fire => self.fire(),
            PlayerCommand::Reload => self.reload(),
        }
    }

    /// Replace the session wholesale and spawn the first wave.
    fn start_session(&mut self) {
        for (_entity, zombie) in self.world.query::<&Zombie>().iter() {
            if !zombie.is_dead {
                self.feedback
                    .scene(SceneEvent::ZombieRemoved { id: zombie.id });
            }
        }
        self.world.clear();
        self.tasks.clear();
        self.time = SimTime::default();
        self.last_fire = None;
        self.session = SessionState::start(&self.config, self.time.elapsed_secs);

        let count = self.config.waves.initial_size;
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_zombie_id,
            &mut self.session,
            count,
            &self.config.spawn,
            &mut self.feedback,
        );
        self.feedback.notice(
            NoticeLevel::Info,
            Some("Wave 1"),
            "Zombies are coming!",
            self.time.elapsed_secs,
        );
    }

    fn fire(&mut self) {
        if !self.session.is_playing() {
            log::debug!("Fire ignored while {:?}", self.session.status);
            return;
        }
        if self.session.reloading {
            return;
        }

        let now = self.time.elapsed_secs;
        if !self.session.consume_round() {
            self.feedback.notice(
                NoticeLevel::Warning,
                None,
                "Click! Your weapon is empty. Press R to reload.",
                now,
            );
            self.reload();
            return;
        }

        self.session.recoil = true;
        self.tasks.schedule(
            TaskKind::RecoilReset,
            now + self.config.weapon.recoil_reset_secs,
        );

        let player = &self.session.player;
        let ray = Ray::new(player.position, player.aim_direction());
        let outcome = systems::combat::fire(
            &mut self.world,
            &ray,
            self.config.weapon.damage,
            self.config.weapon.max_range,
            &mut self.feedback,
        );
        self.last_fire = Some(outcome);

        if let FireOutcome::Kill {
            archetype,
            score_value,
            ..
        } = outcome
        {
            self.session.record_kill(score_value);
            self.feedback.notice(
                NoticeLevel::Info,
                None,
                format!("Killed a {} (+{score_value})", archetype.as_str()),
                now,
            );
        }
    }

    fn reload(&mut self) {
        if !self.session.is_playing() || !self.session.begin_reload() {
            return;
        }
        let now = self.time.elapsed_secs;
        self.tasks
            .schedule(TaskKind::ReloadComplete, now + self.config.weapon.reload_secs);
        self.feedback
            .notice(NoticeLevel::Info, None, "Reloading...", now);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let now = self.time.elapsed_secs;

        // 1. Scheduled tasks (reload, damage cooldown, recoil)
        systems::timers::run(&mut self.session, &mut self.tasks, now, &mut self.feedback);
        // 2. Player locomotion
        systems::movement::run_player(&mut self.session.player, &self.config.player, dt);
        // 3. Zombie pursuit
        systems::movement::run_zombies(&mut self.world, self.session.player.position, dt);
        // 4. Contact damage
        self.resolve_contact(now);
        if !self.session.is_playing() {
            return;
        }
        // 5. Wave completion
        systems::wave::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_zombie_id,
            &mut self.session,
            &self.config,
            now,
            &mut self.despawn_buffer,
            &mut self.feedback,
        );
    }

    /// Apply contact damage from the first touching zombie, at most once
    /// per cooldown regardless of how many zombies are touching.
    fn resolve_contact(&mut self, now: f64) {
        let Some(contact) = systems::collision::check(
            &self.world,
            self.session.player.position,
            self.config.waves.contact_radius,
        ) else {
            return;
        };
        if self.session.damage_cooldown {
            return;
        }

        self.session.damage_cooldown = true;
        self.tasks.schedule(
            TaskKind::DamageCooldownEnd,
            now + self.config.waves.damage_cooldown_secs,
        );

        match self.session.apply_contact_damage(contact.damage) {
            DamageOutcome::Wounded { remaining } => {
                log::debug!(
                    "{} hit the player for {} ({} left)",
                    contact.zombie_id,
                    contact.damage,
                    remaining
                );
            }
            DamageOutcome::Fatal => {
                systems::timers::cancel_on_game_over(&mut self.session, &mut self.tasks);
                self.feedback.notice(
                    NoticeLevel::Critical,
                    Some("Game over"),
                    format!(
                        "Survived to wave {} with {} kills, score {}",
                        self.session.wave, self.session.kills, self.session.score
                    ),
                    now,
                );
            }
        }
    }
}

/// Clamp a frame delta to [0, MAX_FRAME_DT]; non-finite deltas count as 0.
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}
