//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up the command channel and
//! the event bus, and exposes a builder-based API for embedders. The worker
//! advances the simulation at a fixed tick; commands arriving between ticks
//! are applied before the next step, keeping the simulation itself
//! single-threaded.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use gameplay_content::ContentFactory;
use gameplay_core::{AbilityRegistry, ClassSpec, GameplayConfig, ModifierSpec, ProjectileId};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::simulation::{CharacterId, Simulation};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub gameplay: GameplayConfig,
    /// Fixed simulation rate; the worker steps with `1 / tick_hz` seconds.
    pub tick_hz: u32,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            gameplay: GameplayConfig::default(),
            tick_hz: 60,
            event_buffer_size: 256,
            command_buffer_size: 64,
        }
    }
}

enum Command {
    SpawnClass {
        class: Box<ClassSpec>,
        reply: oneshot::Sender<CharacterId>,
    },
    SpawnByName {
        name: String,
        reply: oneshot::Sender<Result<CharacterId>>,
    },
    RequestAbility {
        character: CharacterId,
        slot: usize,
    },
    GrantXp {
        character: CharacterId,
        amount: f32,
    },
    ApplyPickup {
        character: CharacterId,
        modifier: ModifierSpec,
    },
    TakeDamage {
        character: CharacterId,
        amount: f32,
    },
    Heal {
        character: CharacterId,
        amount: f32,
    },
    ProjectileDespawned {
        character: CharacterId,
        projectile: ProjectileId,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Cloneable façade clients use to drive a running simulation.
#[derive(Clone)]
pub struct RuntimeHandle {
    commands: mpsc::Sender<Command>,
    bus: Arc<EventBus>,
}

impl RuntimeHandle {
    /// Subscribes to a topic on the event bus.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Spawns a character from an explicit class definition.
    pub async fn spawn_class(&self, class: ClassSpec) -> Result<CharacterId> {
        let (reply, response) = oneshot::channel();
        self.send(Command::SpawnClass {
            class: Box::new(class),
            reply,
        })
        .await?;
        response.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Spawns a character by class name from the loaded content catalog.
    pub async fn spawn_by_name(&self, name: impl Into<String>) -> Result<CharacterId> {
        let (reply, response) = oneshot::channel();
        self.send(Command::SpawnByName {
            name: name.into(),
            reply,
        })
        .await?;
        response.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Queues a cast request; the ability executes once it clears the
    /// unlock/cooldown gates on a subsequent tick.
    pub async fn request_ability(&self, character: CharacterId, slot: usize) -> Result<()> {
        self.send(Command::RequestAbility { character, slot }).await
    }

    pub async fn grant_xp(&self, character: CharacterId, amount: f32) -> Result<()> {
        self.send(Command::GrantXp { character, amount }).await
    }

    pub async fn apply_pickup(&self, character: CharacterId, modifier: ModifierSpec) -> Result<()> {
        self.send(Command::ApplyPickup {
            character,
            modifier,
        })
        .await
    }

    pub async fn take_damage(&self, character: CharacterId, amount: f32) -> Result<()> {
        self.send(Command::TakeDamage { character, amount }).await
    }

    pub async fn heal(&self, character: CharacterId, amount: f32) -> Result<()> {
        self.send(Command::Heal { character, amount }).await
    }

    /// Reports an early projectile despawn so its pool return is revoked.
    pub async fn projectile_despawned(
        &self,
        character: CharacterId,
        projectile: ProjectileId,
    ) -> Result<()> {
        self.send(Command::ProjectileDespawned {
            character,
            projectile,
        })
        .await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}

/// Builder for a [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    registry: AbilityRegistry,
    classes: Vec<ClassSpec>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            registry: AbilityRegistry::with_defaults(),
            classes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the ability registry (e.g. to add game-specific kinds).
    pub fn with_registry(mut self, registry: AbilityRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Adds class definitions for name-based spawning.
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = ClassSpec>) -> Self {
        self.classes.extend(classes);
        self
    }

    /// Loads gameplay config and the class catalog from a content data
    /// directory.
    pub fn with_content_dir(mut self, data_dir: impl AsRef<Path>) -> Result<Self> {
        let factory = ContentFactory::new(data_dir.as_ref());
        self.config.gameplay = factory.load_config()?;
        self.classes.extend(factory.load_classes()?);
        Ok(self)
    }

    /// Starts the simulation worker and returns the runtime.
    pub fn start(self) -> Runtime {
        let bus = Arc::new(EventBus::with_capacity(self.config.event_buffer_size));
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);

        let mut simulation = Simulation::with_registry(self.config.gameplay.clone(), self.registry);
        simulation.add_classes(self.classes);

        let tick = Duration::from_secs_f64(1.0 / f64::from(self.config.tick_hz.max(1)));
        let worker = tokio::spawn(run_worker(simulation, Arc::clone(&bus), command_rx, tick));

        tracing::info!(tick_hz = self.config.tick_hz, "runtime started");

        Runtime {
            handle: RuntimeHandle {
                commands: command_tx,
                bus,
            },
            worker,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the simulation worker; hand out [`RuntimeHandle`]s to drive it.
pub struct Runtime {
    handle: RuntimeHandle,
    worker: JoinHandle<()>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Starts a runtime with the given config and no preloaded content.
    pub fn start(config: RuntimeConfig) -> Self {
        RuntimeBuilder::new().with_config(config).start()
    }

    /// Returns a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribes to a topic on the event bus.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Stops the worker gracefully and waits for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        let (reply, response) = oneshot::channel();
        self.handle.send(Command::Shutdown { reply }).await?;
        response.await.map_err(|_| RuntimeError::ChannelClosed)?;
        self.worker.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

async fn run_worker(
    mut simulation: Simulation,
    bus: Arc<EventBus>,
    mut commands: mpsc::Receiver<Command>,
    tick: Duration,
) {
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let delta = tick.as_secs_f32();

    loop {
        tokio::select! {
            command = commands.recv() => {
                match command {
                    None => break,
                    Some(Command::Shutdown { reply }) => {
                        let _ = reply.send(());
                        break;
                    }
                    Some(command) => apply_command(&mut simulation, command),
                }
            }
            _ = interval.tick() => {
                for event in simulation.step(delta) {
                    bus.publish(event);
                }
            }
        }
    }

    tracing::info!(
        session_secs = simulation.session_elapsed(),
        roster = simulation.roster_len(),
        "simulation worker stopped"
    );
}

fn apply_command(simulation: &mut Simulation, command: Command) {
    let outcome = match command {
        Command::SpawnClass { class, reply } => {
            let id = simulation.spawn_class(&class);
            let _ = reply.send(id);
            Ok(())
        }
        Command::SpawnByName { name, reply } => {
            let _ = reply.send(simulation.spawn_by_name(&name));
            Ok(())
        }
        Command::RequestAbility { character, slot } => simulation.request_ability(character, slot),
        Command::GrantXp { character, amount } => simulation.grant_xp(character, amount),
        Command::ApplyPickup {
            character,
            modifier,
        } => simulation.apply_pickup(character, &modifier),
        Command::TakeDamage { character, amount } => simulation.take_damage(character, amount),
        Command::Heal { character, amount } => simulation.heal(character, amount),
        Command::ProjectileDespawned {
            character,
            projectile,
        } => simulation.projectile_despawned(character, projectile),
        Command::Shutdown { .. } => unreachable!("handled by the worker loop"),
    };

    if let Err(error) = outcome {
        tracing::warn!(%error, "command rejected");
    }
}
