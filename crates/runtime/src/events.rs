//! Topic-based event bus for gameplay notifications.
//!
//! Core components record what happened; the runtime wraps each entry with
//! its character id and publishes it to the topic channel it belongs to.
//! Consumers subscribe to the topics they care about and ignore the rest.

use std::collections::HashMap;

use tokio::sync::broadcast;

use gameplay_core::{CombatCommand, GameplayEvent};

use crate::simulation::CharacterId;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Stat reads, modifier churn.
    Stats,
    /// XP and level-ups.
    Progression,
    /// Ability unlocks and executions.
    Ability,
    /// Outward-facing combat commands (spawn/return/expire).
    Combat,
    /// Health, death, resource changes.
    Entity,
}

const ALL_TOPICS: [Topic; 5] = [
    Topic::Stats,
    Topic::Progression,
    Topic::Ability,
    Topic::Combat,
    Topic::Entity,
];

/// An event published on the bus, tagged with the character it concerns.
#[derive(Debug, Clone)]
pub struct Event {
    pub character: CharacterId,
    pub kind: EventKind,
}

#[derive(Debug, Clone)]
pub enum EventKind {
    Gameplay(GameplayEvent),
    Command(CombatCommand),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match &self.kind {
            EventKind::Command(_) => Topic::Combat,
            EventKind::Gameplay(event) => match event {
                GameplayEvent::StatModified { .. }
                | GameplayEvent::ModifierAdded { .. }
                | GameplayEvent::ModifierRemoved { .. } => Topic::Stats,
                GameplayEvent::XpGained { .. } | GameplayEvent::LeveledUp { .. } => {
                    Topic::Progression
                }
                GameplayEvent::AbilityUnlocked { .. } | GameplayEvent::AbilityExecuted { .. } => {
                    Topic::Ability
                }
                GameplayEvent::HealthChanged { .. }
                | GameplayEvent::Died
                | GameplayEvent::ResourceChanged { .. } => Topic::Entity,
            },
        }
    }
}

/// Topic-based event bus.
///
/// Channels are created up front, one per topic, so publishing never
/// allocates and subscribing is lock-free.
pub struct EventBus {
    channels: HashMap<Topic, broadcast::Sender<Event>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = ALL_TOPICS
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self { channels }
    }

    /// Publishes an event to its topic. Lagging or absent subscribers are
    /// not an error — events are best-effort fan-out.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        let sender = self
            .channels
            .get(&topic)
            .expect("all topic channels are created up front");

        if sender.send(event).is_err() {
            tracing::trace!(?topic, "no subscribers for topic");
        }
    }

    /// Subscribes to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels
            .get(&topic)
            .expect("all topic channels are created up front")
            .subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
