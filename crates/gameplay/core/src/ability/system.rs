//! Per-entity ability set and the pending-cast queue.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::ability::ability::Ability;
use crate::ability::effect::CastContext;
use crate::ability::registry::AbilityError;
use crate::ability::spec::AbilityKind;
use crate::config::GameplayConfig;

/// Notifications recorded by the ability system.
#[derive(Clone, Debug, PartialEq)]
pub enum AbilityEvent {
    Unlocked { slot: usize, name: String },
    Executed { slot: usize, kind: AbilityKind },
}

/// Owns an entity's abilities and the FIFO of pending cast requests.
///
/// The queue is deliberately priority-free: each tick only the head is
/// considered, and a locked or cooling head blocks everything behind it
/// until it becomes executable. Fairness is traded for simplicity.
pub struct AbilitySystem {
    abilities: ArrayVec<Ability, { GameplayConfig::MAX_ABILITIES }>,
    queue: VecDeque<usize>,
    events: Vec<AbilityEvent>,
}

impl AbilitySystem {
    pub fn new() -> Self {
        Self {
            abilities: ArrayVec::new(),
            queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Adds an ability, returning its slot index.
    pub fn add_ability(&mut self, ability: Ability) -> Result<usize, AbilityError> {
        self.abilities.try_push(ability).map_err(|_| {
            AbilityError::SlotsFull {
                capacity: GameplayConfig::MAX_ABILITIES,
            }
        })?;
        Ok(self.abilities.len() - 1)
    }

    /// Queues a cast request for the ability in `slot`. Requests are
    /// accepted even while the ability is locked or cooling — they wait in
    /// the queue. Only an invalid slot is rejected.
    pub fn request(&mut self, slot: usize) -> bool {
        if slot >= self.abilities.len() {
            return false;
        }
        self.queue.push_back(slot);
        true
    }

    /// Per-frame tick: advances every cooldown timer, then attempts to
    /// dequeue the head request if its ability is unlocked and off cooldown.
    pub fn update(&mut self, delta: f32, ctx: &mut CastContext<'_>) {
        for ability in &mut self.abilities {
            ability.update_cooldown(delta);
        }

        if let Some(&slot) = self.queue.front() {
            let ability = &mut self.abilities[slot];
            if ability.is_unlocked() && !ability.is_on_cooldown() {
                self.queue.pop_front();
                if ability.execute(ctx) {
                    self.events.push(AbilityEvent::Executed {
                        slot,
                        kind: ability.kind(),
                    });
                }
            }
        }
    }

    /// Propagates a level-up to every ability, recording unlock events.
    pub fn handle_level_up(&mut self, level: u32) {
        for (slot, ability) in self.abilities.iter_mut().enumerate() {
            if ability.handle_level_up(level) {
                self.events.push(AbilityEvent::Unlocked {
                    slot,
                    name: ability.name().to_owned(),
                });
            }
        }
    }

    pub fn ability(&self, slot: usize) -> Option<&Ability> {
        self.abilities.get(slot)
    }

    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn queued_requests(&self) -> usize {
        self.queue.len()
    }

    /// Remaining cooldown fraction of the ability in `slot`.
    pub fn cooldown_progress(&self, slot: usize) -> Option<f32> {
        self.abilities.get(slot).map(Ability::cooldown_progress)
    }

    pub fn drain_events(&mut self) -> Vec<AbilityEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for AbilitySystem {
    fn default() -> Self {
        Self::new()
    }
}
