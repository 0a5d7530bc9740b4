//! Synchronous simulation state: the character roster and the tick.
//!
//! The simulation is single-threaded by design — one `step` per frame runs
//! every character's mediators, delayed effects, and ability queue in
//! declared order, then hands the accumulated events back for publishing.
//! The async runtime wraps this; headless tools and tests drive it directly.

use std::collections::HashMap;

use gameplay_core::{
    AbilityRegistry, Character, ClassSpec, GameplayConfig, ModifierSpec, ProjectileId,
    StopwatchTimer,
};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventKind};

/// Roster key for a spawned character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterId(pub u32);

/// The character roster plus the fixed-tick entry point.
pub struct Simulation {
    config: GameplayConfig,
    registry: AbilityRegistry,
    classes: HashMap<String, ClassSpec>,
    characters: Vec<(CharacterId, Character)>,
    next_id: u32,
    session: StopwatchTimer,
}

impl Simulation {
    pub fn new(config: GameplayConfig) -> Self {
        Self::with_registry(config, AbilityRegistry::with_defaults())
    }

    /// Builds a simulation around a custom ability registry (e.g. with
    /// game-specific effect kinds registered on top of the defaults).
    pub fn with_registry(config: GameplayConfig, registry: AbilityRegistry) -> Self {
        let mut session = StopwatchTimer::new();
        session.start();

        Self {
            config,
            registry,
            classes: HashMap::new(),
            characters: Vec::new(),
            next_id: 0,
            session,
        }
    }

    /// Registers a class catalog for name-based spawning.
    pub fn add_classes(&mut self, classes: impl IntoIterator<Item = ClassSpec>) {
        for class in classes {
            self.classes.insert(class.name.clone(), class);
        }
    }

    /// Spawns a character from a class definition. Abilities whose kind is
    /// not registered are skipped and logged, per the recoverable-factory
    /// contract.
    pub fn spawn_class(&mut self, class: &ClassSpec) -> CharacterId {
        let (character, skipped) = Character::from_class(class, &self.registry, &self.config);
        for error in &skipped {
            tracing::warn!(class = %class.name, %error, "skipping ability");
        }

        let id = CharacterId(self.next_id);
        self.next_id += 1;

        tracing::info!(?id, class = %class.name, abilities = character.abilities().len(), "spawned character");
        self.characters.push((id, character));
        id
    }

    /// Spawns a character by class name from the registered catalog.
    pub fn spawn_by_name(&mut self, name: &str) -> Result<CharacterId> {
        let class = self
            .classes
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownClass(name.to_owned()))?;
        Ok(self.spawn_class(&class))
    }

    /// Advances the whole roster by one frame and returns every event and
    /// combat command produced, tagged with its character.
    pub fn step(&mut self, delta: f32) -> Vec<Event> {
        self.session.tick(delta);

        let mut published = Vec::new();
        for (id, character) in &mut self.characters {
            character.update(delta);

            for event in character.drain_events() {
                published.push(Event {
                    character: *id,
                    kind: EventKind::Gameplay(event),
                });
            }
            for command in character.drain_commands() {
                published.push(Event {
                    character: *id,
                    kind: EventKind::Command(command),
                });
            }
        }
        published
    }

    pub fn request_ability(&mut self, id: CharacterId, slot: usize) -> Result<()> {
        let character = self.character_mut(id)?;
        if !character.request_ability(slot) {
            return Err(RuntimeError::UnknownAbilitySlot {
                character: id,
                slot,
            });
        }
        Ok(())
    }

    pub fn grant_xp(&mut self, id: CharacterId, amount: f32) -> Result<()> {
        self.character_mut(id)?.grant_xp(amount);
        Ok(())
    }

    pub fn apply_pickup(&mut self, id: CharacterId, modifier: &ModifierSpec) -> Result<()> {
        self.character_mut(id)?.apply_modifier(modifier);
        Ok(())
    }

    pub fn take_damage(&mut self, id: CharacterId, amount: f32) -> Result<()> {
        self.character_mut(id)?.take_damage(amount);
        Ok(())
    }

    pub fn heal(&mut self, id: CharacterId, amount: f32) -> Result<()> {
        self.character_mut(id)?.heal(amount);
        Ok(())
    }

    /// Reports an early projectile despawn so the scheduled pool return is
    /// revoked.
    pub fn projectile_despawned(&mut self, id: CharacterId, projectile: ProjectileId) -> Result<()> {
        self.character_mut(id)?.notify_projectile_despawned(projectile);
        Ok(())
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, c)| c)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Result<&mut Character> {
        self.characters
            .iter_mut()
            .find(|(cid, _)| *cid == id)
            .map(|(_, c)| c)
            .ok_or(RuntimeError::UnknownCharacter(id))
    }

    pub fn roster_len(&self) -> usize {
        self.characters.len()
    }

    /// Wall-clock-equivalent session time accumulated over steps.
    pub fn session_elapsed(&self) -> f32 {
        self.session.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameplay_core::{
        AbilityPayload, AbilitySpec, BaseStats, BuffParams, LevelCurve, OperatorKind,
        ResourceParams, StatKind,
    };

    fn class_with_buff() -> ClassSpec {
        ClassSpec {
            name: "Test".into(),
            base_stats: BaseStats::default(),
            max_health: 100.0,
            resource: ResourceParams {
                starting_amount: 50.0,
                max_amount: 100.0,
                regen_amount: 0.0,
                regen_rate_secs: 1.0,
            },
            level_curve: LevelCurve::constant(1.0),
            abilities: vec![AbilitySpec {
                name: "Focus".into(),
                unlock_level: 1,
                cooldown_secs: 2.0,
                resource_cost: 10.0,
                resource_generation: 0.0,
                payload: AbilityPayload::Buff(BuffParams {
                    stat: StatKind::Attack,
                    operator: OperatorKind::Add,
                    amount: 5.0,
                    duration_secs: 4.0,
                }),
            }],
        }
    }

    #[test]
    fn stepping_executes_queued_abilities_and_publishes_events() {
        let mut sim = Simulation::new(GameplayConfig::default());
        let id = sim.spawn_class(&class_with_buff());

        sim.request_ability(id, 0).unwrap();
        let events = sim.step(0.016);

        assert!(events.iter().any(|e| matches!(
            &e.kind,
            EventKind::Gameplay(gameplay_core::GameplayEvent::AbilityExecuted { slot: 0, .. })
        )));
        assert_eq!(sim.character(id).unwrap().resource().current(), 40.0);
    }

    #[test]
    fn unknown_targets_are_reported() {
        let mut sim = Simulation::new(GameplayConfig::default());
        assert!(matches!(
            sim.grant_xp(CharacterId(9), 10.0),
            Err(RuntimeError::UnknownCharacter(CharacterId(9)))
        ));

        let id = sim.spawn_class(&class_with_buff());
        assert!(matches!(
            sim.request_ability(id, 4),
            Err(RuntimeError::UnknownAbilitySlot { slot: 4, .. })
        ));

        assert!(matches!(
            sim.spawn_by_name("Nobody"),
            Err(RuntimeError::UnknownClass(_))
        ));
    }

    #[test]
    fn session_clock_accumulates_steps() {
        let mut sim = Simulation::new(GameplayConfig::default());
        sim.step(0.5);
        sim.step(0.25);
        assert!((sim.session_elapsed() - 0.75).abs() < 1e-6);
    }
}
