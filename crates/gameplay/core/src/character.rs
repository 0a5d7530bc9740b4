//! Character aggregation: stats, health, resource, experience, abilities.
//!
//! A character is the per-entity unit the runtime ticks. Ownership is
//! one-directional — the character owns its ability system, which owns its
//! abilities; abilities borrow the character's parts through a cast context
//! and hold no references back.

use crate::ability::{AbilityError, AbilityRegistry, AbilitySystem, CastContext};
use crate::ability::{AbilityEvent, AbilitySpec};
use crate::config::GameplayConfig;
use crate::events::{
    CombatCommand, DeferredEffect, EffectIdAllocator, GameplayEvent, ProjectileId,
};
use crate::schedule::DelayQueue;
use crate::stats::{
    BaseStats, Experience, Health, HealthEvent, LevelCurve, ModifierSpec, ResourceEvent,
    ResourceParams, ResourcePool, StatEvent, StatKind, StatModifier, Stats,
};

/// Data-driven character class definition: baseline numbers, leveling curve,
/// and the ability loadout. Deserialized from the content catalogs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSpec {
    pub name: String,
    pub base_stats: BaseStats,
    pub max_health: f32,
    pub resource: ResourceParams,
    /// Permanent per-level bonus magnitude, evaluated at the reached level.
    pub level_curve: LevelCurve,
    pub abilities: Vec<AbilitySpec>,
}

/// A playable or AI-driven entity.
///
/// Health, core stats, and resource each own an independent mediator; their
/// modifier populations never mix. `update` must be called once per frame
/// with the frame delta — mediators tick before the ability queue, always.
pub struct Character {
    name: String,
    stats: Stats,
    health: Health,
    resource: ResourcePool,
    xp: Experience,
    abilities: AbilitySystem,
    level_curve: LevelCurve,
    delayed: DelayQueue<DeferredEffect>,
    ids: EffectIdAllocator,
    commands: Vec<CombatCommand>,
    events: Vec<GameplayEvent>,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        base_stats: BaseStats,
        max_health: f32,
        resource: ResourceParams,
        level_curve: LevelCurve,
        config: &GameplayConfig,
    ) -> Self {
        Self {
            name: name.into(),
            stats: Stats::new(base_stats),
            health: Health::new(max_health),
            resource: ResourcePool::new(resource),
            xp: Experience::with_config(config),
            abilities: AbilitySystem::new(),
            level_curve,
            delayed: DelayQueue::new(),
            ids: EffectIdAllocator::new(),
            commands: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Builds a character from a class definition, creating its abilities
    /// through the registry. Abilities whose kind has no registered
    /// constructor (or that exceed the slot capacity) are skipped; the
    /// errors are returned for the caller to log.
    pub fn from_class(
        class: &ClassSpec,
        registry: &AbilityRegistry,
        config: &GameplayConfig,
    ) -> (Self, Vec<AbilityError>) {
        let mut character = Self::new(
            class.name.clone(),
            class.base_stats,
            class.max_health,
            class.resource.clone(),
            class.level_curve.clone(),
            config,
        );

        let mut skipped = Vec::new();
        for spec in &class.abilities {
            match registry.create(spec) {
                Ok(ability) => {
                    if let Err(error) = character.abilities.add_ability(ability) {
                        skipped.push(error);
                    }
                }
                Err(error) => skipped.push(error),
            }
        }

        (character, skipped)
    }

    /// Per-frame tick. Order is fixed: the three mediators first, then the
    /// delayed effects, then the ability system (cooldowns, then the queue).
    pub fn update(&mut self, delta: f32) {
        self.health.update(delta);
        self.stats.update(delta);
        self.resource.update(delta);

        for effect in self.delayed.tick(delta) {
            self.commands.push(match effect {
                DeferredEffect::ReturnProjectile(id) => CombatCommand::ReturnProjectile { id },
                DeferredEffect::ExpireAreaDenial(id) => CombatCommand::ExpireAreaDenial { id },
            });
        }

        let mut ctx = CastContext {
            stats: &mut self.stats,
            resource: &mut self.resource,
            delayed: &mut self.delayed,
            commands: &mut self.commands,
            ids: &mut self.ids,
        };
        self.abilities.update(delta, &mut ctx);

        self.collect_events();
    }

    /// Queues a cast request for the ability in `slot`.
    pub fn request_ability(&mut self, slot: usize) -> bool {
        self.abilities.request(slot)
    }

    /// Grants XP, propagating any level-ups to stats, health, and ability
    /// unlocks.
    pub fn grant_xp(&mut self, amount: f32) {
        let reached = self.xp.gain(amount);
        self.events.push(GameplayEvent::XpGained {
            amount,
            current: self.xp.current_xp(),
            requirement: self.xp.requirement(),
        });

        for level in reached {
            let bonus = self.level_curve.evaluate(level as f32);
            self.stats.level_up(bonus);
            self.health.level_up(bonus);
            self.abilities.handle_level_up(level);
            self.events.push(GameplayEvent::LeveledUp { level });
        }
    }

    /// Registers a pickup/debuff modifier, routed to the mediator that owns
    /// the targeted stat kind.
    pub fn apply_modifier(&mut self, spec: &ModifierSpec) {
        let modifier = StatModifier::from_spec(spec);
        match spec.stat {
            StatKind::Health => self.health.mediator_mut().add_modifier(modifier),
            StatKind::ResourceAmount | StatKind::ResourceRate | StatKind::ResourceMax => {
                self.resource.mediator_mut().add_modifier(modifier)
            }
            _ => self.stats.mediator_mut().add_modifier(modifier),
        }
    }

    /// Applies damage. Crossing into death force-expires every
    /// duration-bound modifier on all three mediators (permanent level-up
    /// bonuses survive).
    pub fn take_damage(&mut self, amount: f32) {
        let was_dead = self.health.has_died();
        self.health.take_damage(amount);

        if !was_dead && self.health.has_died() {
            self.clear_all_modifiers();
        }
    }

    pub fn heal(&mut self, amount: f32) {
        self.health.heal(amount);
    }

    /// Force-expires duration-bound modifiers on every mediator.
    pub fn clear_all_modifiers(&mut self) {
        self.stats.clear_modifiers();
        self.health.clear_modifiers();
        self.resource.clear_modifiers();
    }

    /// Revives/respawns: clears the death flag and refills pools.
    pub fn reset(&mut self) {
        self.health.reset();
        self.resource.reset();
    }

    /// Revokes the scheduled pool return for a projectile that despawned
    /// early (hit a wall or a target). Returns true when a return was
    /// actually pending.
    pub fn notify_projectile_despawned(&mut self, id: ProjectileId) -> bool {
        self.delayed
            .cancel_where(|e| matches!(e, DeferredEffect::ReturnProjectile(p) if *p == id))
            > 0
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.xp.level()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }

    pub fn resource(&self) -> &ResourcePool {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut ResourcePool {
        &mut self.resource
    }

    pub fn abilities(&self) -> &AbilitySystem {
        &self.abilities
    }

    pub fn abilities_mut(&mut self) -> &mut AbilitySystem {
        &mut self.abilities
    }

    /// Remaining cooldown fraction for a slot, for UI overlays.
    pub fn cooldown_progress(&self, slot: usize) -> Option<f32> {
        self.abilities.cooldown_progress(slot)
    }

    /// Drains everything observable that happened since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameplayEvent> {
        self.collect_events();
        std::mem::take(&mut self.events)
    }

    /// Drains the pending outward-facing combat commands.
    pub fn drain_commands(&mut self) -> Vec<CombatCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Folds component-local notifications into the character event queue.
    fn collect_events(&mut self) {
        for event in self.health.drain_stat_events() {
            self.events.push(stat_event(event));
        }
        for event in self.stats.drain_stat_events() {
            self.events.push(stat_event(event));
        }
        for event in self.resource.drain_stat_events() {
            self.events.push(stat_event(event));
        }

        for event in self.health.drain_events() {
            self.events.push(match event {
                HealthEvent::Changed { delta, current } => {
                    GameplayEvent::HealthChanged { delta, current }
                }
                HealthEvent::Died => GameplayEvent::Died,
            });
        }

        for ResourceEvent::Changed { current } in self.resource.drain_events() {
            self.events.push(GameplayEvent::ResourceChanged { current });
        }

        for event in self.abilities.drain_events() {
            self.events.push(match event {
                AbilityEvent::Unlocked { slot, name } => {
                    GameplayEvent::AbilityUnlocked { slot, name }
                }
                AbilityEvent::Executed { slot, kind } => {
                    GameplayEvent::AbilityExecuted { slot, kind }
                }
            });
        }
    }
}

fn stat_event(event: StatEvent) -> GameplayEvent {
    match event {
        StatEvent::Modified(stat) => GameplayEvent::StatModified { stat },
        StatEvent::ModifierAdded(stat) => GameplayEvent::ModifierAdded { stat },
        StatEvent::ModifierRemoved(stat) => GameplayEvent::ModifierRemoved { stat },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{AbilityPayload, BuffParams, ProjectileParams};
    use crate::stats::{Operation, OperatorKind};

    fn test_class() -> ClassSpec {
        ClassSpec {
            name: "Vanguard".into(),
            base_stats: BaseStats::default(),
            max_health: 100.0,
            resource: ResourceParams {
                starting_amount: 50.0,
                max_amount: 100.0,
                regen_amount: 5.0,
                regen_rate_secs: 1.0,
            },
            level_curve: LevelCurve::constant(2.0),
            abilities: vec![
                AbilitySpec {
                    name: "Fireball".into(),
                    unlock_level: 1,
                    cooldown_secs: 1.0,
                    resource_cost: 10.0,
                    resource_generation: 0.0,
                    payload: AbilityPayload::Projectile(ProjectileParams {
                        speed: 20.0,
                        damage_scalar: 1.5,
                        timeout_secs: 3.0,
                        piercing: false,
                    }),
                },
                AbilitySpec {
                    name: "War Cry".into(),
                    unlock_level: 3,
                    cooldown_secs: 5.0,
                    resource_cost: 20.0,
                    resource_generation: 0.0,
                    payload: AbilityPayload::Buff(BuffParams {
                        stat: StatKind::Attack,
                        operator: OperatorKind::Multiply,
                        amount: 2.0,
                        duration_secs: 3.0,
                    }),
                },
            ],
        }
    }

    fn spawn() -> Character {
        let registry = AbilityRegistry::with_defaults();
        let (character, skipped) =
            Character::from_class(&test_class(), &registry, &GameplayConfig::default());
        assert!(skipped.is_empty());
        character
    }

    #[test]
    fn permanent_and_timed_modifiers_compose_then_decay() {
        let mut character = spawn();

        // Permanent +5, temporary ×2 for 3 s.
        character.apply_modifier(&ModifierSpec {
            stat: StatKind::Attack,
            operator: OperatorKind::Add,
            value: 5.0,
            duration_secs: 0.0,
        });
        character.stats_mut().mediator_mut().add_modifier(StatModifier::new(
            StatKind::Attack,
            Operation::Multiply(2.0),
            3.0,
        ));

        assert_eq!(character.stats_mut().attack(), 30.0);

        character.update(4.0);
        assert_eq!(character.stats_mut().attack(), 15.0);
    }

    #[test]
    fn level_up_unlocks_abilities_and_grows_stats() {
        let mut character = spawn();
        assert!(!character.abilities().ability(1).unwrap().is_unlocked());

        // 50 + 62.5 XP reaches level 3.
        character.grant_xp(120.0);

        assert_eq!(character.level(), 3);
        assert!(character.abilities().ability(1).unwrap().is_unlocked());
        // Two level-ups at +2 each on top of base 10.
        assert_eq!(character.stats_mut().attack(), 14.0);

        let events = character.drain_events();
        assert!(events.contains(&GameplayEvent::LeveledUp { level: 2 }));
        assert!(events.contains(&GameplayEvent::LeveledUp { level: 3 }));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameplayEvent::AbilityUnlocked { slot: 1, .. })));
    }

    #[test]
    fn projectile_cast_emits_spawn_and_scheduled_return() {
        let mut character = spawn();

        character.request_ability(0);
        character.update(0.016);

        let commands = character.drain_commands();
        assert!(matches!(
            commands.as_slice(),
            [CombatCommand::SpawnProjectile { damage, .. }] if *damage == 15.0
        ));

        // Flight timeout elapses: the pooled return fires.
        character.update(3.5);
        let commands = character.drain_commands();
        assert!(matches!(
            commands.as_slice(),
            [CombatCommand::ReturnProjectile { .. }]
        ));
    }

    #[test]
    fn early_despawn_revokes_the_scheduled_pool_return() {
        let mut character = spawn();

        character.request_ability(0);
        character.update(0.016);
        let commands = character.drain_commands();
        let [CombatCommand::SpawnProjectile { id, .. }] = commands.as_slice() else {
            panic!("expected a spawn command");
        };

        assert!(character.notify_projectile_despawned(*id));

        character.update(5.0);
        assert!(character.drain_commands().is_empty());

        // Revoking twice reports nothing pending.
        assert!(!character.notify_projectile_despawned(*id));
    }

    #[test]
    fn death_clears_buffs_but_keeps_level_bonuses() {
        let mut character = spawn();
        character.grant_xp(50.0); // level 2: +2 permanent attack
        character.apply_modifier(&ModifierSpec {
            stat: StatKind::Attack,
            operator: OperatorKind::Multiply,
            value: 3.0,
            duration_secs: 60.0,
        });
        assert_eq!(character.stats_mut().attack(), 36.0);

        character.take_damage(1000.0);
        assert!(character.health().has_died());
        assert_eq!(character.stats_mut().attack(), 12.0);

        let events = character.drain_events();
        assert!(events.contains(&GameplayEvent::Died));
    }

    #[test]
    fn reset_revives_with_full_pools() {
        let mut character = spawn();
        character.take_damage(1000.0);
        assert!(character.health().has_died());

        character.reset();
        assert!(!character.health().has_died());
        assert_eq!(character.health().current_health(), 100.0);
        assert_eq!(character.resource().current(), 50.0);
    }

    #[test]
    fn unregistered_ability_kind_is_skipped_with_an_error() {
        let registry = AbilityRegistry::new();
        let (character, skipped) =
            Character::from_class(&test_class(), &registry, &GameplayConfig::default());

        assert!(character.abilities().is_empty());
        assert_eq!(skipped.len(), 2);
    }
}
