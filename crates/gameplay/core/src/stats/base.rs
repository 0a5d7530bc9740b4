//! Core combat stats resolved through the mediator.

use crate::stats::mediator::{StatEvent, StatsMediator};
use crate::stats::modifier::StatModifier;
use crate::stats::{Operation, StatKind};

/// Unmodified class baseline for the core stat group.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: f32,
    pub defense: f32,
    pub move_speed: f32,
    pub attack_speed: f32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            attack: 10.0,
            defense: 20.0,
            move_speed: 30.0,
            attack_speed: 1.0,
        }
    }
}

/// An entity's core stats. Every accessor runs a mediator query, so the
/// returned values always reflect the live modifier set (and every read
/// records a stat-modified notification — dependent systems rely on that).
pub struct Stats {
    mediator: StatsMediator,
    base: BaseStats,
}

impl Stats {
    pub fn new(base: BaseStats) -> Self {
        Self {
            mediator: StatsMediator::new(),
            base,
        }
    }

    pub fn attack(&mut self) -> f32 {
        self.mediator.perform_query(StatKind::Attack, self.base.attack)
    }

    pub fn defense(&mut self) -> f32 {
        self.mediator
            .perform_query(StatKind::Defense, self.base.defense)
    }

    pub fn move_speed(&mut self) -> f32 {
        self.mediator
            .perform_query(StatKind::MoveSpeed, self.base.move_speed)
    }

    pub fn attack_speed(&mut self) -> f32 {
        self.mediator
            .perform_query(StatKind::AttackSpeed, self.base.attack_speed)
    }

    pub fn base(&self) -> BaseStats {
        self.base
    }

    /// Registers the permanent attack and move speed bonuses for a gained
    /// level.
    pub fn level_up(&mut self, bonus: f32) {
        self.mediator.add_modifier(StatModifier::new(
            StatKind::Attack,
            Operation::Add(bonus),
            0.0,
        ));
        self.mediator.add_modifier(StatModifier::new(
            StatKind::MoveSpeed,
            Operation::Add(bonus),
            0.0,
        ));
    }

    pub fn update(&mut self, delta: f32) {
        self.mediator.update(delta);
    }

    pub fn clear_modifiers(&mut self) {
        self.mediator.clear_modifiers();
    }

    pub fn drain_stat_events(&mut self) -> Vec<StatEvent> {
        self.mediator.drain_events()
    }

    pub fn mediator(&self) -> &StatsMediator {
        &self.mediator
    }

    pub fn mediator_mut(&mut self) -> &mut StatsMediator {
        &mut self.mediator
    }
}
