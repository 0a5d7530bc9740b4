//! Health pool with mediator-backed maximum and a one-shot death signal.

use crate::stats::mediator::{StatEvent, StatsMediator};
use crate::stats::modifier::StatModifier;
use crate::stats::{Operation, StatKind};

/// Notifications recorded by the health component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HealthEvent {
    /// Health moved by `delta` (negative for damage).
    Changed { delta: f32, current: f32 },
    /// Health reached zero. Fired at most once until `reset`.
    Died,
}

/// An entity's health. The maximum is resolved through this component's own
/// mediator, so health buffs never share state with core stat buffs.
pub struct Health {
    mediator: StatsMediator,
    base_max: f32,
    current: f32,
    has_died: bool,
    events: Vec<HealthEvent>,
}

impl Health {
    pub fn new(base_max: f32) -> Self {
        Self {
            mediator: StatsMediator::new(),
            base_max,
            current: base_max,
            has_died: false,
            events: Vec::new(),
        }
    }

    /// Maximum health after modifiers.
    pub fn max_health(&mut self) -> f32 {
        self.mediator.perform_query(StatKind::Health, self.base_max)
    }

    pub fn current_health(&self) -> f32 {
        self.current
    }

    pub fn has_died(&self) -> bool {
        self.has_died
    }

    pub fn heal(&mut self, incoming_heal: f32) {
        let max = self.max_health();
        self.current = (self.current + incoming_heal).min(max);
        self.events.push(HealthEvent::Changed {
            delta: incoming_heal,
            current: self.current,
        });
    }

    /// Applies damage. Dead entities ignore further damage; the death signal
    /// fires exactly once when health first reaches zero.
    pub fn take_damage(&mut self, incoming_damage: f32) {
        if self.has_died {
            return;
        }

        let max = self.max_health();
        self.current = (self.current - incoming_damage).clamp(0.0, max);
        self.events.push(HealthEvent::Changed {
            delta: -incoming_damage,
            current: self.current,
        });

        if self.current <= 0.0 {
            self.has_died = true;
            self.events.push(HealthEvent::Died);
        }
    }

    /// Grants the permanent per-level health bonus, preserving the
    /// current/max ratio so a wounded entity stays proportionally wounded.
    pub fn level_up(&mut self, bonus: f32) {
        let old_max = self.max_health();
        let ratio = if old_max > 0.0 {
            self.current / old_max
        } else {
            1.0
        };

        self.mediator.add_modifier(StatModifier::new(
            StatKind::Health,
            Operation::Add(bonus),
            0.0,
        ));

        self.current = self.max_health() * ratio;
        self.events.push(HealthEvent::Changed {
            delta: 0.0,
            current: self.current,
        });
    }

    /// Clears the death flag and refills health to the current maximum.
    pub fn reset(&mut self) {
        self.has_died = false;
        self.current = self.max_health();
    }

    pub fn update(&mut self, delta: f32) {
        self.mediator.update(delta);
    }

    pub fn clear_modifiers(&mut self) {
        self.mediator.clear_modifiers();
    }

    pub fn drain_events(&mut self) -> Vec<HealthEvent> {
        std::mem::take(&mut self.events)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero_and_fires_death_once() {
        let mut health = Health::new(50.0);
        health.take_damage(30.0);
        assert_eq!(health.current_health(), 20.0);
        assert!(!health.has_died());

        health.take_damage(100.0);
        assert_eq!(health.current_health(), 0.0);
        assert!(health.has_died());

        // Further damage is ignored and no second death event is recorded.
        health.take_damage(10.0);
        let deaths = health
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, HealthEvent::Died))
            .count();
        assert_eq!(deaths, 1);
    }

    #[test]
    fn heal_never_exceeds_modified_maximum() {
        let mut health = Health::new(100.0);
        health.take_damage(50.0);
        health.heal(500.0);
        assert_eq!(health.current_health(), 100.0);
    }

    #[test]
    fn level_up_preserves_health_ratio() {
        let mut health = Health::new(100.0);
        health.take_damage(50.0);

        health.level_up(100.0);
        assert_eq!(health.max_health(), 200.0);
        assert_eq!(health.current_health(), 100.0);
    }

    #[test]
    fn reset_clears_death_and_refills() {
        let mut health = Health::new(40.0);
        health.take_damage(40.0);
        assert!(health.has_died());

        health.reset();
        assert!(!health.has_died());
        assert_eq!(health.current_health(), 40.0);
    }
}
