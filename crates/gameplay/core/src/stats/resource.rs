//! Castable resource pool (mana/energy) with timed regeneration.

use crate::stats::mediator::{StatEvent, StatsMediator};
use crate::stats::StatKind;
use crate::timer::CountdownTimer;

/// Base parameters for a resource pool, defined per class in content data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceParams {
    pub starting_amount: f32,
    pub max_amount: f32,
    /// Resource granted per regen tick (before modifiers).
    pub regen_amount: f32,
    /// Seconds between regen ticks (before modifiers).
    pub regen_rate_secs: f32,
}

/// Notifications recorded by the resource pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResourceEvent {
    Changed { current: f32 },
}

/// A spendable pool. Maximum, regen amount, and regen rate are all resolved
/// through the pool's own mediator, so resource buffs are isolated from
/// core-stat and health buffs.
pub struct ResourcePool {
    mediator: StatsMediator,
    params: ResourceParams,
    current: f32,
    regen_timer: CountdownTimer,
    events: Vec<ResourceEvent>,
}

impl ResourcePool {
    pub fn new(params: ResourceParams) -> Self {
        let mut regen_timer = CountdownTimer::new(params.regen_rate_secs);
        regen_timer.start();

        Self {
            current: params.starting_amount,
            mediator: StatsMediator::new(),
            params,
            regen_timer,
            events: Vec::new(),
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Maximum pool size after modifiers.
    pub fn max_amount(&mut self) -> f32 {
        self.mediator
            .perform_query(StatKind::ResourceMax, self.params.max_amount)
    }

    /// Resource granted per regen tick, after modifiers.
    pub fn regen_amount(&mut self) -> f32 {
        self.mediator
            .perform_query(StatKind::ResourceAmount, self.params.regen_amount)
    }

    /// Seconds between regen ticks, after modifiers.
    pub fn regen_rate(&mut self) -> f32 {
        self.mediator
            .perform_query(StatKind::ResourceRate, self.params.regen_rate_secs)
    }

    /// Deducts `amount` if the pool can afford it. Affordability failure is
    /// expected and recoverable: the pool is left untouched and the caller
    /// aborts its one operation.
    pub fn spend(&mut self, amount: f32) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        self.events.push(ResourceEvent::Changed {
            current: self.current,
        });
        true
    }

    pub fn gain(&mut self, amount: f32) {
        let max = self.max_amount();
        self.current = (self.current + amount).min(max);
        self.events.push(ResourceEvent::Changed {
            current: self.current,
        });
    }

    /// Ticks the mediator and the regen timer. When the timer expires the
    /// pool gains the modified regen amount and the timer re-arms with the
    /// modified regen rate.
    pub fn update(&mut self, delta: f32) {
        self.mediator.update(delta);
        self.regen_timer.tick(delta);

        if self.regen_timer.just_stopped() {
            let amount = self.regen_amount();
            self.gain(amount);

            let rate = self.regen_rate();
            self.regen_timer.reset_to(rate);
            self.regen_timer.start();
        }
    }

    /// Refills the pool to its starting amount.
    pub fn reset(&mut self) {
        self.current = self.params.starting_amount;
        self.events.push(ResourceEvent::Changed {
            current: self.current,
        });
    }

    pub fn clear_modifiers(&mut self) {
        self.mediator.clear_modifiers();
    }

    pub fn drain_events(&mut self) -> Vec<ResourceEvent> {
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
