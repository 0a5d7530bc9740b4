//! Query-time stat aggregation with per-kind caching.
//!
//! The mediator owns the active modifier list for one stat group and answers
//! "what is stat X worth given base value B" queries by folding the cached
//! per-kind subset through an [`ApplicationOrder`]. The active list is owned
//! exclusively by the mediator; all mutation goes through [`add_modifier`]
//! and the disposal pass inside [`update`].
//!
//! [`add_modifier`]: StatsMediator::add_modifier
//! [`update`]: StatsMediator::update

use std::collections::HashMap;

use crate::stats::modifier::StatModifier;
use crate::stats::order::{ApplicationOrder, NormalOrder};
use crate::stats::StatKind;

/// A request to resolve a stat's current value from a base value.
#[derive(Clone, Copy, Debug)]
pub struct StatQuery {
    pub stat: StatKind,
    pub value: f32,
}

impl StatQuery {
    pub fn new(stat: StatKind, value: f32) -> Self {
        Self { stat, value }
    }
}

/// Notifications recorded by the mediator, drained by the owner once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatEvent {
    /// A stat was modified or read. Raised on every query by design so
    /// dependent systems react to reads, not just mutations.
    Modified(StatKind),
    ModifierAdded(StatKind),
    ModifierRemoved(StatKind),
}

/// Owner of the active modifier list and the query cache for one stat group.
///
/// Cache invariant: an entry for a kind is either absent (rebuilt on the next
/// query) or holds exactly the positions of that kind's modifiers in the
/// current active list. Add and remove invalidate only the affected kind;
/// removals additionally remap the positions cached for other kinds, since
/// compacting the list shifts everything past the removal point.
pub struct StatsMediator {
    modifiers: Vec<StatModifier>,
    cache: HashMap<StatKind, Vec<usize>>,
    order: Box<dyn ApplicationOrder + Send + Sync>,
    events: Vec<StatEvent>,
}

impl Default for StatsMediator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsMediator {
    pub fn new() -> Self {
        Self::with_order(Box::new(NormalOrder))
    }

    pub fn with_order(order: Box<dyn ApplicationOrder + Send + Sync>) -> Self {
        Self {
            modifiers: Vec::new(),
            cache: HashMap::new(),
            order,
            events: Vec::new(),
        }
    }

    /// Appends a modifier to the active list, invalidating the cache entry
    /// for its kind.
    pub fn add_modifier(&mut self, modifier: StatModifier) {
        let stat = modifier.stat();
        self.modifiers.push(modifier);
        self.cache.remove(&stat);
        self.events.push(StatEvent::ModifierAdded(stat));
        self.events.push(StatEvent::Modified(stat));
    }

    /// Resolves a stat's value by folding the cached subset for `stat` over
    /// `base_value`.
    ///
    /// The subset is rebuilt lazily after an invalidation. Every query also
    /// records a [`StatEvent::Modified`] notification.
    pub fn perform_query(&mut self, stat: StatKind, base_value: f32) -> f32 {
        let Self {
            modifiers,
            cache,
            order,
            events,
        } = self;

        let positions = cache.entry(stat).or_insert_with(|| {
            modifiers
                .iter()
                .enumerate()
                .filter(|(_, m)| m.stat() == stat)
                .map(|(position, _)| position)
                .collect()
        });

        let subset: Vec<&StatModifier> = positions.iter().map(|&p| &modifiers[p]).collect();
        let value = order.apply(&subset, base_value);

        events.push(StatEvent::Modified(stat));
        value
    }

    /// Ticks every active modifier, then disposes of every modifier marked
    /// for removal. The marked set is snapshotted first so the active list
    /// is never mutated while it is being iterated.
    pub fn update(&mut self, delta: f32) {
        for modifier in &mut self.modifiers {
            modifier.update(delta);
        }

        let marked: Vec<usize> = self
            .modifiers
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_marked_for_removal())
            .map(|(position, _)| position)
            .collect();

        // Back to front so earlier positions stay valid while removing.
        for &position in marked.iter().rev() {
            self.dispose_at(position);
        }
    }

    /// Force-expires every duration-bound modifier by ticking with an
    /// infinite delta and disposing of the marked set. Permanent modifiers
    /// never own a timer, so they survive — level-up bonuses outlive a
    /// death/reset while buffs and debuffs do not.
    pub fn clear_modifiers(&mut self) {
        self.update(f32::INFINITY);
    }

    /// Drains the notifications recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<StatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    pub fn modifiers(&self) -> impl Iterator<Item = &StatModifier> {
        self.modifiers.iter()
    }

    /// The only removal path: drops the modifier, invalidates its kind's
    /// cache entry, and remaps the positions cached for other kinds.
    fn dispose_at(&mut self, position: usize) {
        let modifier = self.modifiers.remove(position);
        let stat = modifier.stat();

        self.cache.remove(&stat);
        for positions in self.cache.values_mut() {
            for p in positions.iter_mut() {
                if *p > position {
                    *p -= 1;
                }
            }
        }

        self.events.push(StatEvent::ModifierRemoved(stat));
        self.events.push(StatEvent::Modified(stat));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Operation;

    fn add(mediator: &mut StatsMediator, stat: StatKind, operation: Operation, duration: f32) {
        mediator.add_modifier(StatModifier::new(stat, operation, duration));
    }

    #[test]
    fn additive_modifiers_sum_independent_of_add_order() {
        let mut forward = StatsMediator::new();
        add(&mut forward, StatKind::Attack, Operation::Add(5.0), 0.0);
        add(&mut forward, StatKind::Attack, Operation::Add(3.0), 0.0);

        let mut backward = StatsMediator::new();
        add(&mut backward, StatKind::Attack, Operation::Add(3.0), 0.0);
        add(&mut backward, StatKind::Attack, Operation::Add(5.0), 0.0);

        assert_eq!(forward.perform_query(StatKind::Attack, 10.0), 18.0);
        assert_eq!(backward.perform_query(StatKind::Attack, 10.0), 18.0);
    }

    #[test]
    fn mixed_modifiers_fold_additive_then_multiplicative() {
        let mut mediator = StatsMediator::new();
        add(&mut mediator, StatKind::Attack, Operation::Multiply(2.0), 0.0);
        add(&mut mediator, StatKind::Attack, Operation::Add(5.0), 0.0);
        add(&mut mediator, StatKind::Attack, Operation::Multiply(1.5), 0.0);
        add(&mut mediator, StatKind::Attack, Operation::Add(1.0), 0.0);

        // (10 + 5 + 1) * 2 * 1.5
        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 48.0);
    }

    #[test]
    fn queries_are_idempotent_between_mutations() {
        let mut mediator = StatsMediator::new();
        add(&mut mediator, StatKind::Attack, Operation::Add(7.0), 0.0);

        let first = mediator.perform_query(StatKind::Attack, 10.0);
        let second = mediator.perform_query(StatKind::Attack, 10.0);
        assert_eq!(first, second);
    }

    #[test]
    fn queries_only_see_modifiers_of_their_kind() {
        let mut mediator = StatsMediator::new();
        add(&mut mediator, StatKind::Attack, Operation::Add(5.0), 0.0);
        add(&mut mediator, StatKind::MoveSpeed, Operation::Add(2.0), 0.0);

        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 15.0);
        assert_eq!(mediator.perform_query(StatKind::MoveSpeed, 30.0), 32.0);
        assert_eq!(mediator.perform_query(StatKind::Defense, 20.0), 20.0);
    }

    #[test]
    fn expired_modifier_is_disposed_on_the_next_update() {
        let mut mediator = StatsMediator::new();
        add(&mut mediator, StatKind::Attack, Operation::Multiply(2.0), 3.0);
        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 20.0);

        mediator.update(2.0);
        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 20.0);

        mediator.update(2.0);
        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 10.0);
        assert_eq!(mediator.modifier_count(), 0);
    }

    #[test]
    fn removal_keeps_cached_positions_of_other_kinds_valid() {
        let mut mediator = StatsMediator::new();
        add(&mut mediator, StatKind::Attack, Operation::Add(5.0), 1.0);
        add(&mut mediator, StatKind::MoveSpeed, Operation::Add(2.0), 0.0);

        // Populate both cache entries, then expire the attack modifier that
        // sits in front of the move speed one.
        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 15.0);
        assert_eq!(mediator.perform_query(StatKind::MoveSpeed, 30.0), 32.0);

        mediator.update(1.5);

        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 10.0);
        assert_eq!(mediator.perform_query(StatKind::MoveSpeed, 30.0), 32.0);
    }

    #[test]
    fn clear_modifiers_spares_permanent_ones() {
        let mut mediator = StatsMediator::new();
        add(&mut mediator, StatKind::Attack, Operation::Add(5.0), 0.0);
        add(&mut mediator, StatKind::Attack, Operation::Multiply(2.0), 30.0);
        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 30.0);

        mediator.clear_modifiers();

        assert_eq!(mediator.perform_query(StatKind::Attack, 10.0), 15.0);
        assert_eq!(mediator.modifier_count(), 1);
    }

    #[test]
    fn every_query_records_a_modified_event() {
        let mut mediator = StatsMediator::new();
        mediator.perform_query(StatKind::Attack, 10.0);
        mediator.perform_query(StatKind::Attack, 10.0);

        let events = mediator.drain_events();
        assert_eq!(
            events,
            vec![
                StatEvent::Modified(StatKind::Attack),
                StatEvent::Modified(StatKind::Attack),
            ]
        );
        assert!(mediator.drain_events().is_empty());
    }

    #[test]
    fn add_and_removal_record_events_for_the_affected_kind() {
        let mut mediator = StatsMediator::new();
        add(&mut mediator, StatKind::Attack, Operation::Add(1.0), 1.0);
        mediator.drain_events();

        mediator.update(2.0);
        let events = mediator.drain_events();
        assert!(events.contains(&StatEvent::ModifierRemoved(StatKind::Attack)));
    }
}
