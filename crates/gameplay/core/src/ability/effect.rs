//! The seam between abilities and the character state they act on.

use crate::ability::AbilityKind;
use crate::events::{CombatCommand, DeferredEffect, EffectIdAllocator};
use crate::schedule::DelayQueue;
use crate::stats::{ResourcePool, Stats};

/// Mutable view of the caster handed to an effect for the duration of one
/// cast. Abilities never hold character references; they borrow what they
/// need and let go, which is what keeps ownership one-directional.
pub struct CastContext<'a> {
    pub stats: &'a mut Stats,
    pub resource: &'a mut ResourcePool,
    pub delayed: &'a mut DelayQueue<DeferredEffect>,
    pub commands: &'a mut Vec<CombatCommand>,
    pub ids: &'a mut EffectIdAllocator,
}

/// Kind-specific behavior of an ability. Implementations run only after the
/// owning [`Ability`](crate::ability::Ability) has cleared the unlock,
/// cooldown, and resource gates — a cast is already paid for by the time it
/// reaches the effect.
pub trait AbilityEffect: Send + Sync {
    fn kind(&self) -> AbilityKind;

    fn cast(&mut self, ctx: &mut CastContext<'_>);
}
