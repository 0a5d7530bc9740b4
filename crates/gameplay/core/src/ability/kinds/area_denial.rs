//! Persistent ground damage zone.

use crate::ability::effect::{AbilityEffect, CastContext};
use crate::ability::spec::{AbilityKind, AreaDenialParams};
use crate::events::{CombatCommand, DeferredEffect};

pub struct AreaDenialEffect {
    params: AreaDenialParams,
}

impl AreaDenialEffect {
    pub fn new(params: AreaDenialParams) -> Self {
        Self { params }
    }
}

impl AbilityEffect for AreaDenialEffect {
    fn kind(&self) -> AbilityKind {
        AbilityKind::AreaDenial
    }

    fn cast(&mut self, ctx: &mut CastContext<'_>) {
        let damage_per_tick = self.params.damage_scalar * ctx.stats.attack();
        let id = ctx.ids.next_area_effect();

        ctx.commands.push(CombatCommand::SpawnAreaDenial {
            id,
            radius: self.params.radius,
            damage_per_tick,
            tick_rate_secs: self.params.tick_rate_secs,
        });

        ctx.delayed.schedule(
            self.params.duration_secs,
            DeferredEffect::ExpireAreaDenial(id),
        );
    }
}
