//! Launched projectile with a pooled lifetime.

use crate::ability::effect::{AbilityEffect, CastContext};
use crate::ability::spec::{AbilityKind, ProjectileParams};
use crate::events::{CombatCommand, DeferredEffect};

pub struct ProjectileEffect {
    params: ProjectileParams,
}

impl ProjectileEffect {
    pub fn new(params: ProjectileParams) -> Self {
        Self { params }
    }
}

impl AbilityEffect for ProjectileEffect {
    fn kind(&self) -> AbilityKind {
        AbilityKind::Projectile
    }

    fn cast(&mut self, ctx: &mut CastContext<'_>) {
        let damage = self.params.damage_scalar * ctx.stats.attack();
        let id = ctx.ids.next_projectile();

        ctx.commands.push(CombatCommand::SpawnProjectile {
            id,
            speed: self.params.speed,
            damage,
            piercing: self.params.piercing,
        });

        // The return is revoked if the projectile despawns early from a hit.
        ctx.delayed
            .schedule(self.params.timeout_secs, DeferredEffect::ReturnProjectile(id));
    }
}
