//! Melee arc swing.

use crate::ability::effect::{AbilityEffect, CastContext};
use crate::ability::spec::{AbilityKind, MeleeSwingParams};
use crate::events::CombatCommand;

pub struct MeleeSwingEffect {
    params: MeleeSwingParams,
}

impl MeleeSwingEffect {
    pub fn new(params: MeleeSwingParams) -> Self {
        Self { params }
    }
}

impl AbilityEffect for MeleeSwingEffect {
    fn kind(&self) -> AbilityKind {
        AbilityKind::MeleeSwing
    }

    fn cast(&mut self, ctx: &mut CastContext<'_>) {
        let damage = self.params.damage_scalar * ctx.stats.attack();

        ctx.commands.push(CombatCommand::MeleeSweep {
            damage,
            swing_length: self.params.swing_length,
            sweep_speed: self.params.sweep_speed,
        });
    }
}
