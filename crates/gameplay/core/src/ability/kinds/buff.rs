//! Self-buff: registers a stat modifier on the caster.

use crate::ability::effect::{AbilityEffect, CastContext};
use crate::ability::spec::{AbilityKind, BuffParams};
use crate::stats::{Operation, StatModifier};

pub struct BuffEffect {
    params: BuffParams,
}

impl BuffEffect {
    pub fn new(params: BuffParams) -> Self {
        Self { params }
    }
}

impl AbilityEffect for BuffEffect {
    fn kind(&self) -> AbilityKind {
        AbilityKind::Buff
    }

    fn cast(&mut self, ctx: &mut CastContext<'_>) {
        let modifier = StatModifier::new(
            self.params.stat,
            Operation::new(self.params.operator, self.params.amount),
            self.params.duration_secs,
        );
        ctx.stats.mediator_mut().add_modifier(modifier);
    }
}
