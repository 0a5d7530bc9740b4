//! Explicit ability factory: a map from data-kind tag to constructor.
//!
//! Populated once at startup and looked up by tag when ability systems are
//! built from content data. A missing mapping is recoverable — the caller
//! logs it and skips the ability instead of crashing the frame.

use std::collections::HashMap;

use crate::ability::ability::Ability;
use crate::ability::effect::AbilityEffect;
use crate::ability::kinds::{AreaDenialEffect, BuffEffect, MeleeSwingEffect, ProjectileEffect};
use crate::ability::spec::{AbilityKind, AbilityPayload, AbilitySpec};

/// Errors surfaced while building abilities from specs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AbilityError {
    #[error("no ability effect registered for kind `{0}`")]
    UnregisteredKind(AbilityKind),

    #[error("spec payload does not match ability kind `{0}`")]
    PayloadMismatch(AbilityKind),

    #[error("ability system is full ({capacity} slots)")]
    SlotsFull { capacity: usize },
}

/// Constructor for one effect kind.
pub type EffectBuilder = fn(&AbilitySpec) -> Result<Box<dyn AbilityEffect>, AbilityError>;

/// Tag → constructor mapping for ability effects.
pub struct AbilityRegistry {
    builders: HashMap<AbilityKind, EffectBuilder>,
}

impl AbilityRegistry {
    /// An empty registry. Useful in tests; production code wants
    /// [`with_defaults`](Self::with_defaults).
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registry pre-populated with the four built-in effect kinds.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(AbilityKind::Buff, build_buff);
        registry.register(AbilityKind::Projectile, build_projectile);
        registry.register(AbilityKind::MeleeSwing, build_melee_swing);
        registry.register(AbilityKind::AreaDenial, build_area_denial);
        registry
    }

    /// Registers (or replaces) the constructor for a kind.
    pub fn register(&mut self, kind: AbilityKind, builder: EffectBuilder) {
        self.builders.insert(kind, builder);
    }

    /// Builds an ability instance for `spec`, or reports why it cannot.
    pub fn create(&self, spec: &AbilitySpec) -> Result<Ability, AbilityError> {
        let kind = spec.kind();
        let builder = self
            .builders
            .get(&kind)
            .ok_or(AbilityError::UnregisteredKind(kind))?;

        let effect = builder(spec)?;
        Ok(Ability::new(spec.clone(), effect))
    }

    pub fn is_registered(&self, kind: AbilityKind) -> bool {
        self.builders.contains_key(&kind)
    }
}

impl Default for AbilityRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn build_buff(spec: &AbilitySpec) -> Result<Box<dyn AbilityEffect>, AbilityError> {
    match &spec.payload {
        AbilityPayload::Buff(params) => Ok(Box::new(BuffEffect::new(params.clone()))),
        _ => Err(AbilityError::PayloadMismatch(AbilityKind::Buff)),
    }
}

fn build_projectile(spec: &AbilitySpec) -> Result<Box<dyn AbilityEffect>, AbilityError> {
    match &spec.payload {
        AbilityPayload::Projectile(params) => Ok(Box::new(ProjectileEffect::new(params.clone()))),
        _ => Err(AbilityError::PayloadMismatch(AbilityKind::Projectile)),
    }
}

fn build_melee_swing(spec: &AbilitySpec) -> Result<Box<dyn AbilityEffect>, AbilityError> {
    match &spec.payload {
        AbilityPayload::MeleeSwing(params) => Ok(Box::new(MeleeSwingEffect::new(params.clone()))),
        _ => Err(AbilityError::PayloadMismatch(AbilityKind::MeleeSwing)),
    }
}

fn build_area_denial(spec: &AbilitySpec) -> Result<Box<dyn AbilityEffect>, AbilityError> {
    match &spec.payload {
        AbilityPayload::AreaDenial(params) => Ok(Box::new(AreaDenialEffect::new(params.clone()))),
        _ => Err(AbilityError::PayloadMismatch(AbilityKind::AreaDenial)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::spec::BuffParams;
    use crate::stats::{OperatorKind, StatKind};

    fn buff_spec() -> AbilitySpec {
        AbilitySpec {
            name: "War Cry".into(),
            unlock_level: 1,
            cooldown_secs: 5.0,
            resource_cost: 10.0,
            resource_generation: 0.0,
            payload: AbilityPayload::Buff(BuffParams {
                stat: StatKind::Attack,
                operator: OperatorKind::Multiply,
                amount: 1.5,
                duration_secs: 8.0,
            }),
        }
    }

    #[test]
    fn default_registry_builds_every_builtin_kind() {
        let registry = AbilityRegistry::with_defaults();
        for kind in [
            AbilityKind::Buff,
            AbilityKind::Projectile,
            AbilityKind::MeleeSwing,
            AbilityKind::AreaDenial,
        ] {
            assert!(registry.is_registered(kind));
        }

        let ability = registry.create(&buff_spec()).unwrap();
        assert_eq!(ability.kind(), AbilityKind::Buff);
        assert!(ability.is_unlocked());
    }

    #[test]
    fn unregistered_kind_is_reported_not_panicked() {
        let registry = AbilityRegistry::new();
        let err = registry.create(&buff_spec()).unwrap_err();
        assert_eq!(err, AbilityError::UnregisteredKind(AbilityKind::Buff));
    }
}
