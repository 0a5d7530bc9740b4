//! The timed-ability execution model.
//!
//! Abilities are built from immutable specs by an explicit registry, gate
//! execution on an unlock level and a cooldown timer, and queue cast
//! requests through a per-entity FIFO. Kind-specific behavior lives behind
//! the [`AbilityEffect`] trait; everything an effect touches is borrowed
//! through a [`CastContext`] for the duration of one cast.

pub mod ability;
pub mod effect;
pub mod kinds;
pub mod registry;
pub mod spec;
pub mod system;

pub use ability::Ability;
pub use effect::{AbilityEffect, CastContext};
pub use kinds::{AreaDenialEffect, BuffEffect, MeleeSwingEffect, ProjectileEffect};
pub use registry::{AbilityError, AbilityRegistry, EffectBuilder};
pub use spec::{
    AbilityKind, AbilityPayload, AbilitySpec, AreaDenialParams, BuffParams, MeleeSwingParams,
    ProjectileParams,
};
pub use system::{AbilityEvent, AbilitySystem};
