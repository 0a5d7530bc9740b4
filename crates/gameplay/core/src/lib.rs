//! Deterministic character gameplay logic shared across embedders.
//!
//! `gameplay-core` defines the canonical rules for stat modification and
//! timed ability execution and exposes pure APIs driven by an external
//! per-frame tick. Nothing here performs I/O, logs, or suspends; observable
//! effects are recorded into drainable event queues and outward-facing
//! combat commands that the embedding runtime forwards to its subscribers.
pub mod ability;
pub mod character;
pub mod config;
pub mod events;
pub mod schedule;
pub mod stats;
pub mod timer;

pub use ability::{
    Ability, AbilityEffect, AbilityError, AbilityEvent, AbilityKind, AbilityPayload,
    AbilityRegistry, AbilitySpec, AbilitySystem, AreaDenialParams, BuffParams, CastContext,
    EffectBuilder, MeleeSwingParams, ProjectileParams,
};
pub use character::{Character, ClassSpec};
pub use config::GameplayConfig;
pub use events::{
    AreaEffectId, CombatCommand, DeferredEffect, EffectIdAllocator, GameplayEvent, ProjectileId,
};
pub use schedule::{DelayQueue, TaskId};
pub use stats::{
    ApplicationOrder, BaseStats, CurvePoint, Experience, Health, HealthEvent, LevelCurve,
    ModifierSpec, NormalOrder, Operation, OperatorKind, ResourceEvent, ResourceParams,
    ResourcePool, StatEvent, StatKind, StatModifier, StatQuery, Stats, StatsMediator,
};
pub use timer::{CountdownTimer, StopwatchTimer};
