//! The stat-modifier mediation system.
//!
//! Modifiers are pure transforms bound to a stat kind with an optional
//! lifetime; mediators own the active set per stat group and answer queries
//! by folding the cached per-kind subset additive-first, multiplicative-
//! second. Health, core stats, and resource each own an independent mediator
//! so their modifier populations never mix.

pub mod base;
pub mod curve;
pub mod experience;
pub mod health;
pub mod kind;
pub mod mediator;
pub mod modifier;
pub mod operation;
pub mod order;
pub mod resource;

pub use base::{BaseStats, Stats};
pub use curve::{CurvePoint, LevelCurve};
pub use experience::Experience;
pub use health::{Health, HealthEvent};
pub use kind::StatKind;
pub use mediator::{StatEvent, StatQuery, StatsMediator};
pub use modifier::{ModifierSpec, StatModifier};
pub use operation::{Operation, OperatorKind};
pub use order::{ApplicationOrder, NormalOrder};
pub use resource::{ResourceEvent, ResourceParams, ResourcePool};
