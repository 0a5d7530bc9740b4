//! Data definitions backing ability instances.
//!
//! One spec per action-bar entry, deserialized from content catalogs. The
//! payload carries the kind-specific numbers; everything an ability instance
//! ever reads at runtime lives here, immutably.

use crate::stats::{OperatorKind, StatKind};

/// Tag identifying an ability implementation. The registry maps each tag to
/// a constructor for the matching effect behavior.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    Buff,
    Projectile,
    MeleeSwing,
    AreaDenial,
}

/// Parameters for a self-buff: registers a stat modifier on cast.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffParams {
    pub stat: StatKind,
    pub operator: OperatorKind,
    pub amount: f32,
    /// Buff lifetime; 0 makes the buff permanent.
    pub duration_secs: f32,
}

/// Parameters for a launched projectile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileParams {
    pub speed: f32,
    /// Damage = scalar × the caster's current attack.
    pub damage_scalar: f32,
    /// Seconds of flight before the projectile returns to its pool.
    pub timeout_secs: f32,
    pub piercing: bool,
}

/// Parameters for a melee arc swing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeSwingParams {
    pub swing_length: f32,
    pub sweep_speed: f32,
    pub damage_scalar: f32,
}

/// Parameters for a persistent damage zone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaDenialParams {
    pub radius: f32,
    pub duration_secs: f32,
    pub tick_rate_secs: f32,
    pub damage_scalar: f32,
}

/// Kind-specific portion of an ability spec.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityPayload {
    Buff(BuffParams),
    Projectile(ProjectileParams),
    MeleeSwing(MeleeSwingParams),
    AreaDenial(AreaDenialParams),
}

impl AbilityPayload {
    pub fn kind(&self) -> AbilityKind {
        match self {
            AbilityPayload::Buff(_) => AbilityKind::Buff,
            AbilityPayload::Projectile(_) => AbilityKind::Projectile,
            AbilityPayload::MeleeSwing(_) => AbilityKind::MeleeSwing,
            AbilityPayload::AreaDenial(_) => AbilityKind::AreaDenial,
        }
    }
}

/// Immutable configuration backing one ability instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilitySpec {
    pub name: String,
    /// Character level at which the ability unlocks. Levels below 2 mean
    /// the ability starts unlocked.
    pub unlock_level: u32,
    /// Cooldown after a successful cast; 0 disables cooldown gating.
    pub cooldown_secs: f32,
    pub resource_cost: f32,
    pub resource_generation: f32,
    pub payload: AbilityPayload,
}

impl AbilitySpec {
    pub fn kind(&self) -> AbilityKind {
        self.payload.kind()
    }
}
