//! Gameplay events and outward-facing combat commands.
//!
//! Core components never call back into listeners. Each component records
//! what happened into a drainable queue and the embedding runtime forwards
//! the entries to its subscribers once per tick. This replaces ambient
//! multicast delegates with an explicit, pollable seam.

use crate::ability::AbilityKind;
use crate::stats::StatKind;

/// Identifier for a projectile spawned by an ability.
///
/// Allocated by the casting character; the pooling/rendering side maps it to
/// whatever engine object it recycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileId(pub u32);

/// Identifier for a ground effect spawned by an area denial ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaEffectId(pub u32);

/// Allocates ids for spawned effects, monotonically per character.
#[derive(Clone, Debug, Default)]
pub struct EffectIdAllocator {
    next_projectile: u32,
    next_area_effect: u32,
}

impl EffectIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_projectile(&mut self) -> ProjectileId {
        let id = ProjectileId(self.next_projectile);
        self.next_projectile += 1;
        id
    }

    pub fn next_area_effect(&mut self) -> AreaEffectId {
        let id = AreaEffectId(self.next_area_effect);
        self.next_area_effect += 1;
        id
    }
}

/// Payloads scheduled on a character's [`DelayQueue`](crate::DelayQueue).
///
/// Fired payloads are converted into [`CombatCommand`]s during the
/// character's update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Return a pooled projectile after its flight timeout.
    ReturnProjectile(ProjectileId),
    /// Tear down an area denial zone after its duration.
    ExpireAreaDenial(AreaEffectId),
}

/// Effect requests addressed to the excluded subsystems (pooling, rendering,
/// physics). The core only decides *that* they happen and with what numbers;
/// carrying them out is the embedder's concern.
#[derive(Clone, Debug, PartialEq)]
pub enum CombatCommand {
    SpawnProjectile {
        id: ProjectileId,
        speed: f32,
        damage: f32,
        piercing: bool,
    },
    ReturnProjectile {
        id: ProjectileId,
    },
    MeleeSweep {
        damage: f32,
        swing_length: f32,
        sweep_speed: f32,
    },
    SpawnAreaDenial {
        id: AreaEffectId,
        radius: f32,
        damage_per_tick: f32,
        tick_rate_secs: f32,
    },
    ExpireAreaDenial {
        id: AreaEffectId,
    },
}

/// Everything observable that happened to a character during a tick.
#[derive(Clone, Debug, PartialEq)]
pub enum GameplayEvent {
    /// A stat was modified *or read*. Queries notify too, so dependent
    /// systems (animation speed scaling, HUD bars) react to every read.
    StatModified { stat: StatKind },

    /// A modifier entered the active list.
    ModifierAdded { stat: StatKind },

    /// A modifier expired or was force-expired and left the active list.
    ModifierRemoved { stat: StatKind },

    XpGained {
        amount: f32,
        current: f32,
        requirement: f32,
    },

    LeveledUp {
        level: u32,
    },

    AbilityUnlocked {
        slot: usize,
        name: String,
    },

    AbilityExecuted {
        slot: usize,
        kind: AbilityKind,
    },

    HealthChanged {
        delta: f32,
        current: f32,
    },

    Died,

    ResourceChanged {
        current: f32,
    },
}
