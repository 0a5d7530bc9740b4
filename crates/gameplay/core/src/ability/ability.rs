//! A single ability instance: unlock state, cooldown timer, effect behavior.

use crate::ability::effect::{AbilityEffect, CastContext};
use crate::ability::spec::{AbilityKind, AbilitySpec};
use crate::timer::CountdownTimer;

/// One ability owned by an ability system.
///
/// State machine: `{Locked, Ready, OnCooldown}`. An ability starts Locked
/// unless its unlock level is below 2; the unlock transition fires once and
/// never reverts. Execution moves Ready → OnCooldown only when the spec has
/// a non-zero cooldown — zero-cooldown abilities cast repeatedly without
/// ever entering OnCooldown.
pub struct Ability {
    spec: AbilitySpec,
    effect: Box<dyn AbilityEffect>,
    unlocked: bool,
    cooldown: CountdownTimer,
}

impl core::fmt::Debug for Ability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ability")
            .field("spec", &self.spec)
            .field("effect", &"<dyn AbilityEffect>")
            .field("unlocked", &self.unlocked)
            .field("cooldown", &self.cooldown)
            .finish()
    }
}

impl Ability {
    pub fn new(spec: AbilitySpec, effect: Box<dyn AbilityEffect>) -> Self {
        let unlocked = spec.unlock_level < 2;
        let cooldown = CountdownTimer::new(spec.cooldown_secs);

        Self {
            spec,
            effect,
            unlocked,
            cooldown,
        }
    }

    /// Reacts to the owner reaching `level`. Returns true when this call
    /// unlocked the ability; subsequent level-ups are no-ops.
    pub fn handle_level_up(&mut self, level: u32) -> bool {
        if self.unlocked || level < self.spec.unlock_level {
            return false;
        }

        self.unlocked = true;
        self.cooldown.reset_to(self.spec.cooldown_secs);
        true
    }

    /// Casts the ability.
    ///
    /// A cast is refused while locked or on cooldown and aborted — with no
    /// state change and no side effects — when the resource cost cannot be
    /// paid. On success the generation is granted, the effect runs, and the
    /// cooldown starts (if the spec gates on one). Returns whether the cast
    /// happened.
    pub fn execute(&mut self, ctx: &mut CastContext<'_>) -> bool {
        if !self.unlocked || self.is_on_cooldown() {
            return false;
        }

        if !ctx.resource.spend(self.spec.resource_cost) {
            return false;
        }
        ctx.resource.gain(self.spec.resource_generation);

        self.effect.cast(ctx);

        if self.spec.cooldown_secs > 0.0 {
            self.cooldown.reset_to(self.spec.cooldown_secs);
            self.cooldown.start();
        }
        true
    }

    /// Must be called once per frame regardless of state; ticking an idle
    /// timer is a no-op.
    pub fn update_cooldown(&mut self, delta: f32) {
        self.cooldown.tick(delta);
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown.is_running()
    }

    /// Remaining cooldown fraction in `[0, 1]` for UI overlays; 0 when
    /// ready.
    pub fn cooldown_progress(&self) -> f32 {
        self.cooldown.progress()
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn spec(&self) -> &AbilitySpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn kind(&self) -> AbilityKind {
        self.effect.kind()
    }
}
