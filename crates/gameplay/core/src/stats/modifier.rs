//! Timed and permanent stat modifiers.

use crate::stats::mediator::StatQuery;
use crate::stats::{Operation, OperatorKind, StatKind};
use crate::timer::CountdownTimer;

/// Data-driven definition of a modifier (buff pickups, projectile debuffs).
///
/// The content crate deserializes these from RON; [`StatModifier::from_spec`]
/// turns one into a live modifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierSpec {
    pub stat: StatKind,
    pub operator: OperatorKind,
    pub value: f32,
    /// Seconds the modifier lives; 0 means permanent.
    pub duration_secs: f32,
}

/// A transform bound to a stat kind, optionally with a finite lifetime.
///
/// A modifier with duration 0 is permanent (level-up bonuses): it never owns
/// a timer and is never auto-removed. A duration-bound modifier owns a
/// private countdown; when it stops, the modifier marks itself for removal
/// and the owning mediator disposes of it on its next update tick.
#[derive(Clone, Debug)]
pub struct StatModifier {
    stat: StatKind,
    operation: Operation,
    timer: Option<CountdownTimer>,
    marked_for_removal: bool,
}

impl StatModifier {
    pub fn new(stat: StatKind, operation: Operation, duration_secs: f32) -> Self {
        let timer = (duration_secs > 0.0).then(|| {
            let mut timer = CountdownTimer::new(duration_secs);
            timer.start();
            timer
        });

        Self {
            stat,
            operation,
            timer,
            marked_for_removal: false,
        }
    }

    pub fn from_spec(spec: &ModifierSpec) -> Self {
        Self::new(
            spec.stat,
            Operation::new(spec.operator, spec.value),
            spec.duration_secs,
        )
    }

    /// Ticks the lifetime timer, if any. Once it stops, the modifier is
    /// marked and picked up by the mediator's disposal pass.
    pub fn update(&mut self, delta: f32) {
        if let Some(timer) = &mut self.timer {
            timer.tick(delta);
            if timer.just_stopped() {
                self.marked_for_removal = true;
            }
        }
    }

    /// Applies this modifier to a query of matching kind; a non-matching
    /// query passes through untouched.
    pub fn handle(&self, query: &mut StatQuery) {
        if query.stat == self.stat {
            query.value = self.operation.apply(query.value);
        }
    }

    pub fn stat(&self) -> StatKind {
        self.stat
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// True when the modifier has no lifetime timer (duration 0).
    pub fn is_permanent(&self) -> bool {
        self.timer.is_none()
    }

    pub fn is_marked_for_removal(&self) -> bool {
        self.marked_for_removal
    }

    /// Remaining lifetime fraction, 1.0 for permanent modifiers.
    pub fn lifetime_progress(&self) -> f32 {
        self.timer.as_ref().map_or(1.0, CountdownTimer::progress)
    }
}
