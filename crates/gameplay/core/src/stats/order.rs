//! Deterministic fold order for applying a modifier subset to a base value.

use crate::stats::modifier::StatModifier;

/// Policy deciding the order in which a stat's modifier subset is folded
/// into a base value. Pluggable so a future order (e.g. clamp-last) can be
/// swapped in per mediator.
pub trait ApplicationOrder {
    fn apply(&self, modifiers: &[&StatModifier], base_value: f32) -> f32;
}

/// The standard policy: every additive modifier first, then every
/// multiplicative modifier over the additive result.
///
/// Grouping by operation makes the result independent of the order in which
/// modifiers were added across groups; within a group, insertion order is
/// kept (it only matters if a non-commutative operation is ever added).
pub struct NormalOrder;

impl ApplicationOrder for NormalOrder {
    fn apply(&self, modifiers: &[&StatModifier], base_value: f32) -> f32 {
        let mut value = base_value;

        for modifier in modifiers.iter().filter(|m| m.operation().is_additive()) {
            value = modifier.operation().apply(value);
        }

        for modifier in modifiers
            .iter()
            .filter(|m| m.operation().is_multiplicative())
        {
            value = modifier.operation().apply(value);
        }

        value
    }
}
