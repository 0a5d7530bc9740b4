//! Pure numeric transforms applied by stat modifiers.

/// Data tag naming an operation, as it appears in content files.
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
pub enum OperatorKind {
    Add,
    Multiply,
}

/// A pure transform on a scalar stat value.
///
/// Immutable and `Copy` so any number of modifiers can share evaluation
/// logic safely, including across threads if the simulation is ever
/// parallelized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// `value + k`
    Add(f32),
    /// `value * k`
    Multiply(f32),
}

impl Operation {
    /// Builds an operation from its data tag and operand.
    pub fn new(kind: OperatorKind, operand: f32) -> Self {
        match kind {
            OperatorKind::Add => Operation::Add(operand),
            OperatorKind::Multiply => Operation::Multiply(operand),
        }
    }

    /// Applies the transform. No side effects, no failure modes.
    pub fn apply(self, value: f32) -> f32 {
        match self {
            Operation::Add(k) => value + k,
            Operation::Multiply(k) => value * k,
        }
    }

    pub fn kind(self) -> OperatorKind {
        match self {
            Operation::Add(_) => OperatorKind::Add,
            Operation::Multiply(_) => OperatorKind::Multiply,
        }
    }

    pub fn is_additive(self) -> bool {
        matches!(self, Operation::Add(_))
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operation::Multiply(_))
    }
}
