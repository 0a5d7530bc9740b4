/// Enumerated numeric attributes that modifiers target.
///
/// Each stat group (core stats, health, resource) owns its own mediator, but
/// the kind space is shared so content data can name any stat uniformly.
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
pub enum StatKind {
    /// Outgoing damage scalar base.
    Attack,
    /// Incoming damage reduction.
    Defense,
    /// World-units-per-second movement.
    MoveSpeed,
    /// Attack animation rate; scales cast animation playback.
    AttackSpeed,
    /// Maximum health.
    Health,
    /// Resource regenerated per regen tick.
    ResourceAmount,
    /// Seconds between regen ticks.
    ResourceRate,
    /// Maximum resource.
    ResourceMax,
}
