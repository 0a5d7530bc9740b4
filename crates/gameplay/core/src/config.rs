/// Gameplay configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameplayConfig {
    /// Experience required to reach level 2.
    pub base_xp_requirement: f32,

    /// Multiplier applied to the requirement after each level-up.
    pub xp_growth: f32,
}

impl GameplayConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of abilities per ability system (one per action-bar slot).
    pub const MAX_ABILITIES: usize = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_XP_REQUIREMENT: f32 = 50.0;
    pub const DEFAULT_XP_GROWTH: f32 = 1.25;

    pub fn new() -> Self {
        Self {
            base_xp_requirement: Self::DEFAULT_BASE_XP_REQUIREMENT,
            xp_growth: Self::DEFAULT_XP_GROWTH,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
