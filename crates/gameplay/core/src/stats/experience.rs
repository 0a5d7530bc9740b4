//! Experience accumulation and leveling.

use crate::config::GameplayConfig;

/// Tracks XP, the current level, and the growing requirement for the next
/// level-up.
#[derive(Clone, Debug)]
pub struct Experience {
    level: u32,
    current_xp: f32,
    requirement: f32,
    growth: f32,
}

impl Experience {
    pub fn new() -> Self {
        Self::with_config(&GameplayConfig::default())
    }

    pub fn with_config(config: &GameplayConfig) -> Self {
        Self {
            level: 1,
            current_xp: 0.0,
            requirement: config.base_xp_requirement,
            growth: config.xp_growth,
        }
    }

    /// Adds XP and returns every level reached, in order. Overshoot carries
    /// over, so a single large grant can produce several level-ups.
    pub fn gain(&mut self, incoming_xp: f32) -> Vec<u32> {
        self.current_xp += incoming_xp;

        let mut reached = Vec::new();
        while self.current_xp >= self.requirement {
            self.current_xp -= self.requirement;
            self.level += 1;
            self.requirement *= self.growth;
            reached.push(self.level);
        }
        reached
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn current_xp(&self) -> f32 {
        self.current_xp
    }

    pub fn requirement(&self) -> f32 {
        self.requirement
    }

    /// Progress towards the next level in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.requirement <= 0.0 {
            0.0
        } else {
            (self.current_xp / self.requirement).clamp(0.0, 1.0)
        }
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}
