//! Character class catalog loader.

use std::path::Path;

use gameplay_core::ClassSpec;

use crate::loaders::{read_file, LoadResult};

/// Loader for class definitions from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load a class catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ClassSpec>> {
        let content = read_file(path)?;
        let classes: Vec<ClassSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class RON: {}", e))?;

        Ok(classes)
    }
}

#[cfg(test)]
mod tests {
    use gameplay_core::ClassSpec;

    #[test]
    fn parses_a_class_with_curve_and_loadout() {
        let source = r#"
[
    (
        name: "Vanguard",
        base_stats: (
            attack: 12.0,
            defense: 25.0,
            move_speed: 28.0,
            attack_speed: 1.1,
        ),
        max_health: 150.0,
        resource: (
            starting_amount: 40.0,
            max_amount: 80.0,
            regen_amount: 4.0,
            regen_rate_secs: 1.0,
        ),
        level_curve: (
            points: [
                (level: 1.0, value: 2.0),
                (level: 10.0, value: 6.0),
            ],
        ),
        abilities: [
            (
                name: "Cleave",
                unlock_level: 1,
                cooldown_secs: 1.5,
                resource_cost: 10.0,
                resource_generation: 5.0,
                payload: MeleeSwing((
                    swing_length: 2.5,
                    sweep_speed: 8.0,
                    damage_scalar: 1.2,
                )),
            ),
        ],
    ),
]
"#;
        let classes: Vec<ClassSpec> = ron::from_str(source).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Vanguard");
        assert_eq!(classes[0].base_stats.attack, 12.0);
        assert_eq!(classes[0].abilities.len(), 1);
        assert_eq!(classes[0].level_curve.evaluate(10.0), 6.0);
    }
}
