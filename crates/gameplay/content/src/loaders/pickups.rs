//! Stat modifier pickup loader.

use std::path::Path;

use gameplay_core::ModifierSpec;
use serde::{Deserialize, Serialize};

use crate::loaders::{read_file, LoadResult};

/// A world pickup that grants a stat modifier when collected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickupSpec {
    pub name: String,
    pub modifier: ModifierSpec,
}

/// Loader for pickup definitions from RON files.
pub struct PickupLoader;

impl PickupLoader {
    /// Load a pickup catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<PickupSpec>> {
        let content = read_file(path)?;
        let pickups: Vec<PickupSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pickup RON: {}", e))?;

        Ok(pickups)
    }
}
