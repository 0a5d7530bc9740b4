//! Ability catalog loader.

use std::path::Path;

use gameplay_core::AbilitySpec;

use crate::loaders::{read_file, LoadResult};

/// Loader for ability catalogs from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load an ability catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<AbilitySpec>> {
        let content = read_file(path)?;
        let specs: Vec<AbilitySpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability RON: {}", e))?;

        Ok(specs)
    }
}
