//! Gameplay configuration loader.

use std::path::Path;

use gameplay_core::GameplayConfig;

use crate::loaders::{read_file, LoadResult};

/// Loader for gameplay configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameplayConfig> {
        let content = read_file(path)?;
        let config: GameplayConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
