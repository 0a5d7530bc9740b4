//! Content factory for building gameplay data from a data directory.

use std::path::{Path, PathBuf};

use gameplay_core::{AbilitySpec, ClassSpec, GameplayConfig};

use crate::loaders::{
    AbilityLoader, ClassLoader, ConfigLoader, LoadResult, PickupLoader, PickupSpec,
};

/// Content factory that loads all gameplay content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── abilities.ron
/// ├── classes.ron
/// └── pickups.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load gameplay configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameplayConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the shared ability catalog from `abilities.ron`.
    ///
    /// Classes may embed their loadout directly; this catalog carries the
    /// abilities granted outside a class (e.g. by items).
    pub fn load_abilities(&self) -> LoadResult<Vec<AbilitySpec>> {
        let path = self.data_dir.join("abilities.ron");
        AbilityLoader::load(&path)
    }

    /// Load the class catalog from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<Vec<ClassSpec>> {
        let path = self.data_dir.join("classes.ron");
        ClassLoader::load(&path)
    }

    /// Load the pickup catalog from `pickups.ron`.
    pub fn load_pickups(&self) -> LoadResult<Vec<PickupSpec>> {
        let path = self.data_dir.join("pickups.ron");
        PickupLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn shipped_sample_data_loads() {
        let factory = ContentFactory::new(sample_data_dir());

        let config = factory.load_config().unwrap();
        assert!(config.base_xp_requirement > 0.0);

        let classes = factory.load_classes().unwrap();
        assert!(!classes.is_empty());
        for class in &classes {
            assert!(!class.abilities.is_empty(), "class {} has no loadout", class.name);
        }

        let abilities = factory.load_abilities().unwrap();
        assert!(!abilities.is_empty());

        let pickups = factory.load_pickups().unwrap();
        assert!(!pickups.is_empty());
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        let error = factory.load_classes().unwrap_err();
        assert!(error.to_string().contains("classes.ron"));
    }
}
