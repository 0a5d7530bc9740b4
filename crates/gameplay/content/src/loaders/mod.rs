//! Content loaders for reading gameplay data from files.
//!
//! Each loader converts one file format into gameplay-core spec types.
//! An unknown stat, operator, or ability tag fails the whole load — bad
//! configuration is rejected at startup rather than silently defaulted.

pub mod abilities;
pub mod classes;
pub mod config;
pub mod factory;
pub mod pickups;

pub use abilities::AbilityLoader;
pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use pickups::{PickupLoader, PickupSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
