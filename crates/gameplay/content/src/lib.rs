//! Data-driven content definitions and loaders.
//!
//! This crate houses static gameplay content and provides loaders for
//! RON/TOML data files:
//! - Ability catalogs (data-driven via RON)
//! - Character class definitions (data-driven via RON)
//! - Stat modifier pickups (data-driven via RON)
//! - Gameplay configuration (data-driven via TOML)
//!
//! Content is consumed when the runtime spawns characters and never appears
//! in live simulation state. All loaders deserialize directly into
//! gameplay-core spec types via serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ClassLoader, ConfigLoader, ContentFactory, PickupLoader, PickupSpec,
};
