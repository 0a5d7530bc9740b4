//! Runtime orchestration for the character gameplay simulation.
//!
//! This crate wires the pure gameplay core to the outside world: a fixed
//! per-frame tick drives every character's mediators and ability queue, a
//! command channel carries input-side requests (cast, XP, pickups, damage),
//! and a topic-based event bus fans gameplay notifications and combat
//! commands out to subscribers (UI overlays, pooling, audio).
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the synchronous roster and tick, reusable headless
//! - [`runtime`] hosts the async orchestrator, builder, and handle
//! - [`events`] provides the topic-based event bus
pub mod error;
pub mod events;
pub mod runtime;
pub mod simulation;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, EventKind, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, RuntimeHandle};
pub use simulation::{CharacterId, Simulation};
