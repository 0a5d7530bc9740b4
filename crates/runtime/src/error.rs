//! Runtime error types.

use crate::simulation::CharacterId;

/// Convenience alias used across the runtime API.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced by the runtime orchestrator and its handle.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("unknown character {0:?}")]
    UnknownCharacter(CharacterId),

    #[error("class `{0}` not found in the loaded content")]
    UnknownClass(String),

    #[error("ability slot {slot} does not exist on character {character:?}")]
    UnknownAbilitySlot {
        character: CharacterId,
        slot: usize,
    },

    #[error("runtime has shut down")]
    ChannelClosed,

    #[error("content error: {0}")]
    Content(#[from] anyhow::Error),
}
