//! Persistence for dynamic runtime data.
//!
//! Repositories store data that changes during gameplay, namely the game
//! state itself. Static content (items, NPCs, areas) is served by the oracle
//! traits in `oakwood_core::env` and never passes through here.

mod error;
mod file;
mod memory;

pub use error::RepositoryError;
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;

use oakwood_core::GameState;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Storage for named save slots.
///
/// Implementations must tolerate concurrent readers; the session is the only
/// writer.
pub trait SaveRepository: Send + Sync {
    /// Persist a state snapshot under a slot name, replacing any previous
    /// snapshot in that slot.
    fn save(&self, slot: &str, state: &GameState) -> Result<()>;

    /// Load the snapshot in a slot. `Ok(None)` when the slot is empty.
    fn load(&self, slot: &str) -> Result<Option<GameState>>;

    fn exists(&self, slot: &str) -> bool;

    fn delete(&self, slot: &str) -> Result<()>;
}
