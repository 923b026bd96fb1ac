//! In-memory save repository for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use oakwood_core::GameState;

use super::{RepositoryError, Result, SaveRepository};

/// Keeps slots in a mutex-guarded map. Nothing survives the process.
#[derive(Default)]
pub struct InMemorySaveRepository {
    slots: Mutex<HashMap<String, GameState>>,
}

impl InMemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, slot: &str, state: &GameState) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(slot.to_owned(), state.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<GameState>> {
        let slots = self.slots.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.slots
            .lock()
            .map(|slots| slots.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| RepositoryError::LockPoisoned)?;
        slots.remove(slot);
        Ok(())
    }
}
