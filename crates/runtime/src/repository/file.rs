//! File-based save repository.

use std::fs;
use std::path::{Path, PathBuf};

use oakwood_core::GameState;

use super::{RepositoryError, Result, SaveRepository};

/// Stores each slot as `{slot}.json` under a base directory.
///
/// JSON keeps slots inspectable and compatible with saves written by other
/// frontends of the same state schema. Writes go to a temp file first and
/// are renamed into place, so a crash mid-write never clobbers the previous
/// snapshot.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("{slot}.json"))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: &str, state: &GameState) -> Result<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved slot '{}' to {}", slot, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<GameState>> {
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state: GameState = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded slot '{}' from {}", slot, path.display());

        Ok(Some(state))
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).exists()
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted slot '{}'", slot);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oakwood_core::GameConfig;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        let state = GameState::new_game("Aria", &GameConfig::default());

        repo.save("slot1", &state).unwrap();
        assert!(repo.exists("slot1"));

        let loaded = repo.load("slot1").unwrap().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn empty_slot_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        assert!(repo.load("missing").unwrap().is_none());
        assert!(!repo.exists("missing"));
    }

    #[test]
    fn delete_clears_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        let state = GameState::new_game("Aria", &GameConfig::default());

        repo.save("slot1", &state).unwrap();
        repo.delete("slot1").unwrap();
        assert!(!repo.exists("slot1"));

        // Deleting an empty slot is not an error.
        repo.delete("slot1").unwrap();
    }

    #[test]
    fn corrupt_slot_surfaces_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        std::fs::write(dir.path().join("bad.json"), b"not json").unwrap();

        assert!(matches!(
            repo.load("bad"),
            Err(RepositoryError::Serialization(_))
        ));
    }
}
