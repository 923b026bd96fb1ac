//! NPC table loader.

use std::path::Path;

use oakwood_core::NpcDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// NPC table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcTable {
    pub npcs: Vec<NpcDefinition>,
}

/// Loader for the NPC table from RON files.
pub struct NpcLoader;

impl NpcLoader {
    /// Load the NPC table from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<NpcDefinition>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse the NPC table from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<NpcDefinition>> {
        let table: NpcTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC table RON: {}", e))?;
        Ok(table.npcs)
    }
}
