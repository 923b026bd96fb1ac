//! Enemy table loader.

use std::path::Path;

use oakwood_core::EnemyDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTable {
    pub enemies: Vec<EnemyDefinition>,
}

/// Loader for the enemy table from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load the enemy table from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyDefinition>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse the enemy table from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<EnemyDefinition>> {
        let table: EnemyTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy table RON: {}", e))?;
        Ok(table.enemies)
    }
}
