//! World map loader.

use std::path::Path;

use oakwood_core::WorldLocation;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// World map structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldTable {
    pub locations: Vec<WorldLocation>,
}

/// Loader for the world map from RON files.
pub struct WorldLoader;

impl WorldLoader {
    /// Load the world map from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<WorldLocation>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse the world map from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<WorldLocation>> {
        let table: WorldTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world map RON: {}", e))?;
        Ok(table.locations)
    }
}
