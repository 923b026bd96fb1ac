//! Area geometry loader.
//!
//! Room tiles use the fill-then-override encoding: the RON file names a fill
//! terrain and lists only the cells that differ, so a ten-by-ten room is a
//! handful of lines instead of a hundred.

use std::path::Path;

use oakwood_core::Area;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Area table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaTable {
    pub areas: Vec<Area>,
}

/// Loader for area geometry from RON files.
pub struct AreaLoader;

impl AreaLoader {
    /// Load the area table from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Area>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse the area table from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Area>> {
        let table: AreaTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse area table RON: {}", e))?;
        Ok(table.areas)
    }
}
