//! Interaction tree loader.

use std::collections::BTreeMap;
use std::path::Path;

use oakwood_core::Interaction;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Interaction table structure for RON files, keyed by interaction id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionTable {
    pub interactions: BTreeMap<String, Interaction>,
}

/// Loader for interaction trees from RON files.
pub struct InteractionLoader;

impl InteractionLoader {
    /// Load the interaction table from a RON file.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, Interaction>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse the interaction table from RON text.
    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, Interaction>> {
        let table: InteractionTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse interaction table RON: {}", e))?;
        Ok(table.interactions)
    }
}
