//! Content loaders for reading game data from files.
//!
//! One loader per table. RON carries the tables, TOML carries the game
//! configuration. Each loader only parses; cross-table checks live in
//! [`crate::validate`].

pub mod area;
pub mod config;
pub mod enemy;
pub mod interaction;
pub mod item;
pub mod npc;
pub mod world;

pub use area::AreaLoader;
pub use config::ConfigLoader;
pub use enemy::EnemyLoader;
pub use interaction::InteractionLoader;
pub use item::ItemLoader;
pub use npc::NpcLoader;
pub use world::WorldLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
