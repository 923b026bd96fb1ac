//! Data-driven content tables and loaders.
//!
//! This crate houses the static game content and the loaders that read it
//! from RON/TOML data files:
//! - Item catalog, NPC and enemy tables, world map, area/room geometry,
//!   interaction trees (data-driven via RON)
//! - Game configuration and the starting-player template (TOML)
//! - The effect registry mapping symbolic effect ids to handlers
//!
//! Content is consumed by the reducer through the oracle traits in
//! `oakwood_core::env` and never appears in game state. Cross-table
//! references are validated once at load time; a table that passes
//! [`validate::validate_tables`] cannot produce dangling lookups later.

pub mod effects;
pub mod loaders;
pub mod tables;
pub mod validate;

pub use effects::{EffectHandler, EffectRegistry};
pub use loaders::{
    AreaLoader, ConfigLoader, EnemyLoader, InteractionLoader, ItemLoader, NpcLoader, WorldLoader,
};
pub use tables::ContentTables;
pub use validate::validate_tables;
