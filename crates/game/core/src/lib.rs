//! Deterministic game logic and data types shared across frontends.
//!
//! `oakwood-core` defines the canonical rules of the game: the state snapshot,
//! the action command surface, the reducer that applies actions, and the
//! interaction (dialogue/encounter) engine. All state mutation flows through
//! [`reducer::GameEngine`], and supporting crates depend on the types
//! re-exported here. Static content (items, NPCs, areas, interaction trees) is
//! consumed through the oracle traits in [`env`] and never owned by this crate.
pub mod action;
pub mod config;
pub mod env;
pub mod interaction;
pub mod reducer;
pub mod state;

pub use action::{Action, PlayerPatch};
pub use config::{GameConfig, SkillSpec, StartingItem};
pub use env::{
    Area, AreaKind, AreaOracle, EnemyDefinition, EnemyOracle, EntryPoint, Env, Exit, ExitTarget,
    GameEnv, InteractionOracle, ItemDefinition, ItemKind, ItemOracle, NpcDefinition, NpcOracle,
    OracleError, Placement, Room, TileKind, WorldLocation, WorldOracle,
};
pub use interaction::{
    ActionOption, ActionOutcome, Interaction, InteractionError, InteractionKind, Stage,
    current_stage, resolve_action, start,
};
pub use reducer::GameEngine;
pub use state::{
    EquipSlot, GameState, GameView, InventoryEntry, LogCategory, LogMessage, MessageLog,
    PlayerState, Position, ShopSession, Skill,
};
