//! Game configuration.
//!
//! [`GameConfig`] collects the tunables the reducer needs at runtime: the
//! message-log capacity and the template a fresh player is built from. The
//! content crate loads the real campaign values from TOML; the defaults here
//! only cover tests and tooling that run without content.

use crate::state::EquipSlot;

/// Tunable game parameters and the starting-player template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum number of entries retained by the message log.
    pub log_capacity: usize,

    /// Health and max health a new player starts with.
    pub starting_health: u32,

    /// Gold a new player starts with.
    pub starting_gold: u32,

    /// Inventory a new player starts with.
    pub starting_items: Vec<StartingItem>,

    /// Skills a new player starts with, at level 1 and zero experience.
    pub starting_skills: Vec<SkillSpec>,
}

impl GameConfig {
    pub const DEFAULT_LOG_CAPACITY: usize = 10;
    pub const DEFAULT_STARTING_HEALTH: u32 = 100;
    pub const DEFAULT_STARTING_GOLD: u32 = 50;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            starting_items: Vec::new(),
            starting_skills: Vec::new(),
        }
    }
}

/// One stack in the starting inventory.
///
/// `slot` is set when the item begins the game equipped; the content
/// validator checks that the slot matches the item's kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingItem {
    pub item_id: String,
    pub quantity: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: Option<EquipSlot>,
}

/// One skill in the starting skill set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    pub id: String,
    pub name: String,
    pub max_experience: u32,
}
