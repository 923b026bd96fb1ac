//! The reducer's command surface.
//!
//! [`Action`] is a closed tagged union, one variant per command. It is
//! internally tagged for serde so persisted action streams stay readable, and
//! unrecognized tags deserialize to [`Action::Unknown`], which the reducer
//! treats as identity. That keeps old builds tolerant of actions recorded by
//! newer ones.

use crate::state::{LogCategory, PlayerState, Position};

/// Partial update applied to [`PlayerState`] by [`Action::UpdatePlayer`].
///
/// Every field is optional; absent fields are left untouched. Health is
/// clamped into `0..=max_health` after the patch lands.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub health: Option<u32>,
    pub max_health: Option<u32>,
    pub gold: Option<u32>,
    pub position: Option<Position>,
    pub completed_quests: Option<Vec<String>>,
}

impl PlayerPatch {
    pub fn apply(&self, player: &mut PlayerState) {
        if let Some(name) = &self.name {
            player.name = name.clone();
        }
        if let Some(max_health) = self.max_health {
            player.max_health = max_health;
        }
        if let Some(health) = self.health {
            player.health = health;
        }
        if let Some(gold) = self.gold {
            player.gold = gold;
        }
        if let Some(position) = self.position {
            player.position = position;
        }
        if let Some(quests) = &self.completed_quests {
            player.completed_quests = quests.clone();
        }
        player.clamp_health();
    }
}

/// A dispatched command. The reducer is total over this surface: no variant
/// ever errors back to the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Action {
    /// Replace the view unconditionally.
    SetView { view: crate::state::GameView },

    /// Merge a partial player update.
    UpdatePlayer { patch: PlayerPatch },

    /// Move the player to a room cell, recording the area as visited.
    SetLocation {
        area_id: String,
        room_id: String,
        x: i32,
        y: i32,
    },

    /// Append a message to the bounded log.
    AddLogMessage { text: String, category: LogCategory },

    /// Open a shop session and force the shop view.
    OpenShop {
        npc_id: String,
        inventory: Vec<String>,
    },

    /// Clear the shop session and return to the area map.
    CloseShop,

    /// Unconditional gold grant.
    AddGold { amount: u32 },

    /// Gold spend; rejected silently when the balance is insufficient.
    SpendGold { amount: u32 },

    /// Add to an existing stack or append a new inventory entry.
    AddItem { item_id: String, quantity: u32 },

    /// Remove from a stack; removing the last unit drops the entry and any
    /// equipment mapping for it.
    RemoveItem { item_id: String, quantity: u32 },

    /// Equip an inventory item into its kind-derived slot.
    EquipItem { item_id: String },

    /// Unequip whichever slot holds the item.
    UnequipItem { item_id: String },

    /// Persist the whole state to the named save slot. Handled by the
    /// session layer; identity inside the reducer.
    SaveGame,

    /// Restore the whole state from the named save slot. Handled by the
    /// session layer; identity inside the reducer.
    LoadGame,

    /// Reset to a fresh state for a newly named player.
    NewGame { name: String },

    /// Forward-compatibility catch-all for action tags this build does not
    /// know. Always a no-op.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}
