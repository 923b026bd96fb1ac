//! Player character state.

use std::collections::BTreeMap;

use crate::config::GameConfig;

/// A coordinate inside a room grid or on the world map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Equipment attachment point. Each slot holds at most one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum EquipSlot {
    Head,
    Body,
    Hand,
    Feet,
}

/// One stack of a single item in the player's inventory.
///
/// `equipped` stays in lockstep with `PlayerState::equipped`: an entry is
/// flagged if and only if exactly one slot maps to its `item_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    pub item_id: String,
    pub quantity: u32,
    pub equipped: bool,
}

impl InventoryEntry {
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            equipped: false,
        }
    }
}

/// A trainable skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub max_experience: u32,
}

/// Everything about the player character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub name: String,
    /// Current health, kept within `0..=max_health` on every write path.
    pub health: u32,
    pub max_health: u32,
    pub gold: u32,
    pub inventory: Vec<InventoryEntry>,
    /// Skills keyed by skill id.
    pub skills: BTreeMap<String, Skill>,
    /// Slot -> item id. At most one item per slot.
    pub equipped: BTreeMap<EquipSlot, String>,
    pub current_area_id: Option<String>,
    pub current_room_id: Option<String>,
    pub position: Position,
    /// Areas the player has entered at least once. Set semantics: no
    /// duplicates, insertion order irrelevant.
    pub visited_areas: Vec<String>,
    pub completed_quests: Vec<String>,
}

impl PlayerState {
    /// Builds a player from the starting template in [`GameConfig`].
    pub fn from_config(name: &str, config: &GameConfig) -> Self {
        let mut inventory = Vec::with_capacity(config.starting_items.len());
        let mut equipped = BTreeMap::new();
        for item in &config.starting_items {
            let mut entry = InventoryEntry::new(item.item_id.clone(), item.quantity);
            if let Some(slot) = item.slot {
                entry.equipped = true;
                equipped.insert(slot, item.item_id.clone());
            }
            inventory.push(entry);
        }

        let skills = config
            .starting_skills
            .iter()
            .map(|spec| {
                (
                    spec.id.clone(),
                    Skill {
                        name: spec.name.clone(),
                        level: 1,
                        experience: 0,
                        max_experience: spec.max_experience,
                    },
                )
            })
            .collect();

        Self {
            name: name.to_owned(),
            health: config.starting_health,
            max_health: config.starting_health,
            gold: config.starting_gold,
            inventory,
            skills,
            equipped,
            current_area_id: None,
            current_room_id: None,
            position: Position::ORIGIN,
            visited_areas: Vec::new(),
            completed_quests: Vec::new(),
        }
    }

    /// Looks up the inventory entry for `item_id`.
    pub fn inventory_entry(&self, item_id: &str) -> Option<&InventoryEntry> {
        self.inventory.iter().find(|entry| entry.item_id == item_id)
    }

    pub(crate) fn inventory_entry_mut(&mut self, item_id: &str) -> Option<&mut InventoryEntry> {
        self.inventory
            .iter_mut()
            .find(|entry| entry.item_id == item_id)
    }

    /// The slot currently holding `item_id`, if any.
    pub fn equipped_slot(&self, item_id: &str) -> Option<EquipSlot> {
        self.equipped
            .iter()
            .find(|(_, id)| id.as_str() == item_id)
            .map(|(slot, _)| *slot)
    }

    /// Clamps health into `0..=max_health`.
    pub(crate) fn clamp_health(&mut self) {
        if self.health > self.max_health {
            self.health = self.max_health;
        }
    }
}
