//! Item catalog oracle.

use crate::state::EquipSlot;

/// Read-only access to the item table.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, item_id: &str) -> Option<&ItemDefinition>;
}

/// One entry in the item table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Gold value when bought or sold.
    pub value: u32,
    pub kind: ItemKind,
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon; always occupies the hand slot.
    Weapon { damage: u32 },

    /// Equippable armor piece for a specific slot.
    Armor { slot: EquipSlot, defense: u32 },

    /// Consumable that restores health.
    Consumable { healing: u32 },

    /// Quest item; cannot be equipped or consumed.
    Quest,
}

impl ItemKind {
    /// The equipment slot this item occupies, or `None` for items that
    /// cannot be equipped.
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self {
            ItemKind::Weapon { .. } => Some(EquipSlot::Hand),
            ItemKind::Armor { slot, .. } => Some(*slot),
            ItemKind::Consumable { .. } | ItemKind::Quest => None,
        }
    }
}
