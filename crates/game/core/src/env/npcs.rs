//! NPC table oracle.

/// Read-only access to the NPC table.
pub trait NpcOracle: Send + Sync {
    fn definition(&self, npc_id: &str) -> Option<&NpcDefinition>;
}

/// One entry in the NPC table.
///
/// Interaction trees are referenced by id rather than embedded, so the state
/// snapshot and the save slot never carry tree data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_shop: bool,
    /// Item ids this NPC sells, empty unless `is_shop`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shop_inventory: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interaction_id: Option<String>,
}
