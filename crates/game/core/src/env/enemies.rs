//! Enemy table oracle.

/// Read-only access to the enemy table.
pub trait EnemyOracle: Send + Sync {
    fn definition(&self, enemy_id: &str) -> Option<&EnemyDefinition>;
}

/// One entry in the enemy table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,
    pub max_health: u32,
    pub damage: u32,
    pub defense: u32,
    /// Gold dropped on defeat.
    pub gold: u32,
    /// Item ids that may drop on defeat.
    #[cfg_attr(feature = "serde", serde(default))]
    pub drop_items: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interaction_id: Option<String>,
}
