//! World map oracle.

use crate::env::areas::AreaKind;
use crate::state::Position;

/// Read-only access to the world map table.
pub trait WorldOracle: Send + Sync {
    fn location(&self, location_id: &str) -> Option<&WorldLocation>;

    /// All locations, for rendering the world map.
    fn locations(&self) -> Vec<&WorldLocation>;
}

/// One marker on the world map. `id` doubles as the foreign key into the
/// area table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldLocation {
    pub id: String,
    pub name: String,
    pub kind: AreaKind,
    pub description: String,
    pub position: Position,
    /// Locked locations are shown but cannot be entered yet.
    pub unlocked: bool,
}
