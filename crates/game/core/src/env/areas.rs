//! Area and room geometry oracle.
//!
//! Rooms encode their tile grid as a fill terrain plus sparse overrides, so
//! content files only list the cells that differ from the fill.

use std::collections::BTreeMap;

/// Read-only access to the area table.
pub trait AreaOracle: Send + Sync {
    fn area(&self, area_id: &str) -> Option<&Area>;
}

/// Visual/terrain classification of a single room cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TileKind {
    Floor,
    Wall,
    Door,
    Water,
    Grass,
    Road,
    Bridge,
    ShopCounter,
    Chest,
    StairsUp,
    StairsDown,
    Bed,
}

/// Broad classification of an area or world location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AreaKind {
    Town,
    Dungeon,
    Wilderness,
}

/// Where an exit leads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitTarget {
    /// Another room in the same area.
    Room(String),
    /// Back out to the world map.
    WorldMap,
}

/// A walkable cell that moves the player to another room or the world map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exit {
    pub x: i32,
    pub y: i32,
    pub target: ExitTarget,
    /// Arrival coordinates in the target room, when `target` is a room.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_x: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_y: Option<i32>,
}

/// An NPC, enemy, or item placed at a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Foreign key into the NPC, enemy, or item table.
    pub id: String,
    pub x: i32,
    pub y: i32,
}

/// A single explorable grid of tiles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: String,
    pub name: String,
    pub width: i32,
    pub height: i32,
    /// Terrain used for every cell not listed in `tiles`.
    pub fill: TileKind,
    /// Sparse overrides: (x, y, kind).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tiles: Vec<(i32, i32, TileKind)>,
    pub exits: Vec<Exit>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub npcs: Vec<Placement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<Placement>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Placement>,
}

impl Room {
    /// Resolves the terrain at a cell, or `None` outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<TileKind> {
        if !self.contains(x, y) {
            return None;
        }
        Some(
            self.tiles
                .iter()
                .rev()
                .find(|(tx, ty, _)| *tx == x && *ty == y)
                .map(|(_, _, kind)| *kind)
                .unwrap_or(self.fill),
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// The exit at a cell, if any.
    pub fn exit_at(&self, x: i32, y: i32) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.x == x && exit.y == y)
    }
}

/// Where the player lands when entering an area from the world map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryPoint {
    pub room_id: String,
    pub x: i32,
    pub y: i32,
}

/// A named collection of rooms reachable from one world-map location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub id: String,
    pub name: String,
    pub kind: AreaKind,
    pub entry_point: EntryPoint,
    pub rooms: BTreeMap<String, Room>,
}

impl Area {
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.get(room_id)
    }
}
