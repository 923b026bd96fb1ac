//! Id-keyed content tables implementing the core oracle traits.

use std::collections::BTreeMap;
use std::path::Path;

use oakwood_core::{
    Area, AreaOracle, EnemyDefinition, EnemyOracle, Env, GameEnv, Interaction, InteractionOracle,
    ItemDefinition, ItemOracle, NpcDefinition, NpcOracle, WorldLocation, WorldOracle,
};

use crate::loaders::{
    AreaLoader, EnemyLoader, InteractionLoader, ItemLoader, LoadResult, NpcLoader, WorldLoader,
};

/// All static tables for one campaign, keyed by id.
///
/// Implements every oracle trait in `oakwood_core::env`; the session hands
/// the reducer a [`GameEnv`] borrowed from one instance of this struct.
#[derive(Clone, Debug, Default)]
pub struct ContentTables {
    pub items: BTreeMap<String, ItemDefinition>,
    pub npcs: BTreeMap<String, NpcDefinition>,
    pub enemies: BTreeMap<String, EnemyDefinition>,
    pub areas: BTreeMap<String, Area>,
    pub world: BTreeMap<String, WorldLocation>,
    pub interactions: BTreeMap<String, Interaction>,
}

impl ContentTables {
    /// The embedded Oakwood campaign: the reference content this crate ships.
    pub fn builtin() -> Self {
        Self::from_sources(
            include_str!("../data/items.ron"),
            include_str!("../data/npcs.ron"),
            include_str!("../data/enemies.ron"),
            include_str!("../data/areas.ron"),
            include_str!("../data/world.ron"),
            include_str!("../data/interactions.ron"),
        )
        .expect("builtin campaign data must parse")
    }

    /// Parses a full table set from RON text.
    pub fn from_sources(
        items: &str,
        npcs: &str,
        enemies: &str,
        areas: &str,
        world: &str,
        interactions: &str,
    ) -> LoadResult<Self> {
        Ok(Self {
            items: keyed(ItemLoader::parse(items)?, |item| item.id.clone()),
            npcs: keyed(NpcLoader::parse(npcs)?, |npc| npc.id.clone()),
            enemies: keyed(EnemyLoader::parse(enemies)?, |enemy| enemy.id.clone()),
            areas: keyed(AreaLoader::parse(areas)?, |area| area.id.clone()),
            world: keyed(WorldLoader::parse(world)?, |location| location.id.clone()),
            interactions: InteractionLoader::parse(interactions)?,
        })
    }

    /// Loads a full table set from a content directory laid out like `data/`.
    pub fn load_dir(dir: &Path) -> LoadResult<Self> {
        Ok(Self {
            items: keyed(ItemLoader::load(&dir.join("items.ron"))?, |item| {
                item.id.clone()
            }),
            npcs: keyed(NpcLoader::load(&dir.join("npcs.ron"))?, |npc| {
                npc.id.clone()
            }),
            enemies: keyed(EnemyLoader::load(&dir.join("enemies.ron"))?, |enemy| {
                enemy.id.clone()
            }),
            areas: keyed(AreaLoader::load(&dir.join("areas.ron"))?, |area| {
                area.id.clone()
            }),
            world: keyed(WorldLoader::load(&dir.join("world.ron"))?, |location| {
                location.id.clone()
            }),
            interactions: InteractionLoader::load(&dir.join("interactions.ron"))?,
        })
    }

    /// Borrows all tables as a type-erased reducer environment.
    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(self, self, self, self, self, self).into_game_env()
    }
}

fn keyed<T>(rows: Vec<T>, key: impl Fn(&T) -> String) -> BTreeMap<String, T> {
    rows.into_iter().map(|row| (key(&row), row)).collect()
}

impl ItemOracle for ContentTables {
    fn definition(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.items.get(item_id)
    }
}

impl NpcOracle for ContentTables {
    fn definition(&self, npc_id: &str) -> Option<&NpcDefinition> {
        self.npcs.get(npc_id)
    }
}

impl EnemyOracle for ContentTables {
    fn definition(&self, enemy_id: &str) -> Option<&EnemyDefinition> {
        self.enemies.get(enemy_id)
    }
}

impl AreaOracle for ContentTables {
    fn area(&self, area_id: &str) -> Option<&Area> {
        self.areas.get(area_id)
    }
}

impl WorldOracle for ContentTables {
    fn location(&self, location_id: &str) -> Option<&WorldLocation> {
        self.world.get(location_id)
    }

    fn locations(&self) -> Vec<&WorldLocation> {
        self.world.values().collect()
    }
}

impl InteractionOracle for ContentTables {
    fn interaction(&self, interaction_id: &str) -> Option<&Interaction> {
        self.interactions.get(interaction_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oakwood_core::{ExitTarget, ItemKind, start};

    #[test]
    fn builtin_campaign_parses() {
        let tables = ContentTables::builtin();
        assert!(tables.items.contains_key("sword_basic"));
        assert!(tables.npcs.contains_key("town_elder"));
        assert!(tables.enemies.contains_key("giant_spider"));
        assert!(tables.areas.contains_key("oakwood_town"));
        assert!(tables.world.contains_key("whispering_caves"));
        assert!(tables.interactions.contains_key("elder_thomas"));
    }

    #[test]
    fn elder_thomas_tree_matches_reference_shape() {
        let tables = ContentTables::builtin();
        let tree = tables.interactions.get("elder_thomas").unwrap();
        assert_eq!(start(tree).unwrap(), "greeting");
        assert_eq!(tree.stages.len(), 7);
        let greeting = tree.stages.get("greeting").unwrap();
        assert!(greeting.action("farewell").unwrap().next_stage.is_none());
    }

    #[test]
    fn town_square_exits_reach_shop_and_world_map() {
        let tables = ContentTables::builtin();
        let area = tables.areas.get("oakwood_town").unwrap();
        let square = area.room("town_square").unwrap();
        assert!(square
            .exits
            .iter()
            .any(|exit| exit.target == ExitTarget::Room("item_shop".to_owned())));
        assert!(square
            .exits
            .iter()
            .any(|exit| exit.target == ExitTarget::WorldMap));
    }

    #[test]
    fn item_kinds_cover_equipment_and_consumables() {
        let tables = ContentTables::builtin();
        assert!(matches!(
            tables.items.get("sword_basic").unwrap().kind,
            ItemKind::Weapon { damage: 10 }
        ));
        assert!(matches!(
            tables.items.get("health_potion").unwrap().kind,
            ItemKind::Consumable { healing: 25 }
        ));
        assert!(matches!(
            tables.items.get("cave_map").unwrap().kind,
            ItemKind::Quest
        ));
    }
}
