//! Side-effect registry for interaction actions.
//!
//! Interaction content never embeds code. An action that has a side effect
//! carries a symbolic effect id; this registry maps that id to a handler
//! which turns the current state into a batch of reducer actions. The session
//! dispatches the batch through the normal reducer funnel, so effects get the
//! same single-writer, fully-applied-before-next guarantees as everything
//! else, and the persisted state stays free of non-serializable values.

use std::collections::BTreeMap;

use oakwood_core::{Action, GameState, LogCategory};

use crate::tables::ContentTables;

/// A resolved side effect: inspects the state and tables, returns the
/// actions to dispatch.
pub type EffectHandler = fn(&GameState, &ContentTables) -> Vec<Action>;

/// Registry of effect handlers keyed by effect id.
///
/// Content validation checks every effect id referenced by an interaction
/// table against the registry, so lookups after load never miss.
#[derive(Default)]
pub struct EffectRegistry {
    handlers: BTreeMap<String, EffectHandler>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the handlers the builtin campaign references.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("spider-loot", spider_loot);
        registry.register("take-cave-map", take_cave_map);
        registry.register("accept-cave-quest", accept_cave_quest);
        registry.register("elara-open-shop", elara_open_shop);
        registry
    }

    pub fn register(&mut self, effect_id: impl Into<String>, handler: EffectHandler) {
        self.handlers.insert(effect_id.into(), handler);
    }

    pub fn contains(&self, effect_id: &str) -> bool {
        self.handlers.contains_key(effect_id)
    }

    pub fn resolve(&self, effect_id: &str) -> Option<EffectHandler> {
        self.handlers.get(effect_id).copied()
    }
}

fn log(text: impl Into<String>, category: LogCategory) -> Action {
    Action::AddLogMessage {
        text: text.into(),
        category,
    }
}

/// Loot collected after defeating the giant spider.
fn spider_loot(_state: &GameState, _tables: &ContentTables) -> Vec<Action> {
    vec![
        Action::AddGold { amount: 25 },
        Action::AddItem {
            item_id: "health_potion".to_owned(),
            quantity: 1,
        },
        log(
            "You collect 25 gold and a Health Potion from the spider's hoard.",
            LogCategory::Combat,
        ),
    ]
}

/// The map found in the spider's web.
fn take_cave_map(_state: &GameState, _tables: &ContentTables) -> Vec<Action> {
    vec![
        Action::AddItem {
            item_id: "cave_map".to_owned(),
            quantity: 1,
        },
        log(
            "You take the map. A hidden passage is marked with a strange symbol.",
            LogCategory::System,
        ),
    ]
}

/// Elder Thomas' request to investigate the Whispering Caves.
fn accept_cave_quest(state: &GameState, _tables: &ContentTables) -> Vec<Action> {
    vec![log(
        format!(
            "{} accepts the quest: investigate the Whispering Caves.",
            state.player.name
        ),
        LogCategory::System,
    )]
}

/// Elara's "show me your wares" choice hands control to the shop view.
///
/// The inventory comes from the NPC row, so the table stays the single
/// source of truth and the ids pass the table's foreign-key validation.
fn elara_open_shop(_state: &GameState, tables: &ContentTables) -> Vec<Action> {
    let Some(npc) = tables.npcs.get("shopkeeper") else {
        tracing::warn!("shopkeeper row missing from the NPC table");
        return Vec::new();
    };
    vec![Action::OpenShop {
        npc_id: npc.id.clone(),
        inventory: npc.shop_inventory.clone(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use oakwood_core::GameConfig;

    #[test]
    fn builtin_registry_resolves_all_campaign_effects() {
        let registry = EffectRegistry::builtin();
        for effect_id in [
            "spider-loot",
            "take-cave-map",
            "accept-cave-quest",
            "elara-open-shop",
        ] {
            assert!(registry.contains(effect_id), "missing {effect_id}");
        }
        assert!(!registry.contains("unseen-effect"));
    }

    #[test]
    fn spider_loot_emits_gold_and_potion() {
        let tables = ContentTables::builtin();
        let state = GameState::new_game("Aria", &GameConfig::default());
        let actions = EffectRegistry::builtin().resolve("spider-loot").unwrap()(&state, &tables);
        assert!(actions.contains(&Action::AddGold { amount: 25 }));
        assert!(actions.iter().any(|action| matches!(
            action,
            Action::AddItem { item_id, quantity: 1 } if item_id == "health_potion"
        )));
    }

    #[test]
    fn elara_shop_inventory_comes_from_the_npc_table() {
        let mut tables = ContentTables::builtin();
        tables
            .npcs
            .get_mut("shopkeeper")
            .unwrap()
            .shop_inventory
            .push("iron_helmet".to_owned());
        let state = GameState::new_game("Aria", &GameConfig::default());

        let actions =
            EffectRegistry::builtin().resolve("elara-open-shop").unwrap()(&state, &tables);
        let [Action::OpenShop { npc_id, inventory }] = actions.as_slice() else {
            panic!("expected a single OpenShop action");
        };
        assert_eq!(npc_id, "shopkeeper");
        assert_eq!(inventory, &tables.npcs["shopkeeper"].shop_inventory);
        assert!(inventory.contains(&"iron_helmet".to_owned()));
    }
}
