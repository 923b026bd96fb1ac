//! The game state reducer.
//!
//! [`GameEngine`] is the authoritative reducer for [`GameState`]: one action
//! is fully applied before the next is accepted, and every mutation in the
//! process flows through [`GameEngine::apply`]. The reducer is total over the
//! action surface. Rejections (insufficient gold, unknown item, missing
//! content row) leave the state unchanged, at most adding a log message;
//! nothing here returns an error to the caller.

use crate::action::Action;
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{GameState, GameView, InventoryEntry, LogCategory, Position, ShopSession};

/// Reducer over a mutable [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Applies one action. Total: unknown or inapplicable actions are
    /// identity.
    pub fn apply(&mut self, env: GameEnv<'_>, action: &Action) {
        match action {
            Action::SetView { view } => self.state.view = *view,
            Action::UpdatePlayer { patch } => patch.apply(&mut self.state.player),
            Action::SetLocation {
                area_id,
                room_id,
                x,
                y,
            } => self.set_location(area_id, room_id, *x, *y),
            Action::AddLogMessage { text, category } => self.log(text.clone(), *category),
            Action::OpenShop { npc_id, inventory } => {
                self.state.active_shop = Some(ShopSession {
                    npc_id: npc_id.clone(),
                    inventory: inventory.clone(),
                });
                self.state.view = GameView::Shop;
            }
            Action::CloseShop => {
                self.state.active_shop = None;
                self.state.view = GameView::AreaMap;
            }
            Action::AddGold { amount } => {
                self.state.player.gold = self.state.player.gold.saturating_add(*amount);
            }
            Action::SpendGold { amount } => {
                // Insufficient balance is a silent rejection.
                if self.state.player.gold >= *amount {
                    self.state.player.gold -= *amount;
                }
            }
            Action::AddItem { item_id, quantity } => self.add_item(&env, item_id, *quantity),
            Action::RemoveItem { item_id, quantity } => self.remove_item(item_id, *quantity),
            Action::EquipItem { item_id } => self.equip_item(&env, item_id),
            Action::UnequipItem { item_id } => self.unequip_item(item_id),
            // Persistence runs in the session layer, which owns the save
            // repository; the reducer stays pure over content oracles.
            Action::SaveGame | Action::LoadGame => {}
            Action::NewGame { name } => {
                *self.state = GameState::new_game(name, self.config);
            }
            Action::Unknown => {}
        }
    }

    fn log(&mut self, text: String, category: LogCategory) {
        self.state.push_log(text, category, self.config.log_capacity);
    }

    fn set_location(&mut self, area_id: &str, room_id: &str, x: i32, y: i32) {
        let player = &mut self.state.player;
        player.current_area_id = Some(area_id.to_owned());
        player.current_room_id = Some(room_id.to_owned());
        player.position = Position::new(x, y);
        if !player.visited_areas.iter().any(|id| id == area_id) {
            player.visited_areas.push(area_id.to_owned());
        }
    }

    fn add_item(&mut self, env: &GameEnv<'_>, item_id: &str, quantity: u32) {
        // Content-table misses are recoverable: log and ignore. When no item
        // oracle is wired up (minimal harnesses) the add is unvalidated.
        if let Ok(items) = env.items()
            && items.definition(item_id).is_none()
        {
            self.log(
                format!("Error: item '{item_id}' not found"),
                LogCategory::Error,
            );
            return;
        }
        if quantity == 0 {
            return;
        }
        match self.state.player.inventory_entry_mut(item_id) {
            Some(entry) => entry.quantity += quantity,
            None => self
                .state
                .player
                .inventory
                .push(InventoryEntry::new(item_id, quantity)),
        }
    }

    fn remove_item(&mut self, item_id: &str, quantity: u32) {
        let player = &mut self.state.player;
        let Some(entry) = player.inventory_entry_mut(item_id) else {
            return;
        };
        if entry.quantity < quantity {
            return;
        }
        if entry.quantity == quantity {
            player.inventory.retain(|entry| entry.item_id != item_id);
            player.equipped.retain(|_, id| id != item_id);
        } else {
            entry.quantity -= quantity;
        }
    }

    fn equip_item(&mut self, env: &GameEnv<'_>, item_id: &str) {
        if self.state.player.inventory_entry(item_id).is_none() {
            return;
        }
        let Ok(items) = env.items() else {
            return;
        };
        let Some(definition) = items.definition(item_id) else {
            self.log(
                format!("Error: item '{item_id}' not found"),
                LogCategory::Error,
            );
            return;
        };
        let Some(slot) = definition.kind.equip_slot() else {
            self.log(
                format!("{} cannot be equipped", definition.name),
                LogCategory::Error,
            );
            return;
        };

        let player = &mut self.state.player;
        if let Some(previous) = player.equipped.insert(slot, item_id.to_owned())
            && previous != item_id
            && let Some(entry) = player.inventory_entry_mut(&previous)
        {
            entry.equipped = false;
        }
        if let Some(entry) = player.inventory_entry_mut(item_id) {
            entry.equipped = true;
        }
    }

    fn unequip_item(&mut self, item_id: &str) {
        let player = &mut self.state.player;
        let Some(slot) = player.equipped_slot(item_id) else {
            return;
        };
        player.equipped.remove(&slot);
        if let Some(entry) = player.inventory_entry_mut(item_id) {
            entry.equipped = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::PlayerPatch;
    use crate::env::{Env, ItemDefinition, ItemKind, ItemOracle};
    use crate::state::EquipSlot;
    use std::collections::BTreeMap;

    struct StubItems {
        definitions: BTreeMap<String, ItemDefinition>,
    }

    impl StubItems {
        fn new() -> Self {
            let mut definitions = BTreeMap::new();
            for definition in [
                ItemDefinition {
                    id: "sword_basic".into(),
                    name: "Basic Sword".into(),
                    description: "A simple iron sword.".into(),
                    value: 50,
                    kind: ItemKind::Weapon { damage: 10 },
                },
                ItemDefinition {
                    id: "staff_magic".into(),
                    name: "Magic Staff".into(),
                    description: "A wooden staff.".into(),
                    value: 75,
                    kind: ItemKind::Weapon { damage: 8 },
                },
                ItemDefinition {
                    id: "iron_helmet".into(),
                    name: "Iron Helmet".into(),
                    description: "A solid metal helmet.".into(),
                    value: 30,
                    kind: ItemKind::Armor {
                        slot: EquipSlot::Head,
                        defense: 3,
                    },
                },
                ItemDefinition {
                    id: "health_potion".into(),
                    name: "Health Potion".into(),
                    description: "Restores health.".into(),
                    value: 20,
                    kind: ItemKind::Consumable { healing: 25 },
                },
            ] {
                definitions.insert(definition.id.clone(), definition);
            }
            Self { definitions }
        }
    }

    impl ItemOracle for StubItems {
        fn definition(&self, item_id: &str) -> Option<&ItemDefinition> {
            self.definitions.get(item_id)
        }
    }

    fn apply(state: &mut GameState, config: &GameConfig, items: &StubItems, action: Action) {
        let env: GameEnv<'_> = Env::new(Some(items), None, None, None, None, None);
        GameEngine::new(state, config).apply(env, &action);
    }

    fn fresh() -> (GameState, GameConfig, StubItems) {
        let config = GameConfig::default();
        let state = GameState::new_game("Aria", &config);
        (state, config, StubItems::new())
    }

    #[test]
    fn spend_gold_over_balance_is_rejected() {
        let (mut state, config, items) = fresh();
        assert_eq!(state.player.gold, 50);

        apply(&mut state, &config, &items, Action::SpendGold { amount: 100 });
        assert_eq!(state.player.gold, 50);

        apply(&mut state, &config, &items, Action::SpendGold { amount: 30 });
        assert_eq!(state.player.gold, 20);
    }

    #[test]
    fn add_then_remove_restores_inventory() {
        let (mut state, config, items) = fresh();
        let before = state.player.inventory.clone();

        apply(
            &mut state,
            &config,
            &items,
            Action::AddItem {
                item_id: "health_potion".into(),
                quantity: 3,
            },
        );
        apply(
            &mut state,
            &config,
            &items,
            Action::RemoveItem {
                item_id: "health_potion".into(),
                quantity: 3,
            },
        );

        assert_eq!(state.player.inventory, before);
    }

    #[test]
    fn add_item_stacks_existing_entries() {
        let (mut state, config, items) = fresh();
        for _ in 0..2 {
            apply(
                &mut state,
                &config,
                &items,
                Action::AddItem {
                    item_id: "health_potion".into(),
                    quantity: 2,
                },
            );
        }
        assert_eq!(
            state.player.inventory_entry("health_potion").unwrap().quantity,
            4
        );
    }

    #[test]
    fn add_unknown_item_logs_and_ignores() {
        let (mut state, config, items) = fresh();
        apply(
            &mut state,
            &config,
            &items,
            Action::AddItem {
                item_id: "excalibur".into(),
                quantity: 1,
            },
        );
        assert!(state.player.inventory_entry("excalibur").is_none());
        let latest = state.message_log.latest().unwrap();
        assert_eq!(latest.category, LogCategory::Error);
        assert!(latest.text.contains("excalibur"));
    }

    #[test]
    fn remove_item_with_insufficient_quantity_is_rejected() {
        let (mut state, config, items) = fresh();
        apply(
            &mut state,
            &config,
            &items,
            Action::AddItem {
                item_id: "health_potion".into(),
                quantity: 2,
            },
        );
        apply(
            &mut state,
            &config,
            &items,
            Action::RemoveItem {
                item_id: "health_potion".into(),
                quantity: 5,
            },
        );
        assert_eq!(
            state.player.inventory_entry("health_potion").unwrap().quantity,
            2
        );
    }

    #[test]
    fn removing_an_equipped_stack_clears_the_slot() {
        let (mut state, config, items) = fresh();
        apply(
            &mut state,
            &config,
            &items,
            Action::AddItem {
                item_id: "sword_basic".into(),
                quantity: 1,
            },
        );
        apply(
            &mut state,
            &config,
            &items,
            Action::EquipItem {
                item_id: "sword_basic".into(),
            },
        );
        assert_eq!(
            state.player.equipped.get(&EquipSlot::Hand).unwrap(),
            "sword_basic"
        );

        apply(
            &mut state,
            &config,
            &items,
            Action::RemoveItem {
                item_id: "sword_basic".into(),
                quantity: 1,
            },
        );
        assert!(state.player.inventory_entry("sword_basic").is_none());
        assert!(state.player.equipped.get(&EquipSlot::Hand).is_none());
    }

    #[test]
    fn equipping_same_slot_swaps_the_occupant() {
        let (mut state, config, items) = fresh();
        for item_id in ["sword_basic", "staff_magic"] {
            apply(
                &mut state,
                &config,
                &items,
                Action::AddItem {
                    item_id: item_id.into(),
                    quantity: 1,
                },
            );
        }
        apply(
            &mut state,
            &config,
            &items,
            Action::EquipItem {
                item_id: "sword_basic".into(),
            },
        );
        apply(
            &mut state,
            &config,
            &items,
            Action::EquipItem {
                item_id: "staff_magic".into(),
            },
        );

        assert_eq!(
            state.player.equipped.get(&EquipSlot::Hand).unwrap(),
            "staff_magic"
        );
        assert!(state.player.inventory_entry("staff_magic").unwrap().equipped);
        assert!(!state.player.inventory_entry("sword_basic").unwrap().equipped);
    }

    #[test]
    fn equipping_a_consumable_is_rejected_with_a_log() {
        let (mut state, config, items) = fresh();
        apply(
            &mut state,
            &config,
            &items,
            Action::AddItem {
                item_id: "health_potion".into(),
                quantity: 1,
            },
        );
        apply(
            &mut state,
            &config,
            &items,
            Action::EquipItem {
                item_id: "health_potion".into(),
            },
        );
        assert!(state.player.equipped.is_empty());
        assert_eq!(
            state.message_log.latest().unwrap().category,
            LogCategory::Error
        );
    }

    #[test]
    fn unequip_clears_slot_and_flag() {
        let (mut state, config, items) = fresh();
        apply(
            &mut state,
            &config,
            &items,
            Action::AddItem {
                item_id: "iron_helmet".into(),
                quantity: 1,
            },
        );
        apply(
            &mut state,
            &config,
            &items,
            Action::EquipItem {
                item_id: "iron_helmet".into(),
            },
        );
        apply(
            &mut state,
            &config,
            &items,
            Action::UnequipItem {
                item_id: "iron_helmet".into(),
            },
        );
        assert!(state.player.equipped.get(&EquipSlot::Head).is_none());
        assert!(!state.player.inventory_entry("iron_helmet").unwrap().equipped);

        // Unequipping something never equipped is a no-op.
        let before = state.clone();
        apply(
            &mut state,
            &config,
            &items,
            Action::UnequipItem {
                item_id: "iron_helmet".into(),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn set_location_deduplicates_visited_areas() {
        let (mut state, config, items) = fresh();
        for _ in 0..2 {
            apply(
                &mut state,
                &config,
                &items,
                Action::SetLocation {
                    area_id: "oakwood_town".into(),
                    room_id: "town_square".into(),
                    x: 5,
                    y: 8,
                },
            );
        }
        assert_eq!(state.player.visited_areas, vec!["oakwood_town".to_owned()]);
        assert_eq!(state.player.position, Position::new(5, 8));
        assert_eq!(state.player.current_room_id.as_deref(), Some("town_square"));
    }

    #[test]
    fn open_and_close_shop_drive_the_view() {
        let (mut state, config, items) = fresh();
        apply(
            &mut state,
            &config,
            &items,
            Action::OpenShop {
                npc_id: "shopkeeper".into(),
                inventory: vec!["health_potion".into(), "bread".into()],
            },
        );
        assert_eq!(state.view, GameView::Shop);
        assert!(state.active_shop.is_some());

        apply(&mut state, &config, &items, Action::CloseShop);
        assert_eq!(state.view, GameView::AreaMap);
        assert!(state.active_shop.is_none());
    }

    #[test]
    fn update_player_clamps_health_to_max() {
        let (mut state, config, items) = fresh();
        apply(
            &mut state,
            &config,
            &items,
            Action::UpdatePlayer {
                patch: PlayerPatch {
                    health: Some(500),
                    ..PlayerPatch::default()
                },
            },
        );
        assert_eq!(state.player.health, state.player.max_health);
    }

    #[test]
    fn log_ids_survive_truncation() {
        let (mut state, config, items) = fresh();
        for i in 0..30 {
            apply(
                &mut state,
                &config,
                &items,
                Action::AddLogMessage {
                    text: format!("event {i}"),
                    category: LogCategory::System,
                },
            );
            assert!(state.message_log.len() <= config.log_capacity);
        }
        // Welcome message consumed id 1; thirty more follow.
        assert_eq!(state.message_log.latest().unwrap().id, 31);
    }

    #[test]
    fn new_game_resets_everything() {
        let (mut state, config, items) = fresh();
        apply(&mut state, &config, &items, Action::AddGold { amount: 500 });
        apply(
            &mut state,
            &config,
            &items,
            Action::NewGame { name: "Bram".into() },
        );
        assert_eq!(state.player.gold, config.starting_gold);
        assert_eq!(state.view, GameView::WorldMap);
        assert_eq!(state.message_log.len(), 1);
        assert_eq!(state.log_counter, 1);
        assert!(state.message_log.latest().unwrap().text.contains("Bram"));
    }

    #[test]
    fn unknown_save_and_load_are_identity_here() {
        let (mut state, config, items) = fresh();
        let before = state.clone();
        for action in [Action::Unknown, Action::SaveGame, Action::LoadGame] {
            apply(&mut state, &config, &items, action);
        }
        assert_eq!(state, before);
    }
}
