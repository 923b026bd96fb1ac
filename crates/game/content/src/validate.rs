//! Load-time validation of content tables.
//!
//! Malformed content is rejected here, once, instead of surfacing as runtime
//! lookup misses. Checks cover foreign keys (items referenced by shops,
//! placements, drops, and the starting inventory), exit targets, placement
//! bounds, interaction stage-graph closure, and effect-id resolvability.
//! Duplicate coordinates within a room only warn: the reference content never
//! overlaps entities and the engine does not enforce uniqueness.

use anyhow::{Result, bail};
use oakwood_core::{ExitTarget, GameConfig, Interaction, Room};

use crate::effects::EffectRegistry;
use crate::tables::ContentTables;

/// Validates a table set (and optionally a config/effect registry) against
/// itself. Returns the first problem found.
pub fn validate_tables(
    tables: &ContentTables,
    config: Option<&GameConfig>,
    effects: Option<&EffectRegistry>,
) -> Result<()> {
    for npc in tables.npcs.values() {
        for item_id in &npc.shop_inventory {
            ensure_item(tables, item_id, &format!("NPC '{}'", npc.id))?;
        }
        if let Some(interaction_id) = &npc.interaction_id
            && !tables.interactions.contains_key(interaction_id)
        {
            bail!(
                "NPC '{}' references unknown interaction '{}'",
                npc.id,
                interaction_id
            );
        }
    }

    for enemy in tables.enemies.values() {
        for item_id in &enemy.drop_items {
            ensure_item(tables, item_id, &format!("enemy '{}'", enemy.id))?;
        }
        if let Some(interaction_id) = &enemy.interaction_id
            && !tables.interactions.contains_key(interaction_id)
        {
            bail!(
                "enemy '{}' references unknown interaction '{}'",
                enemy.id,
                interaction_id
            );
        }
    }

    for area in tables.areas.values() {
        let entry = &area.entry_point;
        let Some(entry_room) = area.rooms.get(&entry.room_id) else {
            bail!(
                "area '{}' entry point references unknown room '{}'",
                area.id,
                entry.room_id
            );
        };
        if !entry_room.contains(entry.x, entry.y) {
            bail!("area '{}' entry point is outside its room", area.id);
        }
        for (room_key, room) in &area.rooms {
            if room_key != &room.id {
                bail!(
                    "area '{}' room key '{}' does not match its id '{}'",
                    area.id,
                    room_key,
                    room.id
                );
            }
            validate_room(tables, area.id.as_str(), room)?;
        }
    }

    // Locked locations may ship without geometry; they only need an area
    // definition once they become enterable.
    for location in tables.world.values() {
        if location.unlocked && !tables.areas.contains_key(&location.id) {
            bail!(
                "unlocked world location '{}' has no matching area definition",
                location.id
            );
        }
    }

    for (interaction_id, interaction) in &tables.interactions {
        validate_interaction(interaction_id, interaction, effects)?;
    }

    if let Some(config) = config {
        for item in &config.starting_items {
            ensure_item(tables, &item.item_id, "starting inventory")?;
            if let Some(slot) = item.slot {
                let kind = &tables.items[&item.item_id].kind;
                if kind.equip_slot() != Some(slot) {
                    bail!(
                        "starting item '{}' cannot occupy the {} slot",
                        item.item_id,
                        slot
                    );
                }
            }
        }
    }

    Ok(())
}

// One flat message so the offending id survives `Display`; a context chain
// would hide it from callers that log with `{}`.
fn ensure_item(tables: &ContentTables, item_id: &str, owner: &str) -> Result<()> {
    if !tables.items.contains_key(item_id) {
        bail!("{owner} references unknown item '{item_id}'");
    }
    Ok(())
}

fn validate_room(tables: &ContentTables, area_id: &str, room: &Room) -> Result<()> {
    let mut occupied: Vec<(i32, i32)> = Vec::new();
    let mut claim = |x: i32, y: i32, what: &str| {
        if occupied.contains(&(x, y)) {
            tracing::warn!(
                area = area_id,
                room = room.id.as_str(),
                x,
                y,
                "{what} shares a tile with another entity"
            );
        } else {
            occupied.push((x, y));
        }
    };

    for exit in &room.exits {
        if !room.contains(exit.x, exit.y) {
            bail!(
                "room '{}/{}' exit at ({}, {}) is outside the grid",
                area_id,
                room.id,
                exit.x,
                exit.y
            );
        }
        claim(exit.x, exit.y, "exit");
        match &exit.target {
            ExitTarget::Room(target) => {
                let Some(target_room) = tables
                    .areas
                    .get(area_id)
                    .and_then(|area| area.rooms.get(target))
                else {
                    bail!(
                        "room '{}/{}' exit targets unknown room '{}'",
                        area_id,
                        room.id,
                        target
                    );
                };
                if let (Some(tx), Some(ty)) = (exit.target_x, exit.target_y)
                    && !target_room.contains(tx, ty)
                {
                    bail!(
                        "room '{}/{}' exit lands outside room '{}'",
                        area_id,
                        room.id,
                        target
                    );
                }
            }
            ExitTarget::WorldMap => {}
        }
    }

    for placement in &room.npcs {
        if !tables.npcs.contains_key(&placement.id) {
            bail!(
                "room '{}/{}' places unknown NPC '{}'",
                area_id,
                room.id,
                placement.id
            );
        }
        ensure_in_bounds(area_id, room, placement.x, placement.y, "NPC")?;
        claim(placement.x, placement.y, "NPC");
    }

    for placement in &room.enemies {
        if !tables.enemies.contains_key(&placement.id) {
            bail!(
                "room '{}/{}' places unknown enemy '{}'",
                area_id,
                room.id,
                placement.id
            );
        }
        ensure_in_bounds(area_id, room, placement.x, placement.y, "enemy")?;
        claim(placement.x, placement.y, "enemy");
    }

    for placement in &room.items {
        ensure_item(tables, &placement.id, &format!("room '{}/{}'", area_id, room.id))?;
        ensure_in_bounds(area_id, room, placement.x, placement.y, "item")?;
        claim(placement.x, placement.y, "item");
    }

    Ok(())
}

fn ensure_in_bounds(area_id: &str, room: &Room, x: i32, y: i32, what: &str) -> Result<()> {
    if !room.contains(x, y) {
        bail!(
            "room '{}/{}' {what} at ({x}, {y}) is outside the grid",
            area_id,
            room.id
        );
    }
    Ok(())
}

fn validate_interaction(
    interaction_id: &str,
    interaction: &Interaction,
    effects: Option<&EffectRegistry>,
) -> Result<()> {
    if !interaction.stages.contains_key(&interaction.initial_stage) {
        bail!(
            "interaction '{}' initial stage '{}' does not exist",
            interaction_id,
            interaction.initial_stage
        );
    }
    for (stage_id, stage) in &interaction.stages {
        if stage_id != &stage.id {
            bail!(
                "interaction '{}' stage key '{}' does not match its id '{}'",
                interaction_id,
                stage_id,
                stage.id
            );
        }
        for action in &stage.actions {
            if let Some(next) = &action.next_stage
                && !interaction.stages.contains_key(next)
            {
                bail!(
                    "interaction '{}' stage '{}' action '{}' targets unknown stage '{}'",
                    interaction_id,
                    stage_id,
                    action.id,
                    next
                );
            }
            if let (Some(effect_id), Some(registry)) = (&action.effect, effects)
                && !registry.contains(effect_id)
            {
                bail!(
                    "interaction '{}' stage '{}' action '{}' references unknown effect '{}'",
                    interaction_id,
                    stage_id,
                    action.id,
                    effect_id
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::ConfigLoader;
    use oakwood_core::{ActionOption, InteractionKind, Stage};
    use std::collections::BTreeMap;

    #[test]
    fn builtin_campaign_passes_validation() {
        let tables = ContentTables::builtin();
        let config = ConfigLoader::builtin();
        let effects = EffectRegistry::builtin();
        validate_tables(&tables, Some(&config), Some(&effects)).unwrap();
    }

    #[test]
    fn dangling_next_stage_is_rejected() {
        let mut tables = ContentTables::builtin();
        let mut stages = BTreeMap::new();
        stages.insert(
            "start".to_owned(),
            Stage {
                id: "start".to_owned(),
                text: "hello".to_owned(),
                image: None,
                actions: vec![ActionOption {
                    id: "go".to_owned(),
                    label: "Go".to_owned(),
                    next_stage: Some("nowhere".to_owned()),
                    effect: None,
                }],
            },
        );
        tables.interactions.insert(
            "broken".to_owned(),
            Interaction {
                name: "Broken".to_owned(),
                kind: InteractionKind::Npc,
                initial_stage: "start".to_owned(),
                stages,
            },
        );

        let err = validate_tables(&tables, None, None).unwrap_err();
        assert!(err.to_string().contains("unknown stage 'nowhere'"));
    }

    #[test]
    fn dangling_shop_item_is_rejected() {
        let mut tables = ContentTables::builtin();
        tables
            .npcs
            .get_mut("shopkeeper")
            .unwrap()
            .shop_inventory
            .push("phantom_item".to_owned());

        let err = validate_tables(&tables, None, None).unwrap_err();
        // Both the owner and the dangling id must survive plain Display.
        let message = err.to_string();
        assert!(message.contains("shopkeeper"), "{message}");
        assert!(message.contains("phantom_item"), "{message}");
    }

    #[test]
    fn dangling_starting_item_names_the_id() {
        let tables = ContentTables::builtin();
        let mut config = ConfigLoader::builtin();
        config.starting_items.push(oakwood_core::StartingItem {
            item_id: "phantom_item".to_owned(),
            quantity: 1,
            slot: None,
        });

        let err = validate_tables(&tables, Some(&config), None).unwrap_err();
        assert!(err.to_string().contains("phantom_item"));
    }

    #[test]
    fn mismatched_room_key_is_rejected() {
        let mut tables = ContentTables::builtin();
        let area = tables.areas.get_mut("oakwood_town").unwrap();
        area.rooms.get_mut("item_shop").unwrap().id = "misnamed".to_owned();

        let err = validate_tables(&tables, None, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("item_shop"), "{message}");
        assert!(message.contains("misnamed"), "{message}");
    }

    #[test]
    fn mismatched_stage_key_is_rejected() {
        let mut tables = ContentTables::builtin();
        let tree = tables.interactions.get_mut("elara").unwrap();
        tree.stages.get_mut("about-shop").unwrap().id = "misnamed".to_owned();

        let err = validate_tables(&tables, None, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("about-shop"), "{message}");
        assert!(message.contains("misnamed"), "{message}");
    }

    #[test]
    fn unknown_effect_id_is_rejected() {
        let mut tables = ContentTables::builtin();
        let tree = tables.interactions.get_mut("elder_thomas").unwrap();
        let greeting = tree.stages.get_mut("greeting").unwrap();
        greeting.actions[0].effect = Some("no-such-effect".to_owned());

        let effects = EffectRegistry::builtin();
        let err = validate_tables(&tables, None, Some(&effects)).unwrap_err();
        assert!(err.to_string().contains("no-such-effect"));
    }
}
