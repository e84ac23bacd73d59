use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::engine::Player;
use crate::world::World;

/// Everything a save file holds. Item and room references are names only.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_room: Option<String>,

    #[serde(default)]
    pub inventory: Vec<String>,

    #[serde(default)]
    pub room_items: BTreeMap<String, Vec<String>>,
}

/// Names that did not resolve during a restore.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub fell_back_to_start: bool,
    pub dropped_items: Vec<String>,
    /// Items skipped because they were already placed elsewhere.
    pub duplicate_items: Vec<String>,
}

impl SaveData {
    pub fn capture(world: &World, player: &Player) -> Self {
        let room_items = world
            .rooms
            .iter()
            .map(|(name, room)| (name.clone(), room.items.clone()))
            .collect();

        SaveData {
            current_room: Some(player.current_room.clone()),
            inventory: player.inventory.clone(),
            room_items,
        }
    }

    /// Rebind the player and room contents to what was saved.
    ///
    /// An unknown room sends the player to the start room. Unknown item names
    /// are dropped. Rooms missing from the save keep what they hold, minus
    /// anything the save put somewhere else; saved rooms that no longer exist
    /// are ignored. Each item ends up in one place: the inventory claims first,
    /// then saved rooms in name order, then the rooms the save left alone.
    pub fn restore(&self, world: &mut World, player: &mut Player) -> RestoreReport {
        let mut report = RestoreReport::default();
        let mut placed: HashSet<String> = HashSet::new();

        match self.current_room.as_deref() {
            Some(name) if world.rooms.contains_key(name) => {
                player.current_room = name.to_string();
            }
            _ => {
                report.fell_back_to_start = true;
                player.current_room = world.start_room.clone();
            }
        }

        player.inventory = resolve_items(world, &self.inventory, &mut placed, &mut report);

        for (room_name, saved) in &self.room_items {
            if !world.rooms.contains_key(room_name) {
                log::debug!("save names unknown room '{}'; skipped", room_name);
                continue;
            }
            let items = resolve_items(world, saved, &mut placed, &mut report);
            if let Some(room) = world.room_mut(room_name) {
                room.items = items;
            }
        }

        for room in world.rooms.values_mut() {
            if self.room_items.contains_key(&room.name) {
                continue;
            }
            room.items.retain(|name| {
                let fresh = placed.insert(name.clone());
                if !fresh {
                    report.duplicate_items.push(name.clone());
                }
                fresh
            });
        }

        report
    }
}

fn resolve_items(
    world: &World,
    names: &[String],
    placed: &mut HashSet<String>,
    report: &mut RestoreReport,
) -> Vec<String> {
    let mut kept = Vec::with_capacity(names.len());
    for name in names {
        if !world.items.contains_key(name) {
            report.dropped_items.push(name.clone());
        } else if !placed.insert(name.clone()) {
            report.duplicate_items.push(name.clone());
        } else {
            kept.push(name.clone());
        }
    }
    kept
}
