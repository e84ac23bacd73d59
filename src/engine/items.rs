use crate::engine::output::Output;
use crate::errors::GameError;
use crate::world::{self, Describable};

/// Position of the first name matching `query`, ignoring case on both sides.
pub fn find_by_name(names: &[String], query: &str) -> Option<usize> {
    let query = query.to_lowercase();
    names.iter().position(|n| n.to_lowercase() == query)
}

/// Resolve a held or placed item name through the catalog.
pub fn catalog_item<'a>(world: &'a world::World, name: &str) -> Result<&'a world::Item, GameError> {
    world
        .item(name)
        .ok_or_else(|| GameError::UnknownItem(name.to_string()))
}

pub fn handle_inventory(out: &mut Output, inventory: &[String]) {
    if inventory.is_empty() {
        out.say("You are carrying nothing.");
        return;
    }

    out.say("You are carrying:");
    for name in inventory {
        out.say(format!("- {}", name));
    }
}

/// Look at something held first, then at something in the room, then the room itself.
pub fn handle_examine(
    out: &mut Output,
    world: &world::World,
    inventory: &[String],
    room: &world::Room,
    target_name: &str,
) -> Result<bool, GameError> {
    let found = find_by_name(inventory, target_name)
        .map(|i| &inventory[i])
        .or_else(|| find_by_name(&room.items, target_name).map(|i| &room.items[i]));

    match found {
        Some(name) => {
            let item = catalog_item(world, name)?;
            out.say(item.interact());
            Ok(true)
        }
        None if room.name.to_lowercase() == target_name.to_lowercase() => {
            out.say(room.interact());
            Ok(true)
        }
        None => {
            out.say("You see nothing like that here.");
            Ok(false)
        }
    }
}
