use serde::Deserialize;
use std::collections::HashMap;

use super::model::{Item, Room, World};
use super::validator::{ValidationError, validate_world};
use crate::errors::WorldError;

/// The house itself, compiled into the binary so every game starts from the same world.
const ADKINS_HOUSE_TOML: &str = include_str!("../../data/adkins_house.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    start_room: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    use_text: String,

    /// Room the item starts in. Items without one start nowhere until a save puts them somewhere.
    #[serde(default)]
    location: Option<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Build the fixed Adkins House world.
pub fn build_world() -> Result<World, WorldError> {
    load_world_from_str(ADKINS_HOUSE_TOML)
}

/// Build a world from a TOML description and validate it.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;
    let mut problems: Vec<ValidationError> = Vec::new();

    let mut rooms: HashMap<String, Room> = HashMap::new();
    for room_cfg in world_file.room {
        let name = room_cfg.name.trim().to_string();
        if rooms.contains_key(&name) {
            return Err(WorldError::Duplicate { kind: "room", name });
        }

        let mut room = Room::new(name, room_cfg.desc.trim());
        for exit in room_cfg.exit {
            room.connect(exit.direction, exit.target);
        }
        rooms.insert(room.name.clone(), room);
    }

    // Placement follows catalog order so each room's item list is deterministic.
    let mut items: HashMap<String, Item> = HashMap::new();
    for ic in world_file.item {
        let name = ic.name.trim().to_string();
        if items.contains_key(&name) {
            return Err(WorldError::Duplicate { kind: "item", name });
        }

        if let Some(location) = ic.location {
            match rooms.get_mut(&location) {
                Some(room) => room.add_item(name.clone()),
                None => problems.push(ValidationError::new(format!(
                    "item '{}' placed in missing room '{}'",
                    name, location
                ))),
            }
        }

        items.insert(
            name.clone(),
            Item {
                name,
                desc: ic.desc.trim().to_string(),
                use_text: ic.use_text.trim().to_string(),
            },
        );
    }

    let world = World {
        name: world_file.world.name,
        start_room: world_file.world.start_room,
        rooms,
        items,
    };

    problems.extend(validate_world(&world));
    if !problems.is_empty() {
        return Err(WorldError::Invalid(problems));
    }

    log::debug!(
        "built world '{}' with {} rooms and {} items",
        world.name,
        world.rooms.len(),
        world.items.len()
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adkins_house_has_seven_rooms_and_six_items() {
        let world = build_world().unwrap();
        assert_eq!(world.rooms.len(), 7);
        assert_eq!(world.items.len(), 6);
        assert_eq!(world.start_room, "Foyer");

        let placed: usize = world.rooms.values().map(|r| r.items.len()).sum();
        assert_eq!(placed, 6);
        assert!(world.room("Basement").unwrap().items.is_empty());
        assert!(world.room("Basement").unwrap().exits.is_empty());
    }

    #[test]
    fn exits_keep_declaration_order() {
        let world = build_world().unwrap();
        let library = world.room("Library").unwrap();
        let dirs: Vec<&str> = library.exits.iter().map(|e| e.direction.as_str()).collect();
        assert_eq!(dirs, vec!["south", "up", "east"]);
    }

    #[test]
    fn duplicate_room_is_rejected() {
        let src = r#"
            [world]
            name = "Twins"
            start_room = "A"

            [[room]]
            name = "A"

            [[room]]
            name = "A"
        "#;
        match load_world_from_str(src) {
            Err(WorldError::Duplicate { kind, name }) => {
                assert_eq!(kind, "room");
                assert_eq!(name, "A");
            }
            other => panic!("expected duplicate room, got {:?}", other.err()),
        }
    }

    #[test]
    fn names_differing_only_in_padding_collide() {
        let src = r#"
            [world]
            name = "Padded"
            start_room = "A"

            [[room]]
            name = " A"

            [[room]]
            name = "A "
        "#;
        assert!(matches!(
            load_world_from_str(src),
            Err(WorldError::Duplicate { kind: "room", ref name }) if name == "A"
        ));
    }

    #[test]
    fn dangling_exit_and_bad_placement_are_reported_together() {
        let src = r#"
            [world]
            name = "Broken"
            start_room = "A"

            [[room]]
            name = "A"
              [[room.exit]]
              direction = "north"
              target = "Nowhere"

            [[item]]
            name = "Rock"
            location = "Elsewhere"
        "#;
        match load_world_from_str(src) {
            Err(WorldError::Invalid(problems)) => {
                assert_eq!(problems.len(), 2);
                assert!(problems.iter().any(|p| p.message.contains("Elsewhere")));
                assert!(problems.iter().any(|p| p.message.contains("Nowhere")));
            }
            other => panic!("expected invalid world, got {:?}", other.err()),
        }
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            load_world_from_str("[[room"),
            Err(WorldError::Parse(_))
        ));
    }
}
