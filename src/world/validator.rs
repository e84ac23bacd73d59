use std::collections::HashMap;

use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Registry keys must match the room they hold
    for (key, room) in &world.rooms {
        if key != &room.name {
            errors.push(ValidationError::new(format!(
                "room registered as '{}' is named '{}'",
                key, room.name
            )));
        }
    }

    // Validate exits
    for room_name in world.room_names() {
        let room = &world.rooms[room_name];
        for exit in &room.exits {
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_name, exit.direction, exit.target
                )));
            }
        }
    }

    // Every placed item must come from the catalog, and only once
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for room_name in world.room_names() {
        for item_name in &world.rooms[room_name].items {
            if !world.items.contains_key(item_name) {
                errors.push(ValidationError::new(format!(
                    "room '{}' holds unknown item '{}'",
                    room_name, item_name
                )));
            }
            if let Some(first) = seen.insert(item_name.as_str(), room_name) {
                errors.push(ValidationError::new(format!(
                    "item '{}' placed in both '{}' and '{}'",
                    item_name, first, room_name
                )));
            }
        }
    }

    errors
}
