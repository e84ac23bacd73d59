use std::collections::HashMap;

///////////////////////////////
/// GAME STRUCTS AND TRAITS ///
///////////////////////////////

/// Anything the player can look at.
pub trait Describable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    fn interact(&self) -> String {
        format!("You look at the {}: {}", self.name(), self.description())
    }
}

/// Things that do something when used. Using never consumes the thing.
pub trait Usable: Describable {
    fn use_text(&self) -> &str;
}

/// Runtime world type used by the game loop.
///
/// Rooms are keyed by name and exits point at room names, so the room graph
/// is plain data. Room item lists and the player's inventory hold item names
/// that resolve through `items`, the catalog.
pub struct World {
    pub name: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
    pub items: HashMap<String, Item>,
}

impl World {
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Room names in a stable order, for output and save files.
    pub fn room_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rooms.keys().map(|k| k.as_str()).collect();
        names.sort();
        names
    }
}

pub struct Room {
    pub name: String,
    pub desc: String,
    pub items: Vec<String>,
    pub exits: Vec<Exit>,
}

impl Room {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            desc: desc.into(),
            items: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Adds a directed exit. An existing exit in the same direction is replaced in place.
    pub fn connect(&mut self, direction: impl Into<String>, target: impl Into<String>) {
        let direction = direction.into();
        let target = target.into();

        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(existing) => existing.target = target,
            None => self.exits.push(Exit { direction, target }),
        }
    }

    /// No duplicate check; callers keep each item in one place.
    pub fn add_item(&mut self, item_name: impl Into<String>) {
        self.items.push(item_name.into());
    }

    /// Exact, case-sensitive lookup.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|e| e.direction == direction)
    }
}

impl Describable for Room {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.desc
    }
}

pub struct Exit {
    pub direction: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub use_text: String,
}

impl Describable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.desc
    }
}

impl Usable for Item {
    fn use_text(&self) -> &str {
        &self.use_text
    }
}
