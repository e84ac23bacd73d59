use crate::engine::items::{catalog_item, find_by_name};
use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::errors::GameError;
use crate::world::{self, Usable};

/// Result of a player action. Failure is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub success: bool,
    /// One line for the game log.
    pub log: String,
}

impl ActionOutcome {
    fn done(log: impl Into<String>) -> Self {
        ActionOutcome {
            success: true,
            log: log.into(),
        }
    }

    fn failed(log: impl Into<String>) -> Self {
        ActionOutcome {
            success: false,
            log: log.into(),
        }
    }
}

pub struct Player {
    pub current_room: String,
    pub inventory: Vec<String>,
}

impl Player {
    pub fn new(starting_room: impl Into<String>) -> Self {
        Player {
            current_room: starting_room.into(),
            inventory: Vec::new(),
        }
    }

    pub fn room<'a>(&self, world: &'a world::World) -> Result<&'a world::Room, GameError> {
        world
            .room(&self.current_room)
            .ok_or_else(|| GameError::UnknownRoom(self.current_room.clone()))
    }

    /// Follow the exit labelled exactly `direction`, then describe where we ended up.
    pub fn move_to(
        &mut self,
        out: &mut Output,
        world: &world::World,
        direction: &str,
    ) -> Result<ActionOutcome, GameError> {
        let target = match self.room(world)?.exit(direction) {
            Some(exit) => exit.target.clone(),
            None => {
                out.say("You can't go that way.");
                return Ok(ActionOutcome::failed("Invalid move attempt."));
            }
        };

        let next = world
            .room(&target)
            .ok_or_else(|| GameError::UnknownRoom(target.clone()))?;

        self.current_room = target;
        render_room(out, next);
        Ok(ActionOutcome::done(format!(
            "Player moved {} to {}",
            direction, self.current_room
        )))
    }

    /// Take the first item in the room whose name matches, ignoring case.
    pub fn pick_up(
        &mut self,
        out: &mut Output,
        world: &mut world::World,
        item_name: &str,
    ) -> Result<ActionOutcome, GameError> {
        let room = world
            .room_mut(&self.current_room)
            .ok_or_else(|| GameError::UnknownRoom(self.current_room.clone()))?;

        match find_by_name(&room.items, item_name) {
            Some(idx) => {
                let name = room.items.remove(idx);
                out.say(format!("You picked up the {}.", name));
                let log = format!("Player picked up {}", name);
                self.inventory.push(name);
                Ok(ActionOutcome::done(log))
            }
            None => {
                out.say("That item isn't here.");
                Ok(ActionOutcome::failed("Item not found."))
            }
        }
    }

    /// Use a held item. The item stays in the inventory.
    pub fn use_item(
        &self,
        out: &mut Output,
        world: &world::World,
        item_name: &str,
    ) -> Result<ActionOutcome, GameError> {
        match find_by_name(&self.inventory, item_name) {
            Some(idx) => {
                let item = catalog_item(world, &self.inventory[idx])?;
                out.event(item.use_text());
                Ok(ActionOutcome::done(format!("Player used {}", item.name)))
            }
            None => {
                out.say("You don't have that item.");
                Ok(ActionOutcome::failed("Item not in inventory."))
            }
        }
    }
}
