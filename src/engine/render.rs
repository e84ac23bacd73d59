use crate::engine::output::Output;
use crate::world;

/// Room name, description, what lies here, then the way out.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.desc.trim());

    if !room.items.is_empty() {
        out.say("You see:");
        for item_name in &room.items {
            out.say(format!("- {}", item_name));
        }
    }

    if room.exits.is_empty() {
        out.set_exits("Exits: None");
    } else {
        let list = room
            .exits
            .iter()
            .map(|e| e.direction.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        out.set_exits(format!("Exits: {}", list));
    }
}
