mod items;
mod output;
mod player;
mod render;

pub use items::{find_by_name, handle_examine, handle_inventory};
pub use output::{Output, OutputBlock};
pub use player::{ActionOutcome, Player};
pub use render::render_room;
