mod loader;
mod model;
mod validator;

pub use loader::{build_world, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Describable, Exit, Item, Room, Usable, World};
pub use validator::{ValidationError, validate_world};
