mod snapshot;
mod store;

pub use snapshot::{RestoreReport, SaveData};
pub use store::{load_game, read_save, save_game};
