use std::fs;
use std::io;
use std::path::Path;

use super::snapshot::{RestoreReport, SaveData};
use crate::engine::Player;
use crate::errors::PersistenceError;
use crate::world::World;

/// Write the current game to `path`, replacing whatever was there.
pub fn save_game(path: &Path, world: &World, player: &Player) -> Result<(), PersistenceError> {
    let data = SaveData::capture(world, player);
    let contents = toml::to_string(&data)?;
    fs::write(path, contents)?;
    log::debug!("saved game to {}", path.display());
    Ok(())
}

/// Read a save file. Nothing is touched unless the whole file decodes.
pub fn read_save(path: &Path) -> Result<SaveData, PersistenceError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PersistenceError::NotFound(path.to_path_buf()),
        _ => PersistenceError::Io(e),
    })?;
    Ok(toml::from_str(&contents)?)
}

pub fn load_game(
    path: &Path,
    world: &mut World,
    player: &mut Player,
) -> Result<RestoreReport, PersistenceError> {
    let data = read_save(path)?;
    let report = data.restore(world, player);

    if report.fell_back_to_start {
        log::debug!("saved room unknown; player placed in {}", player.current_room);
    }
    if !report.dropped_items.is_empty() {
        log::debug!("dropped unknown items: {}", report.dropped_items.join(", "));
    }
    if !report.duplicate_items.is_empty() {
        log::debug!("kept one copy of: {}", report.duplicate_items.join(", "));
    }
    Ok(report)
}
