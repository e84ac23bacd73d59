use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "gamelog.txt";
pub const DEFAULT_SAVE_FILE: &str = "savegame.toml";

/// Where the game keeps its files. The game takes no flags or environment,
/// so the binary always runs with the defaults in the working directory.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub log_path: PathBuf,
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }
}

impl GameConfig {
    /// Default file names under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        GameConfig {
            log_path: dir.join(DEFAULT_LOG_FILE),
            save_path: dir.join(DEFAULT_SAVE_FILE),
        }
    }
}
