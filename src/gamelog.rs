//! The game log: a plain text file, reset at start, one line per event.
//! Failing to write it never interrupts play.

use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_BANNER: &str = "=== Game Log: Echoes of Adkins House ===";

pub struct GameLog {
    path: PathBuf,
}

impl GameLog {
    /// Truncate the file at `path` and write the banner.
    pub fn start(path: impl Into<PathBuf>) -> Self {
        let game_log = GameLog { path: path.into() };
        if let Err(e) = fs::write(&game_log.path, format!("{}\n", LOG_BANNER)) {
            log::warn!("could not reset game log {}: {}", game_log.path.display(), e);
        }
        game_log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line.
    pub fn record(&self, message: &str) {
        let line = one_line(message);
        log::info!("{}", line);

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| writeln!(f, "{}", line));

        if let Err(e) = result {
            log::warn!("could not append to game log {}: {}", self.path.display(), e);
        }
    }
}

/// Fold a message onto one log line. TOML parse errors arrive as several
/// lines with a source excerpt; their non-blank lines are joined with ` | `.
pub fn one_line(message: &str) -> Cow<'_, str> {
    if !message.contains(|c: char| c.is_control()) {
        return Cow::Borrowed(message);
    }

    let folded = message
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");

    Cow::Owned(
        folded
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect(),
    )
}
