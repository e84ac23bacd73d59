use std::path::PathBuf;

use thiserror::Error;

use crate::world::ValidationError;

/// Errors raised while building the world from its TOML description.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world description is not valid TOML or has the wrong shape.
    #[error("world parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two rooms or two items share a name.
    #[error("duplicate {kind} name: {name}")]
    Duplicate { kind: &'static str, name: String },

    /// The built world failed structural validation.
    #[error("invalid world: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

/// Errors raised while saving or loading game progress.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("no save file at {}", .0.display())]
    NotFound(PathBuf),

    #[error("malformed save data: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("could not encode save data: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PersistenceError {
    /// Missing or unreadable save data is an ordinary outcome for `load`;
    /// anything else is reported as unexpected.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Malformed(_))
    }
}

/// Faults inside a single command step. The command loop reports these and keeps going.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player is in an unknown room '{0}'")]
    UnknownRoom(String),

    #[error("item '{0}' is not in the catalog")]
    UnknownItem(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
