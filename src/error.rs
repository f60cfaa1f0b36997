use std::path::PathBuf;

use thiserror::Error;

use crate::collection::MediaId;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid collection snapshot: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid collection snapshot {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Duplicate media id {0}")]
    DuplicateId(MediaId),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("No collection given: pass a path or set collection.path")]
    MissingCollection,
}

pub type Result<T> = std::result::Result<T, ShelfError>;
