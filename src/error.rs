use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the sensor list file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read sensor list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse sensor list {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid sensor entry #{index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Duplicate room name: {0}")]
    DuplicateRoom(String),
}

#[derive(Debug, Error)]
pub enum PollerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Network error polling {room}: {source}")]
    Network {
        room: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Bad response from {room}: {source}")]
    Response {
        room: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write reading: {0}")]
    Output(#[from] io::Error),
}
