//! Errors raised around the simulation: configuration loading and the
//! terminal front-end. The simulation itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `GameConfig`.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Log file could not be created.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Raw mode, alternate screen or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;

/// Short, player-facing text for an error, shown after the terminal is
/// restored.
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::ConfigIo { path, source } => match source.kind() {
            std::io::ErrorKind::NotFound => format!("config file {} not found", path.display()),
            std::io::ErrorKind::PermissionDenied => {
                format!("no permission to read {}", path.display())
            }
            _ => error.to_string(),
        },
        _ => error.to_string(),
    }
}
