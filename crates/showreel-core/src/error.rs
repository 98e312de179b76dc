/// Core error types for the Showreel engine.
use std::path::PathBuf;

/// A specialized Result type for Showreel operations.
pub type ShowreelResult<T> = Result<T, ShowreelError>;

/// Top-level error type encompassing all Showreel subsystems.
#[derive(Debug, thiserror::Error)]
pub enum ShowreelError {
    #[error("unknown composition mode '{0}'")]
    UnknownMode(String),

    #[error("asset error: {message} ({path:?})")]
    Asset { message: String, path: PathBuf },

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShowreelError {
    /// Create an asset error.
    pub fn asset(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ShowreelError::Asset {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        ShowreelError::Config(message.into())
    }
}
