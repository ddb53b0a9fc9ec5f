use std::fmt;

/// Errors that can stop the game from starting or from drawing a frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Image asset missing or undecodable
    AssetLoad { path: String, reason: String },

    /// Config file could not be read or parsed
    Config(String),

    /// Config parsed but holds values the game can't run with
    InvalidConfig(String),

    /// Backend failed to draw or present
    Render(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::AssetLoad { path, reason } => {
                write!(f, "Failed to load {}: {}", path, reason)
            }
            GameError::Config(reason) => {
                write!(f, "Failed to read config: {}", reason)
            }
            GameError::InvalidConfig(reason) => {
                write!(f, "Invalid config: {}", reason)
            }
            GameError::Render(reason) => {
                write!(f, "Render error: {}", reason)
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}
