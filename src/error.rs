//! Error types for the fallible edges of the game.
//!
//! Gameplay itself (spawning, collisions, ticking) cannot fail. Only config
//! loading and high-score persistence touch the outside world.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// A config file exists but is not valid TOML for [`crate::config::GameConfig`].
    Config {
        path: PathBuf,
        message: String,
    },

    /// A config value is outside the range the game can run with.
    InvalidConfig {
        /// Name of the offending field, as spelled in the TOML file.
        field: &'static str,
        /// Human-readable description of the accepted range.
        reason: &'static str,
    },

    /// Reading or writing a file failed.
    Io {
        /// What was being done when the error happened.
        context: String,
        source: io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config { path, message } => {
                write!(f, "failed to parse config {}: {}", path.display(), message)
            }
            GameError::InvalidConfig { field, reason } => {
                write!(f, "config field '{}' {}", field, reason)
            }
            GameError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

impl GameError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        GameError::Io {
            context: context.into(),
            source,
        }
    }
}
