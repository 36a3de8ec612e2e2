/// Error types for vi-assistant
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vi-assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// The command catalog could not be opened or read
    #[error("Cannot read command catalog {path}: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command catalog is not a list of command records
    #[error("Malformed command catalog {path}: {source}")]
    CatalogMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The user's home directory could not be resolved
    #[error("Could not determine home directory")]
    HomeDirectoryUnavailable,

    /// The favorites directory could not be created
    #[error("Cannot create config directory {path}: {source}")]
    ConfigDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The favorites file exists but could not be read
    #[error("Cannot read favorites file {path}: {source}")]
    FavoritesFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The favorites file is not a list of favorite entries
    #[error("Malformed favorites file {path}: {source}")]
    FavoritesFileMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The favorites file could not be written
    #[error("Cannot write favorites file {path}: {source}")]
    FavoritesFileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Command is already in the favorites
    #[error("Command already in favorites: {0}")]
    DuplicateFavorite(String),

    /// Command is not in the favorites
    #[error("Command not in favorites: {0}")]
    FavoriteNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors outside the catalog and favorites files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for vi-assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Convert AssistantError to a user-friendly error message
impl AssistantError {
    pub fn user_message(&self) -> String {
        match self {
            AssistantError::CatalogUnreadable { path, .. } => {
                format!(
                    "Could not read {}. Run from the directory containing data/commands.json or pass --catalog.",
                    path.display()
                )
            }
            AssistantError::CatalogMalformed { path, source } => {
                format!("Command catalog {} is not valid: {}", path.display(), source)
            }
            AssistantError::HomeDirectoryUnavailable => {
                "Could not find your home directory. Set VI_ASSISTANT_HOME.".to_string()
            }
            AssistantError::ConfigDirCreateFailed { path, source } => {
                format!(
                    "Could not create {}. Check permissions. Details: {}",
                    path.display(),
                    source
                )
            }
            AssistantError::FavoritesFileUnreadable { path, source } => {
                format!("Could not read favorites from {}. Details: {}", path.display(), source)
            }
            AssistantError::FavoritesFileMalformed { path, .. } => {
                format!(
                    "Favorites file {} is corrupted. Run 'fav clear' to reset it.",
                    path.display()
                )
            }
            AssistantError::FavoritesFileWriteFailed { path, source } => {
                format!("Could not save favorites to {}. Details: {}", path.display(), source)
            }
            AssistantError::DuplicateFavorite(cmd) => {
                format!("'{}' is already in your favorites", cmd)
            }
            AssistantError::FavoriteNotFound(cmd) => {
                format!("'{}' is not in your favorites", cmd)
            }
            AssistantError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            AssistantError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            AssistantError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
        }
    }

    /// True for errors about the user's request rather than the environment
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            AssistantError::DuplicateFavorite(_) | AssistantError::FavoriteNotFound(_)
        )
    }
}
