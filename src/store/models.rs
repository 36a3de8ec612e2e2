/// Data models for the catalog and the favorites file
///
/// Both map one-to-one onto the JSON objects stored on disk.

use serde::{Deserialize, Serialize};

/// One entry of the command catalog
///
/// Every field defaults to an empty string when missing from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandRecord {
    pub keyword: String,
    pub command: String, // identity key, compared case-insensitively
    pub description: String,
    pub example: String,
    pub category: String,
}

impl CommandRecord {
    /// True if `command` equals `query` ignoring case
    pub fn is_exact(&self, query: &str) -> bool {
        self.command.to_lowercase() == query.to_lowercase()
    }
}

/// A command the user saved to their favorites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub command: String,
    pub description: String, // snapshot taken when added
    pub added_at: String,
}

/// Keyword search output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub commands: Vec<CommandRecord>,
    pub count: usize,
}

impl SearchResult {
    pub fn new(commands: Vec<CommandRecord>) -> Self {
        let count = commands.len();
        Self { commands, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
