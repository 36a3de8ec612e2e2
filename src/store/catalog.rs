/// Command catalog loading
///
/// The catalog is a JSON array of command records. It is read fresh on every
/// call; nothing is cached between lookups.

use crate::error::{AssistantError, Result};
use crate::store::models::CommandRecord;
use std::path::{Path, PathBuf};

/// Catalog location relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "data/commands.json";

/// Where the catalog comes from
#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Inline(String),
}

/// Read-only handle to the command catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    source: Source,
}

impl Catalog {
    /// Create a catalog backed by a file
    ///
    /// The file is not touched until `load_commands` is called.
    ///
    /// # Examples
    /// ```no_run
    /// use vi_assistant_lib::store::Catalog;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let catalog = Catalog::open("data/commands.json");
    /// let commands = catalog.load_commands()?;
    /// println!("{} commands", commands.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
        }
    }

    /// Catalog backed by an in-memory JSON document
    pub fn inline<S: Into<String>>(json: S) -> Self {
        Self {
            source: Source::Inline(json.into()),
        }
    }

    /// Path shown in error messages
    pub fn path(&self) -> PathBuf {
        match &self.source {
            Source::File(path) => path.clone(),
            Source::Inline(_) => PathBuf::from("<inline>"),
        }
    }

    /// Read and parse every record, in file order
    ///
    /// # Returns
    /// * `Ok(Vec<CommandRecord>)` - All records in catalog order
    /// * `Err(CatalogUnreadable)` - The file is missing or unreadable
    /// * `Err(CatalogMalformed)` - The content is not a list of records
    pub fn load_commands(&self) -> Result<Vec<CommandRecord>> {
        match &self.source {
            Source::File(path) => {
                let data = std::fs::read_to_string(path).map_err(|source| {
                    AssistantError::CatalogUnreadable {
                        path: path.clone(),
                        source,
                    }
                })?;
                parse(&data, path)
            }
            Source::Inline(data) => parse(data, &self.path()),
        }
    }
}

fn parse(data: &str, path: &Path) -> Result<Vec<CommandRecord>> {
    serde_json::from_str(data).map_err(|source| AssistantError::CatalogMalformed {
        path: path.to_path_buf(),
        source,
    })
}
