/// Favorites persistence
///
/// The favorites list lives in a single JSON file under the user's config
/// directory. Every save rewrites the whole file. Two processes saving at the
/// same time can lose an update (last writer wins); there is no file locking.

use crate::error::{AssistantError, Result};
use crate::store::models::FavoriteEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory name under the home directory
pub const CONFIG_DIR_NAME: &str = ".vi-assistant";

/// File name inside the config directory
pub const FAVORITES_FILE_NAME: &str = "favorites.json";

/// Load/save primitives for the favorites list
pub trait FavoritesRepository {
    /// Current favorites, empty if nothing was saved yet
    fn load(&self) -> Result<Vec<FavoriteEntry>>;

    /// Replace the stored favorites with `entries`
    fn save(&self, entries: &[FavoriteEntry]) -> Result<()>;
}

/// Favorites stored as pretty-printed JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
    path: PathBuf,
}

impl JsonFileRepository {
    /// Repository at `<dir>/favorites.json`
    ///
    /// The directory is created on the first save, not here.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(FAVORITES_FILE_NAME);
        Self { dir, path }
    }

    /// Full path of the favorites file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| AssistantError::ConfigDirCreateFailed {
            path: self.dir.clone(),
            source,
        })
    }
}

impl FavoritesRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<FavoriteEntry>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(AssistantError::FavoritesFileUnreadable {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&data).map_err(|source| AssistantError::FavoritesFileMalformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &[FavoriteEntry]) -> Result<()> {
        self.ensure_dir()?;

        let data = serde_json::to_string_pretty(entries)?;

        fs::write(&self.path, data).map_err(|source| AssistantError::FavoritesFileWriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}
