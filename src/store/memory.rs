/// In-memory favorites repository
///
/// Stands in for the JSON file in tests. Counts saves so callers can check
/// that a failed operation never wrote anything.

use crate::error::Result;
use crate::store::favorites_file::FavoritesRepository;
use crate::store::models::FavoriteEntry;
use std::cell::{Cell, RefCell};

/// Favorites held in a `RefCell`, lost when dropped
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entries: RefCell<Vec<FavoriteEntry>>,
    saves: Cell<usize>,
}

impl InMemoryRepository {
    /// Empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with some favorites already stored
    pub fn with_entries(entries: Vec<FavoriteEntry>) -> Self {
        Self {
            entries: RefCell::new(entries),
            saves: Cell::new(0),
        }
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl FavoritesRepository for InMemoryRepository {
    fn load(&self) -> Result<Vec<FavoriteEntry>> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[FavoriteEntry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
