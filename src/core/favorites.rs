/// Manages the user's favorite commands
///
/// Every operation is a full load -> change -> save cycle against the
/// repository. Nothing is kept in memory between calls.

use crate::error::{AssistantError, Result};
use crate::store::{FavoriteEntry, FavoritesRepository};

/// Format used for `added_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn local_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Favorites operations over any `FavoritesRepository`
pub struct FavoritesManager<R: FavoritesRepository> {
    repo: R,
    clock: fn() -> String,
}

impl<R: FavoritesRepository> FavoritesManager<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            clock: local_now,
        }
    }

    /// Swap the timestamp source. Tests use this to pin `added_at`.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Append a new favorite
    ///
    /// Exact (case-sensitive) duplicates are rejected and nothing gets written.
    pub fn add(&self, command: &str, description: &str) -> Result<()> {
        let mut favorites = self.repo.load()?;

        if favorites.iter().any(|fav| fav.command == command) {
            return Err(AssistantError::DuplicateFavorite(command.to_string()));
        }

        favorites.push(FavoriteEntry {
            command: command.to_string(),
            description: description.to_string(),
            added_at: (self.clock)(),
        });

        self.repo.save(&favorites)
    }

    /// Drop every entry equal to `command`
    ///
    /// Leaves the store untouched when there was nothing to drop.
    pub fn remove(&self, command: &str) -> Result<()> {
        let favorites = self.repo.load()?;
        let before = favorites.len();

        let remaining: Vec<FavoriteEntry> = favorites
            .into_iter()
            .filter(|fav| fav.command != command)
            .collect();

        if remaining.len() == before {
            return Err(AssistantError::FavoriteNotFound(command.to_string()));
        }

        self.repo.save(&remaining)
    }

    pub fn list(&self) -> Result<Vec<FavoriteEntry>> {
        self.repo.load()
    }

    pub fn clear(&self) -> Result<()> {
        self.repo.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryRepository, JsonFileRepository};
    use tempfile::TempDir;

    fn fixed_clock() -> String {
        "2024-01-01 12:00:00".to_string()
    }

    fn create_test_manager() -> FavoritesManager<InMemoryRepository> {
        FavoritesManager::new(InMemoryRepository::new()).with_clock(fixed_clock)
    }

    #[test]
    fn test_add_then_list() {
        let manager = create_test_manager();

        manager.add(":wq", "저장 후 종료").unwrap();
        let favorites = manager.list().unwrap();

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].command, ":wq");
        assert_eq!(favorites[0].description, "저장 후 종료");
        assert_eq!(favorites[0].added_at, "2024-01-01 12:00:00");
    }

    #[test]
    fn test_duplicate_add_keeps_first() {
        let manager = create_test_manager();

        manager.add(":wq", "저장 후 종료").unwrap();
        let result = manager.add(":wq", "x");

        match result {
            Err(AssistantError::DuplicateFavorite(cmd)) => assert_eq!(cmd, ":wq"),
            other => panic!("Expected DuplicateFavorite, got {:?}", other),
        }

        let favorites = manager.list().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].description, "저장 후 종료");
        assert_eq!(manager.repository().save_count(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let manager = create_test_manager();

        manager.add("dd", "줄 삭제").unwrap();
        manager.add("DD", "줄 삭제").unwrap();
        assert_eq!(manager.list().unwrap().len(), 2);
    }

    #[test]
    fn test_insertion_order() {
        let manager = create_test_manager();

        for cmd in ["p", "yy", "dd"] {
            manager.add(cmd, "").unwrap();
        }

        let commands: Vec<String> = manager.list().unwrap().into_iter().map(|f| f.command).collect();
        assert_eq!(commands, vec!["p", "yy", "dd"]);
    }

    #[test]
    fn test_remove() {
        let manager = create_test_manager();
        manager.add("yy", "줄 복사").unwrap();
        manager.add("p", "붙여넣기").unwrap();

        manager.remove("yy").unwrap();

        let favorites = manager.list().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].command, "p");
    }

    #[test]
    fn test_remove_missing_does_not_write() {
        let manager = create_test_manager();

        match manager.remove("zz") {
            Err(AssistantError::FavoriteNotFound(cmd)) => assert_eq!(cmd, "zz"),
            other => panic!("Expected FavoriteNotFound, got {:?}", other),
        }
        assert_eq!(manager.repository().save_count(), 0);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let manager = create_test_manager();
        manager.add("u", "실행 취소").unwrap();

        manager.clear().unwrap();
        assert!(manager.list().unwrap().is_empty());

        manager.clear().unwrap();
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_default_clock_format() {
        let stamp = local_now();
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_remove_missing_on_disk_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(temp.path().join(".vi-assistant"));
        let path = repo.path().to_path_buf();
        let manager = FavoritesManager::new(repo);

        assert!(manager.remove(":q").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_existing_entries_survive_add() {
        let repo = InMemoryRepository::with_entries(vec![FavoriteEntry {
            command: "x".to_string(),
            description: "문자 삭제".to_string(),
            added_at: "2023-05-05 09:00:00".to_string(),
        }]);
        let manager = FavoritesManager::new(repo).with_clock(fixed_clock);

        manager.add("i", "삽입 모드").unwrap();
        let favorites = manager.list().unwrap();
        assert_eq!(favorites[0].added_at, "2023-05-05 09:00:00");
        assert_eq!(favorites[1].command, "i");
    }
}
