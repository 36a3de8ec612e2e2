/// Storage module for vi-assistant
///
/// Handles the read-only command catalog and the per-user favorites file.
/// Everything here is plain file I/O with serde_json.

pub mod catalog;
pub mod favorites_file;
pub mod memory;
pub mod models;

pub use catalog::Catalog;
pub use favorites_file::{FavoritesRepository, JsonFileRepository};
pub use memory::InMemoryRepository;
pub use models::*;
