/// vi-assistant library
///
/// Lookup, search and favorites engine for vi/vim commands.

pub mod config;
pub mod core;
pub mod error;
pub mod presentation;
pub mod store;

// Re-exports for convenience
pub use config::Config;
pub use error::{AssistantError, Result};
pub use store::Catalog;
