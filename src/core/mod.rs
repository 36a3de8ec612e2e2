/// Core functionality modules
///
/// Contains the main business logic: exact lookups, catalog search and
/// the favorites store.

pub mod explainer;
pub mod favorites;
pub mod searcher;

pub use explainer::{ExplainOutcome, ExplainResult, Explainer};
pub use favorites::FavoritesManager;
pub use searcher::Searcher;
