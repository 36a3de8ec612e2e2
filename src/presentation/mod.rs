/// Presentation layer
///
/// Formats engine results as localized text. The engine itself never prints.

pub mod formatter;
pub mod language;
pub mod lessons;
pub mod quick_reference;

pub use formatter::{
    format_categories, format_category, format_explanation, format_favorites,
    format_search_results,
};
pub use language::{Language, Messages};
pub use lessons::{format_lesson, format_lesson_list, lessons, Lesson, Level};
pub use quick_reference::format_quick_reference;
