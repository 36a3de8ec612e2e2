/// Keyword and category search
///
/// Plain case-insensitive substring matching. No scoring: results come back
/// in catalog order.

use crate::error::Result;
use crate::store::{Catalog, CommandRecord, SearchResult};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Handles catalog searches
pub struct Searcher {
    catalog: Arc<Catalog>,
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Search keyword, command, description and category
    ///
    /// # Arguments
    /// * `keyword` - Substring to look for; an empty string matches everything
    ///
    /// # Returns
    /// * `Ok(SearchResult)` - Matching records in catalog order
    pub fn search(&self, keyword: &str) -> Result<SearchResult> {
        let commands = self.catalog.load_commands()?;
        Ok(search_in(commands, keyword))
    }

    /// Records whose category equals `category`, ignoring case
    pub fn commands_by_category(&self, category: &str) -> Result<Vec<CommandRecord>> {
        let commands = self.catalog.load_commands()?;
        Ok(by_category_in(commands, category))
    }

    /// Distinct categories present in the catalog
    pub fn categories(&self) -> Result<BTreeSet<String>> {
        let commands = self.catalog.load_commands()?;
        Ok(categories_in(&commands))
    }
}

pub fn search_in(records: Vec<CommandRecord>, keyword: &str) -> SearchResult {
    let needle = keyword.to_lowercase();

    let commands = records
        .into_iter()
        .filter(|record| {
            [
                &record.keyword,
                &record.command,
                &record.description,
                &record.category,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect();

    SearchResult::new(commands)
}

pub fn by_category_in(records: Vec<CommandRecord>, category: &str) -> Vec<CommandRecord> {
    let wanted = category.to_lowercase();

    records
        .into_iter()
        .filter(|record| record.category.to_lowercase() == wanted)
        .collect()
}

pub fn categories_in(records: &[CommandRecord]) -> BTreeSet<String> {
    records.iter().map(|record| record.category.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Vec<CommandRecord> {
        let raw = r#"[
            {"keyword": "save quit", "command": ":wq", "description": "Save and quit", "example": ":wq", "category": "file"},
            {"keyword": "copy", "command": "yy", "description": "Copy (yank) the current line", "example": "3yy", "category": "copy"},
            {"keyword": "paste", "command": "p", "description": "Paste after the cursor", "example": "p", "category": "paste"},
            {"keyword": "write", "command": ":w", "description": "Save the file", "example": ":w notes.txt", "category": "File"}
        ]"#;
        Catalog::inline(raw).load_commands().unwrap()
    }

    #[test]
    fn test_search_matches_any_field() {
        let result = search_in(setup(), "SAVE");
        let commands: Vec<&str> = result.commands.iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec![":wq", ":w"]);
        assert_eq!(result.count, 2);

        // description only
        assert_eq!(search_in(setup(), "yank").count, 1);
        // category only
        assert_eq!(search_in(setup(), "past").count, 1);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let result = search_in(setup(), "");
        assert_eq!(result.count, 4);
    }

    #[test]
    fn test_every_hit_contains_query() {
        let query = "co";
        let all = setup();
        let result = search_in(all.clone(), query);

        let contains = |r: &CommandRecord| {
            [&r.keyword, &r.command, &r.description, &r.category]
                .iter()
                .any(|f| f.to_lowercase().contains(query))
        };

        assert!(result.commands.iter().all(contains));
        let expected = all.iter().filter(|r| contains(*r)).count();
        assert_eq!(result.count, expected);
    }

    #[test]
    fn test_no_hits() {
        let result = search_in(setup(), "macro");
        assert!(result.is_empty());
    }

    #[test]
    fn test_by_category_ignores_case() {
        let file = by_category_in(setup(), "FILE");
        let commands: Vec<&str> = file.iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec![":wq", ":w"]);

        // exact equality, not containment
        assert!(by_category_in(setup(), "fil").is_empty());
    }

    #[test]
    fn test_categories_are_distinct() {
        let categories = categories_in(&setup());
        assert_eq!(categories.len(), 4); // "file" and "File" differ
        assert!(categories.contains("copy"));
        assert!(categories.contains("paste"));
    }

    #[test]
    fn test_searcher_uses_catalog() {
        let searcher = Searcher::new(Arc::new(Catalog::inline(
            r#"[{"command": "u", "description": "Undo", "category": "edit"},
                {"command": "x", "description": "Delete character", "category": "edit"}]"#,
        )));

        assert_eq!(searcher.search("undo").unwrap().count, 1);
        assert_eq!(searcher.commands_by_category("edit").unwrap().len(), 2);
        assert_eq!(searcher.categories().unwrap().len(), 1);
    }
}
