/// Exact command lookup with suggestions
///
/// Looks a command up by its exact name (ignoring case). When nothing matches
/// exactly, records whose command or keyword contain the query are offered as
/// suggestions instead.

use crate::error::Result;
use crate::store::{Catalog, CommandRecord};
use std::sync::Arc;

/// What a lookup found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainOutcome {
    /// First record whose command equals the query
    Exact(CommandRecord),
    /// No exact match; containment candidates in catalog order
    Suggestions(Vec<CommandRecord>),
}

/// Result of `Explainer::explain`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainResult {
    pub query: String,
    pub outcome: ExplainOutcome,
}

impl ExplainResult {
    pub fn found(&self) -> bool {
        matches!(self.outcome, ExplainOutcome::Exact(_))
    }

    pub fn record(&self) -> Option<&CommandRecord> {
        match &self.outcome {
            ExplainOutcome::Exact(record) => Some(record),
            ExplainOutcome::Suggestions(_) => None,
        }
    }

    /// Empty whenever an exact match was found
    pub fn suggestions(&self) -> &[CommandRecord] {
        match &self.outcome {
            ExplainOutcome::Exact(_) => &[],
            ExplainOutcome::Suggestions(list) => list,
        }
    }
}

/// Handles exact lookups against the catalog
pub struct Explainer {
    catalog: Arc<Catalog>,
}

impl Explainer {
    /// Create a new explainer instance
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Look up a command by name
    ///
    /// # Arguments
    /// * `command` - Command as typed; surrounding whitespace is ignored
    ///
    /// # Returns
    /// * `Ok(ExplainResult)` - Exact match or suggestions
    /// * `Err(AssistantError)` - Only if the catalog cannot be loaded
    pub fn explain(&self, command: &str) -> Result<ExplainResult> {
        let commands = self.catalog.load_commands()?;
        Ok(explain_in(&commands, command))
    }
}

/// Single pass over `records`: stop at the first exact match, otherwise
/// collect suggestions.
pub fn explain_in(records: &[CommandRecord], command: &str) -> ExplainResult {
    let query = command.trim();
    let needle = query.to_lowercase();
    let mut suggestions = Vec::new();

    for record in records {
        if record.is_exact(query) {
            // Exact match wins; anything gathered so far is dropped.
            return ExplainResult {
                query: query.to_string(),
                outcome: ExplainOutcome::Exact(record.clone()),
            };
        }

        if record.command.to_lowercase().contains(&needle)
            || record.keyword.to_lowercase().contains(&needle)
        {
            suggestions.push(record.clone());
        }
    }

    ExplainResult {
        query: query.to_string(),
        outcome: ExplainOutcome::Suggestions(suggestions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keyword: &str, command: &str, category: &str) -> CommandRecord {
        CommandRecord {
            keyword: keyword.to_string(),
            command: command.to_string(),
            description: String::new(),
            example: String::new(),
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<CommandRecord> {
        vec![
            record("save", ":w", "file"),
            record("save quit", ":wq", "file"),
            record("force quit", ":q!", "file"),
            record("copy line", "yy", "copy"),
        ]
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let result = explain_in(&sample(), ":WQ");
        assert!(result.found());
        assert_eq!(result.record().unwrap().command, ":wq");
    }

    #[test]
    fn test_input_is_trimmed() {
        let result = explain_in(&sample(), "  yy \n");
        assert!(result.found());
        assert_eq!(result.query, "yy");
    }

    #[test]
    fn test_exact_match_drops_suggestions() {
        // ":w" is a substring of ":wq" but ":w" itself matches exactly
        let result = explain_in(&sample(), ":w");
        assert!(result.found());
        assert!(result.suggestions().is_empty());

        // the first record is a keyword hit before the exact match shows up
        let records = vec![record(":wq alias", ":w", "file"), record("", ":wq", "file")];
        let result = explain_in(&records, ":wq");
        assert_eq!(result.record().unwrap().command, ":wq");
        assert!(result.suggestions().is_empty());
    }

    #[test]
    fn test_suggestions_from_command_and_keyword() {
        let result = explain_in(&sample(), "quit");
        assert!(!result.found());
        assert!(result.record().is_none());

        let commands: Vec<&str> = result.suggestions().iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec![":wq", ":q!"]);
    }

    #[test]
    fn test_suggestions_keep_catalog_order() {
        let result = explain_in(&sample(), ":");
        let commands: Vec<&str> = result.suggestions().iter().map(|r| r.command.as_str()).collect();
        assert_eq!(commands, vec![":w", ":wq", ":q!"]);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut records = sample();
        records.push(CommandRecord {
            description: "second".to_string(),
            ..record("", "YY", "copy")
        });

        let result = explain_in(&records, "yy");
        assert_eq!(result.record().unwrap().category, "copy");
        assert_eq!(result.record().unwrap().description, "");
    }

    #[test]
    fn test_nothing_found() {
        let result = explain_in(&sample(), "zzz");
        assert!(!result.found());
        assert!(result.suggestions().is_empty());
    }

    #[test]
    fn test_explain_through_catalog() {
        let catalog = Arc::new(Catalog::inline(
            r#"[{"keyword": "delete line", "command": "dd", "category": "delete"}]"#,
        ));
        let explainer = Explainer::new(catalog);

        let result = explainer.explain("DD").unwrap();
        assert_eq!(result.record().unwrap().category, "delete");
    }

    #[test]
    fn test_explain_propagates_catalog_errors() {
        let explainer = Explainer::new(Arc::new(Catalog::inline("oops")));
        assert!(explainer.explain("dd").is_err());
    }
}
