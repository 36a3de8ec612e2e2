/// Turns engine results into human-readable text
///
/// Every function returns the finished text; printing is left to the caller.

use crate::core::ExplainResult;
use crate::presentation::Language;
use crate::store::{CommandRecord, FavoriteEntry, SearchResult};
use std::collections::BTreeSet;
use std::fmt::Write;

/// At most this many suggestions are shown after a failed lookup
pub const MAX_SUGGESTIONS: usize = 5;

struct Labels {
    command: &'static str,
    category: &'static str,
    description: &'static str,
    example: &'static str,
    added: &'static str,
}

fn labels(lang: Language) -> Labels {
    match lang {
        Language::Korean => Labels {
            command: "명령어",
            category: "카테고리",
            description: "설명",
            example: "예제",
            added: "추가일",
        },
        Language::English => Labels {
            command: "Command",
            category: "Category",
            description: "Description",
            example: "Example",
            added: "Added",
        },
    }
}

/// Full record on an exact match, otherwise up to `MAX_SUGGESTIONS` suggestions
pub fn format_explanation(result: &ExplainResult, lang: Language) -> String {
    let l = labels(lang);
    let mut out = String::new();

    if let Some(record) = result.record() {
        let _ = writeln!(out, "{}: {}", l.command, record.command);
        let _ = writeln!(out, "{}: {}", l.category, record.category);
        let _ = writeln!(out, "{}: {}", l.description, record.description);
        let _ = writeln!(out, "{}: {}", l.example, record.example);
        return out;
    }

    out.push_str(lang.pick("명령어를 찾을 수 없습니다.\n\n", "Command not found.\n\n"));

    let suggestions = result.suggestions();
    if !suggestions.is_empty() {
        out.push_str(lang.pick(
            "다음 중 하나를 찾으셨나요?\n",
            "Did you mean one of these?\n",
        ));
    }

    for suggestion in suggestions.iter().take(MAX_SUGGESTIONS) {
        let _ = writeln!(out, "  {} - {}", suggestion.command, suggestion.description);
    }

    out
}

/// Numbered hit list with a count header
pub fn format_search_results(results: &SearchResult, lang: Language) -> String {
    if results.is_empty() {
        return lang
            .pick(
                "검색 조건에 맞는 명령어를 찾을 수 없습니다.\n",
                "No commands found matching your search criteria.\n",
            )
            .to_string();
    }

    let mut out = String::new();
    match lang {
        Language::Korean => {
            let _ = writeln!(out, "{}개의 명령어를 찾았습니다:\n", results.count);
        }
        Language::English => {
            let _ = writeln!(out, "Found {} command(s):\n", results.count);
        }
    }

    write_records(&mut out, &results.commands, lang);
    out
}

/// Commands in one category
pub fn format_category(category: &str, records: &[CommandRecord], lang: Language) -> String {
    if records.is_empty() {
        return match lang {
            Language::Korean => format!("'{}' 카테고리에 명령어가 없습니다.\n", category),
            Language::English => format!("No commands in category '{}'.\n", category),
        };
    }

    let mut out = String::new();
    match lang {
        Language::Korean => {
            let _ = writeln!(out, "'{}' 카테고리 ({}개):\n", category, records.len());
        }
        Language::English => {
            let _ = writeln!(out, "Category '{}' ({}):\n", category, records.len());
        }
    }

    write_records(&mut out, records, lang);
    out
}

/// Category names, one per line
pub fn format_categories(categories: &BTreeSet<String>, lang: Language) -> String {
    let mut out = String::new();
    out.push_str(lang.pick("카테고리 목록:\n", "Categories:\n"));

    for category in categories {
        let _ = writeln!(out, "  - {}", category);
    }

    out
}

/// Saved favorites with the time each was added
pub fn format_favorites(favorites: &[FavoriteEntry], lang: Language) -> String {
    if favorites.is_empty() {
        return lang
            .pick(
                "즐겨찾기된 명령어가 없습니다.\n",
                "No favorite commands found.\n",
            )
            .to_string();
    }

    let l = labels(lang);
    let mut out = String::new();
    match lang {
        Language::Korean => {
            let _ = writeln!(out, "즐겨찾기 명령어 ({}개):\n", favorites.len());
        }
        Language::English => {
            let _ = writeln!(out, "Favorite Commands ({}):\n", favorites.len());
        }
    }

    for (i, fav) in favorites.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, fav.command);
        let _ = writeln!(out, "   {}: {}", l.description, fav.description);
        let _ = writeln!(out, "   {}: {}", l.added, fav.added_at);
        out.push('\n');
    }

    out
}

fn write_records(out: &mut String, records: &[CommandRecord], lang: Language) {
    let l = labels(lang);

    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, record.command);
        let _ = writeln!(out, "   {}: {}", l.category, record.category);
        let _ = writeln!(out, "   {}: {}", l.description, record.description);
        let _ = writeln!(out, "   {}: {}", l.example, record.example);
        out.push('\n');
    }
}
