// vi-assistant - look up vi/vim commands without leaving the terminal
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use log::debug;
use std::env;
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;
use std::sync::Arc;
use vi_assistant_lib::{
    config::Overrides,
    core::{Explainer, FavoritesManager, Searcher},
    presentation::{self, lessons, Language, Level, Messages},
    Config, Result,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = split_global_flags(env::args().skip(1).collect());

    let config = match resolve_config(&flags.overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("resolved config: {:?}", config);

    let messages = Messages::new(config.language);
    if let Some(flag) = flags.missing_value {
        let what = match config.language {
            Language::Korean => format!("{} 값", flag),
            Language::English => format!("{} value", flag),
        };
        eprintln!("{}", messages.missing_argument(&what));
        return ExitCode::FAILURE;
    }

    match dispatch(&config, &flags.rest) {
        Ok(code) => code,
        Err(e) if e.is_domain_error() => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
        Err(e) => {
            debug!("command failed: {:?}", e);
            eprintln!("{}{}", messages.error_prefix(), e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(overrides: &Overrides) -> anyhow::Result<Config> {
    Config::resolve(overrides).context("failed to resolve configuration")
}

#[derive(Debug, Default, PartialEq, Eq)]
struct GlobalFlags {
    overrides: Overrides,
    rest: Vec<String>,
    /// Set when `--lang` or `--catalog` ended the argument list
    missing_value: Option<&'static str>,
}

// Pull --lang / --catalog out of the argument list wherever they appear.
fn split_global_flags(args: Vec<String>) -> GlobalFlags {
    let mut flags = GlobalFlags::default();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if let Some(value) = arg.strip_prefix("--lang=") {
            flags.overrides.language = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--catalog=") {
            flags.overrides.catalog = Some(value.to_string());
        } else if arg == "--lang" {
            match iter.next() {
                Some(value) => flags.overrides.language = Some(value),
                None => flags.missing_value = Some("--lang"),
            }
        } else if arg == "--catalog" {
            match iter.next() {
                Some(value) => flags.overrides.catalog = Some(value),
                None => flags.missing_value = Some("--catalog"),
            }
        } else {
            flags.rest.push(arg);
        }
    }

    flags
}

fn dispatch(config: &Config, args: &[String]) -> Result<ExitCode> {
    let Some(command) = args.first() else {
        print_usage(config.language);
        return Ok(ExitCode::SUCCESS);
    };
    debug!("dispatching '{}' with {} argument(s)", command, args.len() - 1);

    match command.as_str() {
        "search" => handle_search(config, &args[1..]),
        "explain" => handle_explain(config, &args[1..]),
        "category" => handle_category(config, &args[1..]),
        "categories" => handle_categories(config),
        "quickref" => {
            print!("{}", presentation::format_quick_reference(config.language));
            Ok(ExitCode::SUCCESS)
        }
        "fav" | "favorites" => handle_favorites(config, &args[1..]),
        "learn" | "--learn" => handle_learn(config, &args[1..]),
        "version" | "-v" | "--version" => {
            println!("vi-assistant v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        "help" | "-h" | "--help" => {
            print_usage(config.language);
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!("{}", Messages::new(config.language).unknown_command(command));
            print_usage(config.language);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn missing(config: &Config, what: &str) -> Result<ExitCode> {
    eprintln!("{}", Messages::new(config.language).missing_argument(what));
    Ok(ExitCode::FAILURE)
}

fn handle_search(config: &Config, args: &[String]) -> Result<ExitCode> {
    if args.is_empty() {
        return missing(config, "keyword");
    }

    let keyword = args.join(" ");
    let searcher = Searcher::new(Arc::new(config.catalog()));
    let results = searcher.search(&keyword)?;

    print!("{}", presentation::format_search_results(&results, config.language));
    Ok(ExitCode::SUCCESS)
}

fn handle_explain(config: &Config, args: &[String]) -> Result<ExitCode> {
    let Some(command) = args.first() else {
        return missing(config, "command");
    };

    let explainer = Explainer::new(Arc::new(config.catalog()));
    let result = explainer.explain(command)?;

    print!("{}", presentation::format_explanation(&result, config.language));
    Ok(ExitCode::SUCCESS)
}

fn handle_category(config: &Config, args: &[String]) -> Result<ExitCode> {
    let Some(category) = args.first() else {
        return missing(config, "category");
    };

    let searcher = Searcher::new(Arc::new(config.catalog()));
    let records = searcher.commands_by_category(category)?;

    print!(
        "{}",
        presentation::format_category(category, &records, config.language)
    );
    Ok(ExitCode::SUCCESS)
}

fn handle_categories(config: &Config) -> Result<ExitCode> {
    let searcher = Searcher::new(Arc::new(config.catalog()));
    let categories = searcher.categories()?;

    print!("{}", presentation::format_categories(&categories, config.language));
    Ok(ExitCode::SUCCESS)
}

fn handle_favorites(config: &Config, args: &[String]) -> Result<ExitCode> {
    let messages = Messages::new(config.language);
    // Built per subcommand so usage errors don't need a home directory
    let manager = || config.favorites_repository().map(FavoritesManager::new);

    match args.first().map(String::as_str) {
        Some("add") => {
            let Some(command) = args.get(1) else {
                return missing(config, "command");
            };

            // Only commands that exist in the catalog can be saved
            let explainer = Explainer::new(Arc::new(config.catalog()));
            let result = explainer.explain(command)?;
            let Some(record) = result.record() else {
                eprintln!("{}", messages.command_not_found(command));
                return Ok(ExitCode::FAILURE);
            };

            manager()?.add(&result.query, &record.description)?;
            println!("{}", messages.added(&result.query));
        }
        Some("list") => {
            let favorites = manager()?.list()?;
            print!("{}", presentation::format_favorites(&favorites, config.language));
        }
        Some("remove") => {
            let Some(command) = args.get(1) else {
                return missing(config, "command");
            };

            manager()?.remove(command)?;
            println!("{}", messages.removed(command));
        }
        Some("clear") => {
            manager()?.clear()?;
            println!("{}", messages.cleared());
        }
        _ => {
            print_favorites_usage(config.language);
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_learn(config: &Config, args: &[String]) -> Result<ExitCode> {
    let lang = config.language;
    let Some(name) = args.first() else {
        return missing(config, "level");
    };
    let Ok(level) = name.parse::<Level>() else {
        eprintln!("{}", Messages::new(lang).unknown_level(name));
        return Ok(ExitCode::FAILURE);
    };

    // Only pause between lessons when someone is there to press Enter
    let interactive = io::stdin().is_terminal();
    let all = lessons::lessons(level);

    println!("{}", lessons::start_banner(level, lang));
    for (i, lesson) in all.iter().enumerate() {
        print!("{}", presentation::format_lesson(lesson, i + 1, lang));

        if interactive && i + 1 < all.len() {
            println!("{}", Messages::new(lang).press_enter());
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
        }
    }
    println!("{}", lessons::completion_banner(level, lang));

    Ok(ExitCode::SUCCESS)
}

fn print_favorites_usage(lang: Language) {
    let text = match lang {
        Language::Korean => {
            r#"자주 사용하는 vi 명령어를 즐겨찾기에 추가하고 관리합니다.

하위 명령어:
    add <command>      명령어를 즐겨찾기에 추가
    list               즐겨찾기 목록 보기
    remove <command>   즐겨찾기에서 제거
    clear              모든 즐겨찾기 삭제
"#
        }
        Language::English => {
            r#"Add and manage your favorite vi commands.

SUBCOMMANDS:
    add <command>      Add a command to favorites
    list               Show favorites
    remove <command>   Remove a command from favorites
    clear              Remove all favorites
"#
        }
    };
    println!("{}", text);
}

fn print_usage(lang: Language) {
    let summary = lang.pick(
        "vi/vim 명령어 도우미 CLI 도구",
        "Your pocket vi/vim command reference",
    );
    println!(
        r#"vi-assistant v{} - {}

USAGE:
    vi-assistant [--lang ko|en] [--catalog <path>] <COMMAND> [ARGS]

COMMANDS:
    search <keyword>       Search commands by keyword
    explain <command>      Explain a single command
    category <name>        List commands in a category
    categories             List all categories
    quickref               Show the quick reference card
    fav add <command>      Add a command to favorites
    fav list               Show favorites
    fav remove <command>   Remove a command from favorites
    fav clear              Remove all favorites
    learn <level>          Tutorial lessons (beginner or intermediate)
    version                Show version
    help                   Show this help

EXAMPLES:
    vi-assistant search copy
    vi-assistant explain :wq
    vi-assistant --lang en fav add yy
    vi-assistant learn beginner

ENVIRONMENT:
    VI_ASSISTANT_LANG      Output language (ko or en, default ko)
    VI_ASSISTANT_CATALOG   Catalog file (default ./data/commands.json)
    VI_ASSISTANT_HOME      Favorites directory (default ~/.vi-assistant)
    RUST_LOG               Log filter (default warn)
"#,
        env!("CARGO_PKG_VERSION"),
        summary
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_global_flags_anywhere() {
        let flags =
            split_global_flags(args(&["explain", "--lang", "en", ":wq", "--catalog=/tmp/c.json"]));

        assert_eq!(flags.overrides.language.as_deref(), Some("en"));
        assert_eq!(flags.overrides.catalog.as_deref(), Some("/tmp/c.json"));
        assert_eq!(flags.rest, args(&["explain", ":wq"]));
        assert_eq!(flags.missing_value, None);
    }

    #[test]
    fn test_no_flags() {
        let flags = split_global_flags(args(&["fav", "list"]));
        assert_eq!(flags.overrides, Overrides::default());
        assert_eq!(flags.rest, args(&["fav", "list"]));
    }

    #[test]
    fn test_trailing_flag_without_value() {
        let flags = split_global_flags(args(&["explain", ":wq", "--lang"]));
        assert_eq!(flags.missing_value, Some("--lang"));
        assert_eq!(flags.overrides.language, None);
        assert_eq!(flags.rest, args(&["explain", ":wq"]));

        let flags = split_global_flags(args(&["--lang", "en", "search", "--catalog"]));
        assert_eq!(flags.missing_value, Some("--catalog"));
        assert_eq!(flags.overrides.language.as_deref(), Some("en"));
    }

    fn offline_config() -> Config {
        Config {
            language: Language::English,
            catalog_path: "/nonexistent/commands.json".into(),
            favorites_dir: None,
        }
    }

    fn same_code(actual: ExitCode, expected: ExitCode) -> bool {
        format!("{:?}", actual) == format!("{:?}", expected)
    }

    #[test]
    fn test_usage_errors_exit_with_failure() {
        let config = offline_config();

        for argv in [
            args(&["frobnicate"]),
            args(&["explain"]),
            args(&["fav", "bogus"]),
            args(&["learn", "expert"]),
            args(&["learn"]),
        ] {
            let code = dispatch(&config, &argv).unwrap();
            assert!(same_code(code, ExitCode::FAILURE), "{:?}", argv);
        }
    }

    #[test]
    fn test_fav_without_home_is_an_error() {
        let err = dispatch(&offline_config(), &args(&["fav", "list"])).unwrap_err();
        assert!(!err.is_domain_error());
    }

    #[test]
    fn test_learn_is_routed_after_flags() {
        let flags = split_global_flags(args(&["--lang=en", "--learn", "beginner"]));
        assert_eq!(flags.rest, args(&["--learn", "beginner"]));
    }
}
