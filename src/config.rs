/// Runtime configuration
///
/// Resolved once at start-up and passed down explicitly. Precedence is
/// command-line flag, then environment variable, then built-in default.

use crate::error::{AssistantError, Result};
use crate::presentation::Language;
use crate::store::catalog::DEFAULT_CATALOG_PATH;
use crate::store::favorites_file::CONFIG_DIR_NAME;
use crate::store::{Catalog, JsonFileRepository};
use std::path::PathBuf;

pub const ENV_LANG: &str = "VI_ASSISTANT_LANG";
pub const ENV_CATALOG: &str = "VI_ASSISTANT_CATALOG";
pub const ENV_HOME: &str = "VI_ASSISTANT_HOME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub language: Language,
    pub catalog_path: PathBuf,
    /// `None` when neither `VI_ASSISTANT_HOME` nor a home directory is known.
    /// Only favorites need it, so lookups still work without one.
    pub favorites_dir: Option<PathBuf>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub language: Option<String>,
    pub catalog: Option<String>,
}

impl Config {
    /// Resolve against the real process environment
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok(), dirs::home_dir)
    }

    /// Resolve with an explicit environment lookup and home directory
    ///
    /// # Returns
    /// * `Ok(Config)` - Resolved configuration
    /// * `Err(Config)` - Unknown language code
    pub fn resolve_with<F>(
        overrides: &Overrides,
        env: F,
        home_dir: fn() -> Option<PathBuf>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let language = match overrides.language.clone().or_else(|| env(ENV_LANG)) {
            Some(code) => code.parse::<Language>()?,
            None => Language::default(),
        };

        let catalog_path = match overrides.catalog.clone().or_else(|| env(ENV_CATALOG)) {
            Some(path) => PathBuf::from(path),
            None => std::env::current_dir()?.join(DEFAULT_CATALOG_PATH),
        };

        let favorites_dir = match env(ENV_HOME) {
            Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => home_dir().map(|home| home.join(CONFIG_DIR_NAME)),
        };

        Ok(Self {
            language,
            catalog_path,
            favorites_dir,
        })
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::open(&self.catalog_path)
    }

    /// Repository under the resolved favorites directory
    ///
    /// # Returns
    /// * `Err(HomeDirectoryUnavailable)` - No `VI_ASSISTANT_HOME` and no home
    pub fn favorites_repository(&self) -> Result<JsonFileRepository> {
        self.favorites_dir
            .as_deref()
            .map(JsonFileRepository::new)
            .ok_or(AssistantError::HomeDirectoryUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Explainer, Searcher};
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn some_home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/tester"))
    }

    fn no_home() -> Option<PathBuf> {
        None
    }

    #[test]
    fn test_defaults() {
        let env = env_of(&[(ENV_HOME, "/tmp/vi-home")]);
        let config = Config::resolve_with(&Overrides::default(), env, no_home).unwrap();

        assert_eq!(config.language, Language::Korean);
        assert!(config.catalog_path.ends_with("data/commands.json"));
        assert_eq!(config.favorites_dir, Some(PathBuf::from("/tmp/vi-home")));
    }

    #[test]
    fn test_flag_beats_env() {
        let env = env_of(&[(ENV_LANG, "ko"), (ENV_CATALOG, "/env/cmds.json"), (ENV_HOME, "/h")]);
        let overrides = Overrides {
            language: Some("en".to_string()),
            catalog: Some("/flag/cmds.json".to_string()),
        };

        let config = Config::resolve_with(&overrides, env, no_home).unwrap();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.catalog_path, PathBuf::from("/flag/cmds.json"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let env = env_of(&[(ENV_LANG, "en"), (ENV_CATALOG, "/env/cmds.json"), (ENV_HOME, "/h")]);
        let config = Config::resolve_with(&Overrides::default(), env, no_home).unwrap();

        assert_eq!(config.language, Language::English);
        assert_eq!(config.catalog_path, PathBuf::from("/env/cmds.json"));
    }

    #[test]
    fn test_unknown_language() {
        let env = env_of(&[(ENV_HOME, "/h")]);
        let overrides = Overrides {
            language: Some("de".to_string()),
            catalog: None,
        };

        match Config::resolve_with(&overrides, env, no_home) {
            Err(AssistantError::Config(msg)) => assert!(msg.contains("de")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_favorites_repository_path() {
        let env = env_of(&[(ENV_HOME, "/tmp/vi-home")]);
        let config = Config::resolve_with(&Overrides::default(), env, no_home).unwrap();

        let repo = config.favorites_repository().unwrap();
        assert_eq!(repo.path(), Path::new("/tmp/vi-home/favorites.json"));
    }

    #[test]
    fn test_favorites_dir_defaults_under_home() {
        let config = Config::resolve_with(&Overrides::default(), env_of(&[]), some_home).unwrap();
        assert_eq!(
            config.favorites_dir.as_deref(),
            Some(Path::new("/home/tester/.vi-assistant"))
        );
    }

    #[test]
    fn test_lookups_work_without_home() {
        let temp = TempDir::new().unwrap();
        let catalog_path = temp.path().join("commands.json");
        std::fs::write(
            &catalog_path,
            r#"[{"keyword": "save quit", "command": ":wq", "description": "Save and quit", "category": "file"}]"#,
        )
        .unwrap();

        let overrides = Overrides {
            language: None,
            catalog: Some(catalog_path.to_string_lossy().into_owned()),
        };
        let config = Config::resolve_with(&overrides, env_of(&[]), no_home).unwrap();
        assert_eq!(config.favorites_dir, None);

        let catalog = Arc::new(config.catalog());
        assert!(Explainer::new(catalog.clone()).explain(":wq").unwrap().found());
        assert_eq!(Searcher::new(catalog).search("quit").unwrap().count, 1);

        match config.favorites_repository() {
            Err(AssistantError::HomeDirectoryUnavailable) => {}
            other => panic!("Expected HomeDirectoryUnavailable, got {:?}", other),
        }
    }
}
