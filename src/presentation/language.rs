/// Output language and localized messages
///
/// The language is always passed in explicitly; there is no global setting.

use crate::error::{AssistantError, Result};
use std::fmt;
use std::str::FromStr;

/// Supported output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    /// Short code used on the command line
    pub fn code(&self) -> &str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }

    /// Pick the string for this language
    pub fn pick<'a>(&self, ko: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Korean => ko,
            Language::English => en,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Language::Korean),
            "en" | "english" => Ok(Language::English),
            other => Err(AssistantError::Config(format!(
                "unknown language '{}', use 'ko' or 'en'",
                other
            ))),
        }
    }
}

/// One-line messages printed by the CLI
pub struct Messages {
    lang: Language,
}

impl Messages {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn added(&self, command: &str) -> String {
        match self.lang {
            Language::Korean => format!("'{}'을(를) 즐겨찾기에 추가했습니다.", command),
            Language::English => format!("Added '{}' to favorites.", command),
        }
    }

    pub fn removed(&self, command: &str) -> String {
        match self.lang {
            Language::Korean => format!("'{}'을(를) 즐겨찾기에서 제거했습니다.", command),
            Language::English => format!("Removed '{}' from favorites.", command),
        }
    }

    pub fn cleared(&self) -> String {
        self.lang
            .pick("모든 즐겨찾기가 삭제되었습니다.", "All favorites cleared.")
            .to_string()
    }

    pub fn command_not_found(&self, command: &str) -> String {
        match self.lang {
            Language::Korean => format!("명령어를 찾을 수 없습니다: {}", command),
            Language::English => format!("Command not found: {}", command),
        }
    }

    pub fn missing_argument(&self, what: &str) -> String {
        match self.lang {
            Language::Korean => format!("오류: {}을(를) 입력하세요", what),
            Language::English => format!("Error: No {} provided", what),
        }
    }

    pub fn unknown_command(&self, command: &str) -> String {
        match self.lang {
            Language::Korean => format!("알 수 없는 명령어입니다: {}", command),
            Language::English => format!("Unknown command: {}", command),
        }
    }

    pub fn unknown_level(&self, level: &str) -> String {
        match self.lang {
            Language::Korean => format!(
                "알 수 없는 레벨입니다: {}. 'beginner' 또는 'intermediate'를 사용하세요",
                level
            ),
            Language::English => format!(
                "Unknown level: {}. Use 'beginner' or 'intermediate'",
                level
            ),
        }
    }

    pub fn press_enter(&self) -> &str {
        self.lang.pick(
            "\n다음 강의로 계속하려면 Enter를 누르세요...",
            "\nPress Enter to continue to next lesson...",
        )
    }

    pub fn error_prefix(&self) -> &str {
        self.lang.pick("오류가 발생했습니다: ", "An error occurred: ")
    }
}
