/// Built-in tutorial lessons
///
/// Two levels of short lessons, each a handful of commands with an example,
/// something to try, and a few tips. The content is static and bilingual.

use crate::error::AssistantError;
use crate::presentation::Language;
use std::fmt::{self, Write};
use std::str::FromStr;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// A string in both output languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub ko: &'static str,
    pub en: &'static str,
}

impl Text {
    pub fn get(&self, lang: Language) -> &'static str {
        lang.pick(self.ko, self.en)
    }
}

const fn t(ko: &'static str, en: &'static str) -> Text {
    Text { ko, en }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonCommand {
    pub command: &'static str,
    pub description: Text,
    pub example: Text,
    pub practice: Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub title: Text,
    pub description: Text,
    pub commands: &'static [LessonCommand],
    pub tips: &'static [Text],
}

/// Tutorial difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
}

impl Level {
    pub fn name(&self) -> &str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
        }
    }

    fn label(&self, lang: Language) -> &'static str {
        match self {
            Level::Beginner => lang.pick("초보자", "Beginner"),
            Level::Intermediate => lang.pick("중급자", "Intermediate"),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Level {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            other => Err(AssistantError::Config(format!(
                "unknown level '{}', use 'beginner' or 'intermediate'",
                other
            ))),
        }
    }
}

/// Lessons for `level`, in the order they should be taken
pub fn lessons(level: Level) -> &'static [Lesson] {
    match level {
        Level::Beginner => BEGINNER,
        Level::Intermediate => INTERMEDIATE,
    }
}

/// Render one lesson. `number` is its 1-based position within the level.
pub fn format_lesson(lesson: &Lesson, number: usize, lang: Language) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n📚 {}. {}", number, lesson.title.get(lang));
    let _ = writeln!(out, "{}\n", RULE);
    let _ = writeln!(out, "{}\n", lesson.description.get(lang));

    out.push_str(lang.pick("🎯 배울 명령어:\n", "🎯 Commands to Learn:\n"));
    let (description, example, practice) = match lang {
        Language::Korean => ("설명", "예제", "연습"),
        Language::English => ("Description", "Example", "Practice"),
    };
    for (i, cmd) in lesson.commands.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", i + 1, cmd.command);
        let _ = writeln!(out, "   {}: {}", description, cmd.description.get(lang));
        let _ = writeln!(out, "   {}: {}", example, cmd.example.get(lang));
        let _ = writeln!(out, "   {}: {}", practice, cmd.practice.get(lang));
    }

    out.push_str(lang.pick("\n💡 팁:\n", "\n💡 Tips:\n"));
    for tip in lesson.tips {
        let _ = writeln!(out, "   💡 {}", tip.get(lang));
    }

    out
}

/// Numbered table of contents for a level
pub fn format_lesson_list(level: Level, lang: Language) -> String {
    let mut out = String::new();

    match lang {
        Language::Korean => {
            let _ = writeln!(out, "\n🎓 {} 레벨 강의", level.label(lang));
        }
        Language::English => {
            let _ = writeln!(out, "\n🎓 {} Level Lessons", level.label(lang));
        }
    }
    let _ = writeln!(out, "{}\n", RULE);

    for (i, lesson) in lessons(level).iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, lesson.title.get(lang));
    }

    out
}

/// Printed once before the first lesson
pub fn start_banner(level: Level, lang: Language) -> String {
    match lang {
        Language::Korean => format!("🎓 {} 레벨 튜토리얼을 시작합니다", level.label(lang)),
        Language::English => format!("🎓 Starting {} Level Tutorial", level.label(lang)),
    }
}

/// Printed after the last lesson
pub fn completion_banner(level: Level, lang: Language) -> String {
    match lang {
        Language::Korean => format!(
            "\n🎉 축하합니다! {} 튜토리얼을 완료했습니다!",
            level.label(lang)
        ),
        Language::English => format!(
            "\n🎉 Congratulations! You've completed the {} tutorial!",
            level.name()
        ),
    }
}

static BEGINNER: &[Lesson] = &[
    Lesson {
        title: t(
            "vi 시작하기 - 기본 모드 이해",
            "Getting Started with vi - Understanding Basic Modes",
        ),
        description: t(
            "vi의 두 가지 주요 모드와 기본 이동 명령어를 배워봅시다.",
            "Learn about vi's two main modes and basic movement commands.",
        ),
        commands: &[
            LessonCommand {
                command: "vi filename",
                description: t("vi 에디터로 파일 열기", "Open a file with the vi editor"),
                example: t("vi test.txt", "vi test.txt"),
                practice: t(
                    "터미널에서 'vi test.txt'를 입력해보세요",
                    "Type 'vi test.txt' in a terminal",
                ),
            },
            LessonCommand {
                command: "i",
                description: t(
                    "삽입 모드로 전환 (텍스트 입력 가능)",
                    "Switch to insert mode (text can be typed)",
                ),
                example: t(
                    "i를 누르면 하단에 -- INSERT -- 표시",
                    "Press i to see -- INSERT -- at the bottom",
                ),
                practice: t("i를 누르고 텍스트를 입력해보세요", "Press i and type some text"),
            },
            LessonCommand {
                command: "Esc",
                description: t("명령 모드로 돌아가기", "Return to command mode"),
                example: t(
                    "Esc를 누르면 -- INSERT -- 표시가 사라짐",
                    "Press Esc and -- INSERT -- disappears",
                ),
                practice: t(
                    "텍스트 입력 후 Esc를 눌러 명령 모드로 전환",
                    "After typing text, press Esc to go back to command mode",
                ),
            },
            LessonCommand {
                command: "h, j, k, l",
                description: t(
                    "기본 커서 이동 (왼쪽, 아래, 위, 오른쪽)",
                    "Basic cursor movement (left, down, up, right)",
                ),
                example: t(
                    "h: 왼쪽, j: 아래, k: 위, l: 오른쪽",
                    "h: left, j: down, k: up, l: right",
                ),
                practice: t(
                    "명령 모드에서 h, j, k, l로 커서를 움직여보세요",
                    "In command mode, move the cursor with h, j, k, l",
                ),
            },
        ],
        tips: &[
            t("vi는 항상 명령 모드에서 시작합니다", "vi always starts in command mode"),
            t(
                "텍스트를 입력하려면 반드시 'i'로 삽입 모드로 전환해야 합니다",
                "You must press 'i' to switch to insert mode before typing text",
            ),
            t(
                "명령 모드에서는 모든 키가 명령어로 인식됩니다",
                "In command mode every key is treated as a command",
            ),
            t(
                "h, j, k, l은 키보드의 왼쪽에 있어서 한 손으로 조작하기 편합니다",
                "h, j, k, l sit under one hand, so you can move without reaching",
            ),
        ],
    },
    Lesson {
        title: t("파일 저장과 종료", "Saving Files and Exiting"),
        description: t(
            "작업한 내용을 저장하고 vi를 종료하는 방법을 배워봅시다.",
            "Learn how to save your work and exit vi.",
        ),
        commands: &[
            LessonCommand {
                command: ":w",
                description: t("현재 파일 저장", "Save the current file"),
                example: t(":w를 입력하고 Enter", "Type :w and press Enter"),
                practice: t(
                    "텍스트를 입력한 후 :w로 저장해보세요",
                    "After typing some text, save it with :w",
                ),
            },
            LessonCommand {
                command: ":q",
                description: t("변경사항 없이 종료", "Exit when there are no changes"),
                example: t(":q를 입력하고 Enter", "Type :q and press Enter"),
                practice: t("저장 후 :q로 종료해보세요", "After saving, exit with :q"),
            },
            LessonCommand {
                command: ":wq",
                description: t(
                    "저장하고 종료 (가장 많이 사용)",
                    "Save and exit (the one you will use most)",
                ),
                example: t(":wq를 입력하고 Enter", "Type :wq and press Enter"),
                practice: t(
                    "작업 완료 후 :wq로 저장하고 종료",
                    "When you are done, save and exit with :wq",
                ),
            },
            LessonCommand {
                command: ":q!",
                description: t(
                    "변경사항 무시하고 강제 종료",
                    "Force exit, discarding changes",
                ),
                example: t(":q!를 입력하고 Enter", "Type :q! and press Enter"),
                practice: t(
                    "실수로 변경한 경우 :q!로 강제 종료",
                    "If you changed something by mistake, force exit with :q!",
                ),
            },
        ],
        tips: &[
            t(
                ":wq는 'write and quit'의 줄임말입니다",
                ":wq stands for 'write and quit'",
            ),
            t(
                ":q!는 변경사항을 저장하지 않고 나가는 긴급 탈출 명령어입니다",
                ":q! is the emergency exit: it quits without saving",
            ),
            t(
                "저장하지 않고 종료하려고 하면 vi가 경고를 표시합니다",
                "vi warns you if you try to quit with unsaved changes",
            ),
            t(
                ":w filename으로 다른 이름으로 저장할 수 있습니다",
                "Use :w filename to save under another name",
            ),
        ],
    },
    Lesson {
        title: t("텍스트 편집 기본", "Basic Text Editing"),
        description: t(
            "텍스트를 삭제하고 복사하는 기본적인 편집 명령어를 배워봅시다.",
            "Learn the basic commands for deleting and copying text.",
        ),
        commands: &[
            LessonCommand {
                command: "x",
                description: t("커서 위치의 문자 삭제", "Delete the character under the cursor"),
                example: t(
                    "x를 누르면 커서 위치의 문자가 삭제됨",
                    "Press x and the character under the cursor is gone",
                ),
                practice: t(
                    "텍스트에서 x를 눌러 문자를 삭제해보세요",
                    "Delete a few characters with x",
                ),
            },
            LessonCommand {
                command: "dd",
                description: t("현재 줄 전체 삭제", "Delete the whole current line"),
                example: t(
                    "dd를 누르면 현재 줄이 삭제됨",
                    "Press dd and the current line is deleted",
                ),
                practice: t(
                    "dd를 눌러 현재 줄을 삭제해보세요",
                    "Delete the current line with dd",
                ),
            },
            LessonCommand {
                command: "yy",
                description: t("현재 줄 복사 (야크)", "Copy (yank) the current line"),
                example: t(
                    "yy를 누르면 현재 줄이 복사됨",
                    "Press yy and the current line is copied",
                ),
                practice: t("yy를 눌러 줄을 복사해보세요", "Copy a line with yy"),
            },
            LessonCommand {
                command: "p",
                description: t(
                    "복사한 내용을 다음 위치에 붙여넣기",
                    "Paste what you copied after the cursor",
                ),
                example: t(
                    "yy 후 p를 누르면 다음 줄에 붙여넣어짐",
                    "After yy, p pastes the line below",
                ),
                practice: t(
                    "yy로 복사한 후 p로 붙여넣어보세요",
                    "Copy with yy, then paste with p",
                ),
            },
        ],
        tips: &[
            t("dd는 'delete line'의 줄임말입니다", "dd is short for 'delete line'"),
            t(
                "yy는 'yank'의 줄임말로, 복사 기능입니다",
                "yy comes from 'yank', vi's word for copy",
            ),
            t("p는 'paste'의 줄임말입니다", "p is short for 'paste'"),
            t(
                "P(대문자)를 누르면 이전 위치에 붙여넣어집니다",
                "Capital P pastes before the cursor instead",
            ),
        ],
    },
];

static INTERMEDIATE: &[Lesson] = &[
    Lesson {
        title: t("고급 이동 명령어", "Advanced Movement Commands"),
        description: t(
            "더 효율적인 텍스트 탐색을 위한 고급 이동 명령어를 배워봅시다.",
            "Learn advanced movement commands for faster navigation.",
        ),
        commands: &[
            LessonCommand {
                command: "w",
                description: t("다음 단어의 시작으로 이동", "Move to the start of the next word"),
                example: t("w를 누르면 다음 단어로 이동", "Press w to jump to the next word"),
                practice: t("w를 눌러 단어 단위로 이동해보세요", "Move word by word with w"),
            },
            LessonCommand {
                command: "b",
                description: t(
                    "이전 단어의 시작으로 이동",
                    "Move to the start of the previous word",
                ),
                example: t("b를 누르면 이전 단어로 이동", "Press b to jump back one word"),
                practice: t("b를 눌러 뒤로 단어 단위 이동", "Move backward word by word with b"),
            },
            LessonCommand {
                command: "0",
                description: t("현재 줄의 시작으로 이동", "Move to the start of the line"),
                example: t("0을 누르면 줄의 맨 앞으로 이동", "Press 0 to go to column one"),
                practice: t("0을 눌러 줄의 시작으로 이동", "Jump to the start of a line with 0"),
            },
            LessonCommand {
                command: "$",
                description: t("현재 줄의 끝으로 이동", "Move to the end of the line"),
                example: t("$를 누르면 줄의 맨 뒤로 이동", "Press $ to go to the last character"),
                practice: t("$를 눌러 줄의 끝으로 이동", "Jump to the end of a line with $"),
            },
            LessonCommand {
                command: "gg",
                description: t("파일의 첫 번째 줄로 이동", "Move to the first line of the file"),
                example: t("gg를 누르면 파일 맨 위로 이동", "Press gg to go to the top"),
                practice: t("gg를 눌러 파일의 시작으로 이동", "Jump to the top of the file with gg"),
            },
            LessonCommand {
                command: "G",
                description: t("파일의 마지막 줄로 이동", "Move to the last line of the file"),
                example: t("G를 누르면 파일 맨 아래로 이동", "Press G to go to the bottom"),
                practice: t("G를 눌러 파일의 끝으로 이동", "Jump to the end of the file with G"),
            },
        ],
        tips: &[
            t("w는 'word'의 줄임말입니다", "w stands for 'word'"),
            t("b는 'back'의 줄임말입니다", "b stands for 'back'"),
            t(
                "0은 숫자 0이지만 줄의 시작을 의미합니다",
                "0 is the digit zero but means start of line",
            ),
            t("$는 줄의 끝을 의미하는 기호입니다", "$ means end of line"),
            t(
                "gg는 'go to beginning'의 줄임말입니다",
                "Think of gg as 'go to beginning'",
            ),
            t("G는 'go to end'의 줄임말입니다", "Think of G as 'go to end'"),
        ],
    },
    Lesson {
        title: t("검색과 바꾸기", "Search and Replace"),
        description: t(
            "텍스트 내에서 특정 패턴을 찾고 바꾸는 방법을 배워봅시다.",
            "Learn how to find a pattern and replace it.",
        ),
        commands: &[
            LessonCommand {
                command: "/pattern",
                description: t("앞으로 패턴 검색", "Search forward for a pattern"),
                example: t(
                    "/hello를 입력하면 'hello'를 앞으로 검색",
                    "/hello searches forward for 'hello'",
                ),
                practice: t(
                    "/를 누르고 검색할 단어를 입력해보세요",
                    "Press / and type a word to search for",
                ),
            },
            LessonCommand {
                command: "?pattern",
                description: t("뒤로 패턴 검색", "Search backward for a pattern"),
                example: t(
                    "?hello를 입력하면 'hello'를 뒤로 검색",
                    "?hello searches backward for 'hello'",
                ),
                practice: t(
                    "?를 누르고 검색할 단어를 입력해보세요",
                    "Press ? and type a word to search for",
                ),
            },
            LessonCommand {
                command: "n",
                description: t("다음 검색 결과로 이동", "Go to the next match"),
                example: t(
                    "n을 누르면 다음 검색 결과로 이동",
                    "Press n to jump to the next match",
                ),
                practice: t(
                    "검색 후 n을 눌러 다음 결과로 이동",
                    "After a search, step through matches with n",
                ),
            },
            LessonCommand {
                command: "N",
                description: t("이전 검색 결과로 이동", "Go to the previous match"),
                example: t(
                    "N을 누르면 이전 검색 결과로 이동",
                    "Press N to jump to the previous match",
                ),
                practice: t(
                    "검색 후 N을 눌러 이전 결과로 이동",
                    "After a search, step back with N",
                ),
            },
            LessonCommand {
                command: ":s/old/new",
                description: t(
                    "현재 줄의 첫 번째 'old'를 'new'로 바꾸기",
                    "Replace the first 'old' on the current line with 'new'",
                ),
                example: t(
                    ":s/cat/dog를 입력하면 첫 번째 'cat'이 'dog'로 바뀜",
                    ":s/cat/dog turns the first 'cat' into 'dog'",
                ),
                practice: t(
                    ":s/를 사용해 현재 줄의 텍스트를 바꿔보세요",
                    "Change some text on the current line with :s/",
                ),
            },
            LessonCommand {
                command: ":%s/old/new/g",
                description: t(
                    "파일 전체의 모든 'old'를 'new'로 바꾸기",
                    "Replace every 'old' in the file with 'new'",
                ),
                example: t(
                    ":%s/cat/dog/g를 입력하면 모든 'cat'이 'dog'로 바뀜",
                    ":%s/cat/dog/g turns every 'cat' into 'dog'",
                ),
                practice: t(
                    ":%s/를 사용해 파일 전체의 텍스트를 바꿔보세요",
                    "Change text across the whole file with :%s/",
                ),
            },
        ],
        tips: &[
            t("/는 앞으로, ?는 뒤로 검색합니다", "/ searches forward, ? searches backward"),
            t("n은 'next'의 줄임말입니다", "n stands for 'next'"),
            t("N은 'previous'의 줄임말입니다", "N goes the other way"),
            t(":s는 'substitute'의 줄임말입니다", ":s stands for 'substitute'"),
            t(
                "g는 'global'의 줄임말로 모든 매치를 바꿉니다",
                "g means 'global': every match on the line is replaced",
            ),
            t("%는 파일 전체를 의미합니다", "% means the whole file"),
        ],
    },
];
