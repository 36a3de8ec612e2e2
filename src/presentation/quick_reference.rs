/// Quick reference card
///
/// A fixed cheat sheet of the most common commands. It does not read the
/// catalog.

use crate::presentation::Language;
use std::fmt::Write;

/// (command, Korean, English, section)
const COMMON_COMMANDS: &[(&str, &str, &str, Section)] = &[
    (":w", "파일 저장", "Save file", Section::File),
    (":q", "종료", "Quit", Section::File),
    (":wq", "저장 후 종료", "Save and quit", Section::File),
    (":q!", "강제 종료", "Quit without saving", Section::File),
    ("i", "삽입 모드", "Insert mode", Section::Mode),
    ("Esc", "명령 모드", "Command mode", Section::Mode),
    ("yy", "줄 복사", "Copy line", Section::Edit),
    ("dd", "줄 삭제", "Delete line", Section::Edit),
    ("p", "붙여넣기", "Paste", Section::Edit),
    ("u", "실행 취소", "Undo", Section::Edit),
    ("h", "왼쪽 이동", "Move left", Section::Navigation),
    ("j", "아래 이동", "Move down", Section::Navigation),
    ("k", "위 이동", "Move up", Section::Navigation),
    ("l", "오른쪽 이동", "Move right", Section::Navigation),
    ("/pattern", "검색", "Search forward", Section::Search),
    (":s/old/new", "바꾸기", "Substitute", Section::Search),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    File,
    Mode,
    Edit,
    Navigation,
    Search,
}

impl Section {
    const ALL: [Section; 5] = [
        Section::File,
        Section::Mode,
        Section::Edit,
        Section::Navigation,
        Section::Search,
    ];

    fn title(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (Section::File, Language::Korean) => "📁 파일 작업",
            (Section::File, Language::English) => "📁 File Operations",
            (Section::Mode, Language::Korean) => "🎯 모드 전환",
            (Section::Mode, Language::English) => "🎯 Mode Switching",
            (Section::Edit, Language::Korean) => "✂️ 편집",
            (Section::Edit, Language::English) => "✂️ Edit Operations",
            (Section::Navigation, Language::Korean) => "🧭 이동",
            (Section::Navigation, Language::English) => "🧭 Navigation",
            (Section::Search, Language::Korean) => "🔍 검색 및 바꾸기",
            (Section::Search, Language::English) => "🔍 Search & Replace",
        }
    }
}

pub fn format_quick_reference(lang: Language) -> String {
    let mut out = String::new();
    out.push_str(lang.pick(
        "빠른 참조 - 자주 사용하는 vi 명령어:\n",
        "Quick Reference - Common vi Commands:\n",
    ));

    for section in Section::ALL {
        let _ = writeln!(out, "\n{}:", section.title(lang));
        for (command, ko, en, _) in COMMON_COMMANDS.iter().filter(|c| c.3 == section) {
            let _ = writeln!(out, "  {:<10} {}", command, lang.pick(ko, en));
        }
    }

    out
}
