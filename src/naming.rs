//! Folder-name to display-title transforms and course icon selection.

use std::sync::LazyLock;

use regex::Regex;

/// Boilerplate phrases scraped lesson files carry in their names. Stripped
/// case-insensitively after separators are turned into spaces.
static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)course exam：|practice exam：|solution|｜ 365 data science").unwrap()
});

/// Parenthesized scrape timestamps like `(01_02_2024 10：30：00)`.
static SCRAPE_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d{2}_\d{2}_\d{4} \d{2}：\d{2}：\d{2}\)").unwrap());

/// Ordered keyword to icon mapping; the first matching keyword wins.
const ICONS: [(&str, &str); 5] = [
    ("exam", "fas fa-award"),
    ("project", "fas fa-project-diagram"),
    ("quiz", "fas fa-question-circle"),
    ("pivot", "fas fa-table"),
    ("database", "fas fa-database"),
];

const DEFAULT_ICON: &str = "fas fa-file-excel";

/// Turn a filesystem segment name into a display title: separators become
/// spaces, every word is capitalized. Idempotent on already-normalized input.
pub fn title_from_segment(segment: &str) -> String {
    segment
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name for a lesson, derived from the final segment of its relative
/// path: extension and known boilerplate stripped, separators spaced,
/// words capitalized.
pub fn lesson_display_name(rel_path: &str) -> String {
    let name = rel_path.rsplit('/').next().unwrap_or(rel_path);
    let name = name.strip_suffix(".html").unwrap_or(name);
    let name = SCRAPE_STAMP.replace_all(name, "");
    let name = name.replace(['-', '_'], " ");
    let name = BOILERPLATE.replace_all(&name, "");
    title_from_segment(name.trim())
}

/// Pick the dashboard icon for a course title by ordered keyword match.
pub fn icon_for(title: &str) -> &'static str {
    let name = title.to_lowercase();
    for (keyword, icon) in ICONS {
        if name.contains(keyword) {
            return icon;
        }
    }
    DEFAULT_ICON
}

/// Project courses get their own badge and card styling on the dashboard.
pub fn is_project(title: &str) -> bool {
    title.to_lowercase().contains("project")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
