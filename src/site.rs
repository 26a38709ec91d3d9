//! Askama templates for the generated pages.
//!
//! Rendering is pure substitution: course and lesson values land in HTML
//! text nodes through askama's automatic escaping, and everything the
//! embedded navigation script consumes is JSON-encoded first.

use std::path::{Component, Path};

use askama::Template;
use serde::Serialize;

use crate::config::Config;
use crate::discovery::Course;
use crate::naming;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub subtitle: String,
    pub total_courses: usize,
    pub total_lessons: usize,
    pub cards: Vec<CourseCard>,
}

pub struct CourseCard {
    pub title: String,
    pub href: String,
    pub lessons: usize,
    pub icon: &'static str,
    pub is_project: bool,
}

impl DashboardTemplate {
    pub fn new(config: &Config, courses: &[Course]) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            total_courses: courses.len(),
            total_lessons: courses.iter().map(|c| c.lesson_count).sum(),
            cards: courses.iter().map(CourseCard::from_course).collect(),
        }
    }
}

impl CourseCard {
    fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            href: course.href.clone(),
            lessons: course.lesson_count,
            icon: naming::icon_for(&course.title),
            is_project: naming::is_project(&course.title),
        }
    }
}

/// One entry of the navigation payload embedded in a viewer page.
#[derive(Serialize)]
struct LessonEntry {
    path: String,
    title: String,
}

#[derive(Template)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate {
    pub title: String,
    pub lesson_count: usize,
    pub home_href: String,
    lessons_json: String,
    storage_key_json: String,
}

impl ViewerTemplate {
    /// `lessons` must already be in navigation order; `storage_key` is the
    /// course's relative path, which keys the last-viewed-lesson entry in
    /// browser storage (titles are not unique enough).
    pub fn new(title: String, storage_key: &str, lessons: &[String], depth: usize) -> Self {
        let entries: Vec<LessonEntry> = lessons
            .iter()
            .map(|path| LessonEntry {
                path: path.clone(),
                title: naming::lesson_display_name(path),
            })
            .collect();
        Self {
            title,
            lesson_count: lessons.len(),
            home_href: home_href(depth),
            lessons_json: script_json(&entries),
            storage_key_json: script_json(&storage_key),
        }
    }
}

/// Relative link from a course directory back to the dashboard: one
/// parent-directory reference per level below the hub root.
pub fn home_href(depth: usize) -> String {
    let mut href = "../".repeat(depth);
    href.push_str("index.html");
    href
}

/// Number of real path components below the hub root.
pub fn depth_below_root(dir: &Path) -> usize {
    dir.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
}

/// JSON safe to inline inside a `<script>` element: `<` is escaped so no
/// value can introduce a closing tag.
fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .expect("navigation payload serializes")
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_href_matches_depth() {
        assert_eq!(home_href(1), "../index.html");
        assert_eq!(home_href(3), "../../../index.html");
    }

    #[test]
    fn depth_ignores_cur_dir_components() {
        assert_eq!(depth_below_root(Path::new("./base/course")), 2);
        assert_eq!(depth_below_root(Path::new("base/nested/course")), 3);
    }

    #[test]
    fn script_json_escapes_closing_tags() {
        assert_eq!(script_json(&"</script>"), "\"\\u003c/script>\"");
    }

    #[test]
    fn dashboard_escapes_course_titles() {
        let page = DashboardTemplate {
            title: "Hub".to_string(),
            subtitle: "Test".to_string(),
            total_courses: 1,
            total_lessons: 2,
            cards: vec![CourseCard {
                title: "A <b> & Co".to_string(),
                href: "courses/a/viewer.html".to_string(),
                lessons: 2,
                icon: "fas fa-table",
                is_project: false,
            }],
        };
        let html = page.render().unwrap();
        assert!(html.contains("A &lt;b&gt; &amp; Co"));
        assert!(!html.contains("A <b> & Co"));
    }

    #[test]
    fn dashboard_badges_follow_course_kind() {
        let course = Course {
            title: "Sales Project".to_string(),
            href: "courses/projects/sales/viewer.html".to_string(),
            dir: "courses/projects/sales".into(),
            lesson_count: 2,
        };
        let plain = Course {
            title: "Excel Basics".to_string(),
            href: "courses/excel-basics/viewer.html".to_string(),
            dir: "courses/excel-basics".into(),
            lesson_count: 3,
        };
        let page = DashboardTemplate::new(&Config::default(), &[course, plain]);
        assert!(page.cards[0].is_project);
        assert_eq!(page.cards[0].icon, "fas fa-project-diagram");
        assert!(!page.cards[1].is_project);
        assert_eq!(page.total_lessons, 5);
    }

    #[test]
    fn viewer_embeds_ordered_json_payload() {
        let lessons = vec!["01-intro.html".to_string(), "02-recap.html".to_string()];
        let page = ViewerTemplate::new(
            "Excel Basics".to_string(),
            "courses/excel-basics",
            &lessons,
            2,
        );
        let html = page.render().unwrap();
        assert!(html.contains(r#"{"path":"01-intro.html","title":"01 Intro"}"#));
        assert!(html.contains(r#""courses/excel-basics""#));
        assert!(html.contains("../../index.html"));

        let intro = html.find("01-intro.html").unwrap();
        let recap = html.find("02-recap.html").unwrap();
        assert!(intro < recap);
    }
}
