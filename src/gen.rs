//! Build pipeline: discovery, rendering, and writing pages to disk.
//!
//! Every run recomputes everything from the filesystem; outputs are
//! overwritten unconditionally, so an unchanged tree yields byte-identical
//! pages.

use std::fs;
use std::path::Path;

use askama::Template;

use crate::config::Config;
use crate::discovery::{self, Course};
use crate::error::Error;
use crate::naming;
use crate::site::{self, DashboardTemplate, ViewerTemplate};

pub const DASHBOARD_FILE: &str = "index.html";

#[derive(Debug, Default)]
pub struct Summary {
    pub courses: usize,
    pub lessons: usize,
    pub failures: usize,
}

/// Scan for courses under the configured base path and write the dashboard
/// page at the hub root. Zero discovered courses is fatal.
pub fn generate_dashboard(config: &Config, root: &Path) -> Result<Summary, Error> {
    let courses = discovered(config, root)?;
    let page = DashboardTemplate::new(config, &courses);
    let html = page.render().expect("dashboard template renders");
    write_page(&root.join(DASHBOARD_FILE), &html)?;
    Ok(Summary {
        courses: page.total_courses,
        lessons: page.total_lessons,
        failures: 0,
    })
}

/// Write the viewer page for a single course directory (given relative to
/// the hub root). A missing directory or an empty lesson list is fatal.
pub fn generate_viewer(root: &Path, course_dir: &Path) -> Result<Summary, Error> {
    let full_dir = root.join(course_dir);
    let lessons = discovery::find_lessons(&full_dir)?;

    let name = course_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let page = ViewerTemplate::new(
        naming::title_from_segment(&name),
        &discovery::slash_path(course_dir),
        &lessons,
        site::depth_below_root(course_dir),
    );
    let html = page.render().expect("viewer template renders");
    write_page(&full_dir.join(discovery::VIEWER_FILE), &html)?;
    Ok(Summary {
        courses: 1,
        lessons: lessons.len(),
        failures: 0,
    })
}

/// Write a viewer page into every discovered course directory. A write
/// failure is fatal for that course only; the batch carries on.
pub fn generate_all_viewers(config: &Config, root: &Path) -> Result<Summary, Error> {
    let courses = discovered(config, root)?;

    let mut summary = Summary::default();
    for course in &courses {
        match generate_viewer(root, &course.dir) {
            Ok(one) => {
                tracing::info!(
                    "generated {} ({} lessons)",
                    course.dir.join(discovery::VIEWER_FILE).display(),
                    one.lessons
                );
                summary.courses += 1;
                summary.lessons += one.lessons;
            }
            Err(err) => {
                tracing::error!("{}: {}", course.dir.display(), err);
                summary.failures += 1;
            }
        }
    }
    Ok(summary)
}

fn discovered(config: &Config, root: &Path) -> Result<Vec<Course>, Error> {
    let courses = discovery::discover_courses(config, root)?;
    if courses.is_empty() {
        return Err(Error::NoLessons(root.join(&config.base_path)));
    }
    Ok(courses)
}

fn write_page(path: &Path, html: &str) -> Result<(), Error> {
    fs::write(path, html).map_err(|source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}
