//! Course and lesson discovery.
//!
//! A course is any directory holding a `viewer.html` marker file plus at
//! least one lesson file. Lessons are the `.html` files below the course
//! directory, in sorted relative-path order; that order is the canonical
//! navigation sequence for the generated viewer.

use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::Error;
use crate::naming;

/// Marker file identifying a directory as a course; never listed as a lesson.
pub const VIEWER_FILE: &str = "viewer.html";

#[derive(Debug, Clone)]
pub struct Course {
    pub title: String,
    /// Forward-slash link from the hub root to the course viewer page.
    pub href: String,
    /// Course directory, relative to the hub root.
    pub dir: PathBuf,
    pub lesson_count: usize,
}

/// Enumerate lesson files under a course directory: every `.html` file at
/// any depth except viewer pages, as forward-slash paths relative to the
/// course directory, sorted lexicographically. Hidden directories are
/// pruned. Zero matches is a signal the caller decides how to handle.
pub fn find_lessons(course_dir: &Path) -> Result<Vec<String>, Error> {
    if !course_dir.is_dir() {
        return Err(Error::MissingPath(course_dir.to_path_buf()));
    }

    let mut lessons = Vec::new();
    let walker = WalkDir::new(course_dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(
                    "skipping unreadable entry under {}: {}",
                    course_dir.display(),
                    err
                );
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(".html") || name.to_lowercase().contains(VIEWER_FILE) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(course_dir)
            .expect("walk entries live under the walk root");
        lessons.push(slash_path(rel));
    }

    if lessons.is_empty() {
        return Err(Error::NoLessons(course_dir.to_path_buf()));
    }
    lessons.sort();
    Ok(lessons)
}

/// Scan the configured base directory for courses. Immediate subdirectories
/// are examined in sorted order; container folders are flattened one level,
/// with their subfolders tested instead. Directories failing the course test
/// are skipped silently.
pub fn discover_courses(config: &Config, root: &Path) -> Result<Vec<Course>, Error> {
    let base = root.join(&config.base_path);
    if !base.is_dir() {
        return Err(Error::MissingPath(base));
    }

    let mut courses = Vec::new();
    for dir in sorted_subdirs(&base) {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if config.is_container(&name) {
            for sub in sorted_subdirs(&dir) {
                if let Some(course) = course_at(&sub, root) {
                    courses.push(course);
                }
            }
        } else if let Some(course) = course_at(&dir, root) {
            courses.push(course);
        }
    }
    Ok(courses)
}

fn course_at(dir: &Path, root: &Path) -> Option<Course> {
    if !dir.join(VIEWER_FILE).exists() {
        tracing::debug!("skipping {}: no {} marker", dir.display(), VIEWER_FILE);
        return None;
    }
    let lessons = match find_lessons(dir) {
        Ok(lessons) => lessons,
        Err(err) => {
            tracing::debug!("skipping {}: {}", dir.display(), err);
            return None;
        }
    };
    let name = dir.file_name()?.to_string_lossy().into_owned();
    let rel = dir.strip_prefix(root).unwrap_or(dir).to_path_buf();
    Some(Course {
        title: naming::title_from_segment(&name),
        href: slash_path(&rel.join(VIEWER_FILE)),
        dir: rel,
        lesson_count: lessons.len(),
    })
}

fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("cannot read {}: {}", dir.display(), err);
            return Vec::new();
        }
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name().to_string_lossy().starts_with('.')
}

/// Join a path's normal components with forward slashes, for stable links
/// and storage keys independent of the platform separator.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
