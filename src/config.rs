//! Hub configuration, read from an optional `coursehub.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "coursehub.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the course folders, relative to the hub root.
    pub base_path: PathBuf,
    pub title: String,
    pub subtitle: String,
    /// Folder names treated as transparent: their immediate subfolders are
    /// examined as courses instead of the folder itself.
    pub container_folders: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("courses"),
            title: "Course Hub".to_string(),
            subtitle: "Your complete learning journey".to_string(),
            container_folders: vec!["projects".to_string()],
        }
    }
}

impl Config {
    /// Load from an explicit path, else from `coursehub.toml` in the working
    /// directory if present, else defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn is_container(&self, name: &str) -> bool {
        self.container_folders.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file_given() {
        let config = Config::default();
        assert_eq!(config.base_path, PathBuf::from("courses"));
        assert!(config.is_container("projects"));
        assert!(!config.is_container("excel-basics"));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("coursehub.toml");
        fs::write(&path, "title = \"Business Analyst Course Hub\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.title, "Business Analyst Course Hub");
        assert_eq!(config.base_path, PathBuf::from("courses"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(Some(&temp.path().join("nope.toml"))).is_err());
    }
}
