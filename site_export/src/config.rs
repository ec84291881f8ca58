//! Configuration file support for siggly-export.
//!
//! Loads an optional `siggly.toml`. Command-line flags win over anything set here.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use siggly_pages::types::Category;
use tracing::{debug, warn};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "siggly.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the static site is written to
    pub out_dir: PathBuf,
    /// Absolute origin used for canonical links
    pub base_url: String,
    /// Export pages that are still marked coming-soon
    pub include_coming_soon: bool,
    /// Categories to export. Empty means all of them.
    pub categories: Vec<Category>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            base_url: "https://siggly.io".into(),
            include_coming_soon: false,
            categories: Vec::new(),
        }
    }
}

impl ExportConfig {
    /// Load config from a specific path.
    /// Returns the defaults if the file doesn't exist or can't be parsed.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = ExportConfig::load_from_path(&temp.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
out_dir = "public"
base_url = "https://staging.siggly.io"
include_coming_soon = true
categories = ["migrate", "use-cases"]
"#,
        );

        let config = ExportConfig::load_from_path(&path);
        assert_eq!(config.out_dir, PathBuf::from("public"));
        assert_eq!(config.base_url, "https://staging.siggly.io");
        assert!(config.include_coming_soon);
        assert_eq!(config.categories, vec![Category::Migrate, Category::UseCases]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "include_coming_soon = true\n");

        let config = ExportConfig::load_from_path(&path);
        assert!(config.include_coming_soon);
        assert_eq!(config.base_url, "https://siggly.io");
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "categories = [\"pricing\"]\nout_dir = 42\n");

        assert_eq!(ExportConfig::load_from_path(&path), ExportConfig::default());
    }
}
