//! Configuration file support for batch-crop.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/batch-crop/config.toml` (lowest priority)
//! - Project-local: `.batch-crop.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Operator-facing message templates.
    pub messages: MessagesConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Extensions to process when `--extensions` is not passed.
    pub extensions: Option<Vec<String>>,
    /// Show the progress bar by default.
    pub progress: Option<bool>,
    /// Suppress per-file output by default.
    pub quiet: Option<bool>,
}

/// Message template overrides; placeholders are `{filename}`,
/// `{error}`, `{succeeded}`, `{total}`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Per-file success line.
    pub success: Option<String>,
    /// Per-file failure line.
    pub failure: Option<String>,
    /// Final count line.
    pub summary: Option<String>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/batch-crop/config.toml`
    /// 2. Project-local: `.batch-crop.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored; unparseable files are
    /// logged and skipped.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        config
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.general.extensions = other
            .general
            .extensions
            .or_else(|| self.general.extensions.take());
        self.general.progress = other.general.progress.or(self.general.progress);
        self.general.quiet = other.general.quiet.or(self.general.quiet);

        self.messages.success = other
            .messages
            .success
            .or_else(|| self.messages.success.take());
        self.messages.failure = other
            .messages
            .failure
            .or_else(|| self.messages.failure.take());
        self.messages.summary = other
            .messages
            .summary
            .or_else(|| self.messages.summary.take());
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("batch-crop").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.batch-crop.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".batch-crop.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(config.general.extensions.is_none());
        assert!(config.messages.success.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[general]
extensions = ['.jpg', '.png', '.bmp']
progress = true
quiet = false

[messages]
success = 'cropped {filename}'
failure = 'failed {filename}: {error}'
summary = '{succeeded}/{total} done'
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(
            config.general.extensions,
            Some(vec![".jpg".into(), ".png".into(), ".bmp".into()])
        );
        assert_eq!(config.general.progress, Some(true));
        assert_eq!(config.messages.success, Some("cropped {filename}".into()));
    }

    #[test]
    fn test_merge_override_wins() {
        let mut base: AppConfig = toml::from_str(
            r"
[general]
extensions = ['.jpg']

[messages]
success = 'base {filename}'
summary = 'base summary'
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[messages]
success = 'override {filename}'
",
        )
        .expect("parse override");

        base.merge(override_config);

        // Overridden line replaced, others preserved.
        assert_eq!(base.messages.success, Some("override {filename}".into()));
        assert_eq!(base.messages.summary, Some("base summary".into()));
        assert_eq!(base.general.extensions, Some(vec![".jpg".into()]));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str(
            r"
[general]
quiet = true
",
        )
        .expect("parse base");

        base.merge(AppConfig::default());
        assert_eq!(base.general.quiet, Some(true));
    }

    #[test]
    fn test_invalid_field_type_rejected() {
        let toml = r"
[general]
extensions = 5
";
        assert!(toml::from_str::<AppConfig>(toml).is_err());
    }

    #[test]
    fn test_find_config_in_parents() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(".batch-crop.toml"), "").unwrap();

        let found = find_config_in_parents(&nested).unwrap();
        assert_eq!(found, temp.path().join(".batch-crop.toml"));
    }
}
