use crate::error::{BoardError, Result};
use crate::paths;
use crate::stats::PriorityFilter;
use crate::types::{Locale, ViewMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const UPDATED_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ProjectConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    /// Date shown in the board header, `YYYY-MM-DD`.
    #[serde(default = "default_updated")]
    pub updated: String,
}

fn default_project_name() -> String {
    "Project Gio".to_string()
}

fn default_updated() -> String {
    "2026-01-09".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            updated: default_updated(),
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayConfig
// ---------------------------------------------------------------------------

/// Initial selections; command-line flags and query parameters override these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default)]
    pub default_priority: PriorityFilter,
    #[serde(default)]
    pub locale: Locale,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            project: ProjectConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project: ProjectConfig {
                name: project_name.into(),
                updated: default_updated(),
            },
            ..Self::default()
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(BoardError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Like [`Config::load`], but an uninitialized root yields the defaults.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(BoardError::NotInitialized) => {
                tracing::debug!(root = %root.display(), "no config found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn updated_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.project.updated.trim(), UPDATED_FORMAT).ok()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.project.name.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "project.name must not be empty".to_string(),
            });
        }

        if self.updated_date().is_none() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "project.updated '{}' is not a YYYY-MM-DD date",
                    self.project.updated
                ),
            });
        }

        if self.version != default_version() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unknown config version {}", self.version),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new("demo");
        cfg.display.default_priority = PriorityFilter::Only(Priority::P0);
        cfg.display.locale = Locale::Zh;
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.project.name, "demo");
        assert_eq!(
            loaded.display.default_priority,
            PriorityFilter::Only(Priority::P0)
        );
        assert_eq!(loaded.display.locale, Locale::Zh);
        assert_eq!(loaded.display.default_view, ViewMode::Dashboard);
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(BoardError::NotInitialized)
        ));
        let cfg = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(cfg.project.name, "Project Gio");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: Config = serde_yaml::from_str("project:\n  name: x\n").unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.project.updated, "2026-01-09");
        assert_eq!(cfg.display.default_priority, PriorityFilter::All);
        assert_eq!(cfg.display.locale, Locale::En);
    }

    #[test]
    fn invalid_priority_in_yaml_is_rejected() {
        let yaml = "display:\n  default_priority: p7\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn default_config_is_clean() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_bad_fields() {
        let mut cfg = Config::new("  ");
        cfg.project.updated = "soon".to_string();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.level == WarnLevel::Error));
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Warning && w.message.contains("soon")));
    }

    #[test]
    fn single_digit_day_still_parses() {
        let mut cfg = Config::default();
        cfg.project.updated = "2026-01-9".to_string();
        assert_eq!(
            cfg.updated_date(),
            NaiveDate::from_ymd_opt(2026, 1, 9)
        );
    }
}
