use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{AuditError, Result};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "visit-audit.toml";

/// Top-level configuration read from `visit-audit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub audit: AuditSection,
}

impl AppConfig {
    /// Load the configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AuditError::InvalidConfig {
                detail: format!("config file {} not found", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AuditError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;
        config.audit.validate()?;
        Ok(config)
    }

    /// Load an explicitly requested file, or `visit-audit.toml` from the
    /// working directory if one exists, or the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        directory: Option<PathBuf>,
        max_entries: Option<usize>,
    ) -> Result<Self> {
        if let Some(directory) = directory {
            self.audit.directory = directory;
        }
        if let Some(max_entries) = max_entries {
            self.audit.max_entries_per_file = max_entries;
        }
        self.audit.validate()?;
        Ok(self)
    }
}

/// The `[audit]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSection {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_max_entries_per_file")]
    pub max_entries_per_file: usize,
}

impl Default for AuditSection {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            max_entries_per_file: default_max_entries_per_file(),
        }
    }
}

impl AuditSection {
    fn validate(&self) -> Result<()> {
        if self.max_entries_per_file == 0 {
            return Err(AuditError::InvalidConfig {
                detail: "max_entries_per_file must be a positive integer".into(),
            });
        }
        if self.directory.as_os_str().is_empty() {
            return Err(AuditError::InvalidConfig {
                detail: "directory must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("audit_logs")
}

fn default_max_entries_per_file() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_match_original_driver() {
        let config = AppConfig::default();
        assert_eq!(config.audit.directory, PathBuf::from("audit_logs"));
        assert_eq!(config.audit.max_entries_per_file, 3);
    }

    #[test]
    fn load_full_config() {
        let (_dir, path) = write_config(
            r#"[audit]
directory = "visits"
max_entries_per_file = 10
"#,
        );

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.audit.directory, PathBuf::from("visits"));
        assert_eq!(config.audit.max_entries_per_file, 10);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let (_dir, path) = write_config("[audit]\nmax_entries_per_file = 5\n");

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.audit.directory, PathBuf::from("audit_logs"));
        assert_eq!(config.audit.max_entries_per_file, 5);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let (_dir, path) = write_config("");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.audit.max_entries_per_file, 3);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let (_dir, path) = write_config("[audit]\nmax_entries_per_file = 0\n");

        let result = AppConfig::load(&path);

        assert!(matches!(result, Err(AuditError::InvalidConfig { .. })));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let (_dir, path) = write_config("[audit]\nmax_entries = 4\n");
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn missing_explicit_file_fails() {
        let result = AppConfig::resolve(Some(Path::new("/nonexistent/visit-audit.toml")));
        assert!(matches!(result, Err(AuditError::InvalidConfig { .. })));
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = AppConfig::default()
            .with_overrides(Some(PathBuf::from("elsewhere")), Some(7))
            .unwrap();

        assert_eq!(config.audit.directory, PathBuf::from("elsewhere"));
        assert_eq!(config.audit.max_entries_per_file, 7);
    }

    #[test]
    fn zero_override_is_rejected() {
        let result = AppConfig::default().with_overrides(None, Some(0));
        assert!(matches!(result, Err(AuditError::InvalidConfig { .. })));
    }
}
