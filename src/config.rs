//! CLI configuration.
//!
//! Config is stored at `~/.config/sdash/config.toml` and holds the defaults
//! used when `--tenant`, `--role` or `--data` are not given.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{Role, Tenant};

const CONFIG_DIR: &str = "sdash";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name shown for the signed-in user.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    #[serde(default)]
    pub default_tenant: Tenant,

    #[serde(default)]
    pub default_role: Role,

    /// Records file to load instead of the built-in sample data.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_display_name() -> String {
    "Demo User".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            default_tenant: Tenant::default(),
            default_role: Role::default(),
            data_file: None,
        }
    }
}

impl Config {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display_name, "Demo User");
        assert_eq!(config.default_tenant, Tenant::OrganizationA);
        assert_eq!(config.default_role, Role::Admin);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            display_name: "Priya".to_string(),
            default_tenant: Tenant::OrganizationB,
            default_role: Role::Agent,
            data_file: Some(PathBuf::from("/tmp/records.toml")),
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("default_tenant = \"Organization B\""));

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("default_role = \"Agent\"").unwrap();
        assert_eq!(parsed.default_role, Role::Agent);
        assert_eq!(parsed.display_name, "Demo User");
        assert_eq!(parsed.default_tenant, Tenant::OrganizationA);
    }
}
