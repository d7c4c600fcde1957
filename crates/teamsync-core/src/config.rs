//! TOML-based application configuration.
//!
//! Stores planner preferences:
//! - The conference day newly loaded boards plan for
//! - Export behavior (output directory, opening route links)
//!
//! Configuration is stored at `~/.config/teamsync/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::board::DEFAULT_DAY;

/// Returns `~/.config/teamsync[-dev]/` based on TEAMSYNC_ENV.
///
/// Set TEAMSYNC_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TEAMSYNC_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("teamsync-dev")
    } else {
        base_dir.join("teamsync")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Export-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory calendar files are written into.
    /// When unset, files land in the current directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Whether `export route` also hands the link to the system browser.
    #[serde(default)]
    pub open_route_links: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/teamsync/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Day newly loaded boards plan for, as `YYYY-MM-DD`.
    #[serde(default = "default_day")]
    pub day: String,
    #[serde(default)]
    pub export: ExportConfig,
}

// Default functions
fn default_day() -> String {
    DEFAULT_DAY.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            open_route_links: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day: default_day(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        key.split('.').try_fold(root, |value, part| value.get(part))
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (parent_path, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        if leaf.is_empty() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        if let Some(parent_path) = parent_path {
            for part in parent_path.split('.') {
                current = current
                    .get_mut(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
            }
        }

        let obj = current
            .as_object_mut()
            .ok_or_else(|| format!("unknown config key: {key}"))?;
        let existing = obj
            .get(leaf)
            .ok_or_else(|| format!("unknown config key: {key}"))?;

        // Coerce by the type of the value already there.
        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                serde_json::from_str(value)?
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning defaults when the file is missing or
    /// unreadable. Never writes the config file.
    pub fn load_or_default() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }
}
