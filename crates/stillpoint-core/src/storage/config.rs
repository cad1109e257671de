//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - How many breathing cycles a session runs
//! - Whether instructions are shown next to the countdown
//! - The default meditation guide or custom length
//! - Log verbosity
//!
//! Configuration is stored at `~/.config/stillpoint/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result, ValidationError};
use crate::meditation::{find_guide, MeditationTimer};

/// Breathing exercise configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingConfig {
    /// Cycles to run before stopping on its own. 0 runs until stopped.
    #[serde(default)]
    pub cycles: u32,
    #[serde(default = "default_true")]
    pub show_instructions: bool,
}

/// Meditation countdown configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationConfig {
    /// Guide title used when none is given. Empty selects the custom length.
    #[serde(default = "default_guide")]
    pub default_guide: String,
    #[serde(default = "default_custom_minutes")]
    pub custom_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/stillpoint/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub breathing: BreathingConfig,
    #[serde(default)]
    pub meditation: MeditationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}
fn default_guide() -> String {
    "Breath Awareness".into()
}
fn default_custom_minutes() -> u32 {
    5
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            cycles: 0,
            show_instructions: true,
        }
    }
}

impl Default for MeditationConfig {
    fn default() -> Self {
        Self {
            default_guide: default_guide(),
            custom_minutes: default_custom_minutes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
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

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(format!("cannot parse '{value}' as bool: {e}")))?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .parse::<u32>()
                        .map_err(|e| invalid(format!("cannot parse '{value}' as number: {e}")))?
                        .into(),
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot replace a whole section".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            return Self::load_from(&path);
        }
        let cfg = Self::default();
        cfg.save_to(&path)?;
        Ok(cfg)
    }

    /// Parse the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write as TOML to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
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

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// as the key's type.
    pub fn update(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.update(key, value)?;
        self.save()
    }

    /// Cycle limit for a breathing session, `None` when unbounded.
    pub fn breathing_cycles(&self) -> Option<u32> {
        (self.breathing.cycles > 0).then_some(self.breathing.cycles)
    }

    /// The countdown a plain `meditate` starts with.
    ///
    /// # Errors
    ///
    /// Returns an error if `meditation.default_guide` names no known guide.
    pub fn meditation_timer(&self) -> Result<MeditationTimer> {
        let title = self.meditation.default_guide.trim();
        if title.is_empty() {
            return Ok(MeditationTimer::custom(self.meditation.custom_minutes));
        }
        let guide =
            find_guide(title).ok_or_else(|| ValidationError::UnknownGuide(title.to_string()))?;
        Ok(MeditationTimer::new(guide))
    }

    /// `tracing-subscriber` filter directive for the configured level.
    pub fn log_directive(&self) -> String {
        format!("stillpoint={}", self.logging.level)
    }
}
