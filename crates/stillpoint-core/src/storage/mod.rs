mod config;

pub use config::{BreathingConfig, Config, LoggingConfig, MeditationConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/stillpoint[-dev]/` based on STILLPOINT_ENV.
///
/// Set STILLPOINT_ENV=dev to use the development data directory, or
/// STILLPOINT_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("STILLPOINT_CONFIG_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STILLPOINT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("stillpoint-dev")
    } else {
        base_dir.join("stillpoint")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
