//! Application configuration
//!
//! Read from `config.toml` in the data directory; the file is optional
//! and hand-edited. Unknown keys are ignored, unreadable files fall back
//! to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Never-reviewed words introduced per study session
    pub new_words_per_day: usize,
    /// Scheduled reviews per study session
    pub reviews_per_day: usize,
    /// Shuffle the study queue instead of using store order
    pub shuffle_queue: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            new_words_per_day: 10,
            reviews_per_day: 100,
            shuffle_queue: true,
        }
    }
}

/// Load the config file from the data directory, if present
pub fn load_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return AppConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Unreadable config at {}: {}", path.display(), e);
            AppConfig::default()
        }),
        Err(e) => {
            log::warn!("Failed to read config at {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}
