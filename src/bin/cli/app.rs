use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, Utc};

use kotoba_lib::achievements::{detector, AchievementStorage, Unlock};
use kotoba_lib::config::{load_config, AppConfig};
use kotoba_lib::srs::QueueLimits;
use kotoba_lib::storage::FileStorage;
use kotoba_lib::vocab::{Word, WordStore};

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub store: WordStore<FileStorage>,
    pub achievements: AchievementStorage,
    pub data_dir: PathBuf,
}

impl App {
    /// Initialize from the default (or overridden) data directory
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(path) => path.to_path_buf(),
            None => FileStorage::default_data_dir().context("Failed to get data directory")?,
        };

        let storage = FileStorage::new(data_dir.clone());
        storage.init().context("Failed to initialize storage")?;

        let config = load_config(&data_dir);
        let achievements = AchievementStorage::new(data_dir.clone())
            .context("Failed to initialize achievement storage")?;

        Ok(Self {
            config,
            store: WordStore::new(storage),
            achievements,
            data_dir,
        })
    }

    /// Find a word by term (case-insensitive prefix match, reading also
    /// searched)
    pub fn find_word(&self, term: &str) -> Result<Word> {
        let words = self.store.list().context("Failed to list words")?;
        let needle = term.to_lowercase();

        // Exact match first
        if let Some(word) = words
            .iter()
            .find(|w| w.term.to_lowercase() == needle || w.reading == needle)
        {
            return Ok(word.clone());
        }

        // Prefix match
        let matches: Vec<&Word> = words
            .iter()
            .filter(|w| {
                w.term.to_lowercase().starts_with(&needle) || w.reading.starts_with(&needle)
            })
            .collect();

        match matches.len() {
            0 => bail!("No word matching '{}'", term),
            1 => Ok(matches[0].clone()),
            _ => bail!(
                "Ambiguous term '{}'. Matches:\n{}",
                term,
                matches
                    .iter()
                    .map(|w| format!("  - {} ({})", w.term, w.reading))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
        }
    }

    /// Queue limits from the config, with per-invocation overrides
    pub fn queue_limits(&self, limit: Option<usize>, new_limit: Option<usize>) -> QueueLimits {
        QueueLimits {
            max_reviews: limit.unwrap_or(self.config.reviews_per_day),
            max_new: new_limit.unwrap_or(self.config.new_words_per_day),
        }
    }

    /// Evaluate achievements and persist any new unlocks
    pub fn check_achievements(&self, now: DateTime<Utc>) -> Result<Vec<Unlock>> {
        let words = self.store.list().context("Failed to list words")?;
        let profile = self.store.profile();
        let today = now.with_timezone(&Local).date_naive();

        let earned = detector::satisfied(&words, &profile, today);
        self.achievements
            .record(&earned, now)
            .context("Failed to record achievements")
    }
}
