//! Unlock persistence

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::models::{AchievementKind, Unlock};
use crate::storage::{Result, StorageError};

/// Storage for achievement unlocks
///
/// Append-only: unlocks are recorded with their first-earned timestamp
/// and never removed.
pub struct AchievementStorage {
    unlocks_file: PathBuf,
}

impl AchievementStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            unlocks_file: data_dir.join("unlocks.json"),
        })
    }

    /// List all recorded unlocks
    pub fn list_unlocks(&self) -> Result<Vec<Unlock>> {
        if !self.unlocks_file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.unlocks_file)?;
        match serde_json::from_str(&content) {
            Ok(unlocks) => Ok(unlocks),
            Err(e) => {
                log::warn!(
                    "Unreadable unlocks at {}: {}",
                    self.unlocks_file.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    pub fn is_unlocked(&self, kind: AchievementKind) -> Result<bool> {
        Ok(self.list_unlocks()?.iter().any(|u| u.kind == kind))
    }

    /// Record the given achievements, returning only the ones that are new
    pub fn record(
        &self,
        earned: &[AchievementKind],
        now: DateTime<Utc>,
    ) -> Result<Vec<Unlock>> {
        let mut unlocks = self.list_unlocks()?;
        let mut fresh = Vec::new();

        for kind in earned {
            if unlocks.iter().any(|u| u.kind == *kind) {
                continue;
            }
            let unlock = Unlock {
                kind: *kind,
                unlocked_at: now,
            };
            unlocks.push(unlock.clone());
            fresh.push(unlock);
        }

        if !fresh.is_empty() {
            self.save_unlocks(&unlocks)?;
            log::info!("Unlocked {} achievement(s)", fresh.len());
        }

        Ok(fresh)
    }

    fn save_unlocks(&self, unlocks: &[Unlock]) -> Result<()> {
        let json = serde_json::to_string_pretty(unlocks)?;
        fs::write(&self.unlocks_file, json).map_err(StorageError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, AchievementStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = AchievementStorage::new(dir.path().to_path_buf()).unwrap();
        (dir, storage)
    }

    #[test]
    fn record_returns_only_new_unlocks() {
        let (_dir, storage) = storage();
        let now = Utc::now();

        let fresh = storage
            .record(&[AchievementKind::FirstWord, AchievementKind::FirstReview], now)
            .unwrap();
        assert_eq!(fresh.len(), 2);

        let fresh = storage
            .record(&[AchievementKind::FirstWord, AchievementKind::Streak7], now)
            .unwrap();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].kind, AchievementKind::Streak7);

        assert_eq!(storage.list_unlocks().unwrap().len(), 3);
    }

    #[test]
    fn first_unlock_timestamp_is_preserved() {
        let (_dir, storage) = storage();
        let first = Utc::now();
        storage.record(&[AchievementKind::FirstWord], first).unwrap();

        let later = first + chrono::Duration::days(1);
        storage.record(&[AchievementKind::FirstWord], later).unwrap();

        let unlocks = storage.list_unlocks().unwrap();
        assert_eq!(unlocks.len(), 1);
        assert_eq!(unlocks[0].unlocked_at, first);
    }

    #[test]
    fn corrupt_unlocks_degrade_to_empty() {
        let (dir, storage) = storage();
        fs::write(dir.path().join("unlocks.json"), "oops").unwrap();
        assert!(storage.list_unlocks().unwrap().is_empty());
        assert!(!storage.is_unlocked(AchievementKind::FirstWord).unwrap());
    }
}
