use std::sync::Mutex;

use uuid::Uuid;

use super::{ProfileStore, Result, StorageError, WordRepository};
use crate::vocab::{StudyProfile, Word};

/// In-memory word repository for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    words: Mutex<Vec<Word>>,
    profile: Mutex<StudyProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(words: Vec<Word>) -> Self {
        Self {
            words: Mutex::new(words),
            profile: Mutex::new(StudyProfile::default()),
        }
    }

    fn lock_words(&self) -> Result<std::sync::MutexGuard<'_, Vec<Word>>> {
        self.words
            .lock()
            .map_err(|e| StorageError::InvalidOperation(format!("Failed to lock store: {}", e)))
    }
}

impl WordRepository for MemoryStore {
    fn list(&self) -> Result<Vec<Word>> {
        Ok(self.lock_words()?.clone())
    }

    fn get(&self, id: Uuid) -> Result<Option<Word>> {
        Ok(self.lock_words()?.iter().find(|w| w.id == id).cloned())
    }

    fn put(&self, word: &Word) -> Result<()> {
        let mut words = self.lock_words()?;
        match words.iter_mut().find(|w| w.id == word.id) {
            Some(existing) => *existing = word.clone(),
            None => words.push(word.clone()),
        }
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let mut words = self.lock_words()?;
        let len_before = words.len();
        words.retain(|w| w.id != id);
        Ok(words.len() != len_before)
    }

    fn replace_all(&self, words: &[Word]) -> Result<()> {
        *self.lock_words()? = words.to_vec();
        Ok(())
    }
}

impl ProfileStore for MemoryStore {
    fn load_profile(&self) -> StudyProfile {
        self.profile
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn save_profile(&self, profile: &StudyProfile) -> Result<()> {
        let mut guard = self.profile.lock().map_err(|e| {
            StorageError::InvalidOperation(format!("Failed to lock profile: {}", e))
        })?;
        *guard = profile.clone();
        Ok(())
    }
}
