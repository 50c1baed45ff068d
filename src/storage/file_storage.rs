use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use super::{ProfileStore, WordRepository};
use crate::vocab::{StudyProfile, Word};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// File-backed word repository
///
/// The whole collection lives in a single `words.json`; every operation
/// is a load-modify-save over that file. The study profile sits beside it
/// in `profile.json`. Unreadable content degrades to empty/default rather
/// than erroring, so a corrupt store never blocks the app.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("kotoba"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Initialize the data directory and an empty collection file
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let words_path = self.words_file();
        if !words_path.exists() {
            let empty: Vec<Word> = Vec::new();
            fs::write(&words_path, serde_json::to_string_pretty(&empty)?)?;
        }

        Ok(())
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    fn words_file(&self) -> PathBuf {
        self.data_dir.join("words.json")
    }

    fn profile_file(&self) -> PathBuf {
        self.data_dir.join("profile.json")
    }

    fn load_words(&self) -> Result<Vec<Word>> {
        let path = self.words_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(words) => Ok(words),
            Err(e) => {
                log::warn!("Unreadable word collection at {}: {}", path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    fn save_words(&self, words: &[Word]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.words_file(), serde_json::to_string_pretty(words)?)?;
        Ok(())
    }
}

impl WordRepository for FileStorage {
    fn list(&self) -> Result<Vec<Word>> {
        self.load_words()
    }

    fn get(&self, id: Uuid) -> Result<Option<Word>> {
        Ok(self.load_words()?.into_iter().find(|w| w.id == id))
    }

    fn put(&self, word: &Word) -> Result<()> {
        let mut words = self.load_words()?;
        match words.iter_mut().find(|w| w.id == word.id) {
            Some(existing) => *existing = word.clone(),
            None => words.push(word.clone()),
        }
        self.save_words(&words)
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let mut words = self.load_words()?;
        let len_before = words.len();
        words.retain(|w| w.id != id);

        if words.len() == len_before {
            return Ok(false);
        }

        self.save_words(&words)?;
        Ok(true)
    }

    fn replace_all(&self, words: &[Word]) -> Result<()> {
        self.save_words(words)
    }
}

impl ProfileStore for FileStorage {
    fn load_profile(&self) -> StudyProfile {
        let path = self.profile_file();
        if !path.exists() {
            return StudyProfile::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Unreadable profile at {}: {}", path.display(), e);
                StudyProfile::default()
            }),
            Err(e) => {
                log::warn!("Failed to read profile at {}: {}", path.display(), e);
                StudyProfile::default()
            }
        }
    }

    fn save_profile(&self, profile: &StudyProfile) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.profile_file(), serde_json::to_string_pretty(profile)?)?;
        Ok(())
    }
}
