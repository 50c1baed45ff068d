//! Zip backup and restore of the data directory

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::file_storage::{Result, StorageError};
use crate::vocab::Word;

const BACKUP_VERSION: &str = "1.0";
const METADATA_NAME: &str = "_backup_metadata.json";

/// Backup metadata stored inside the ZIP file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMetadata {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub word_count: usize,
}

/// Export the data directory to a ZIP file
pub fn export_backup(data_dir: &Path, output_path: &Path) -> Result<BackupMetadata> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut word_count = 0;

    for entry in WalkDir::new(data_dir) {
        let entry = entry.map_err(|e| StorageError::Io(std::io::Error::other(e.to_string())))?;
        let path = entry.path();

        let relative_path = path
            .strip_prefix(data_dir)
            .map_err(|_| StorageError::Io(std::io::Error::other("Failed to get relative path")))?;

        if path.is_file() {
            // The archive may sit inside the data directory
            if path == output_path {
                continue;
            }

            let name = relative_path.to_string_lossy();

            // Don't nest previous backups inside new ones
            if name.starts_with("backups/") {
                continue;
            }

            if name == "words.json" {
                word_count = count_words(path);
            }

            zip.start_file(name.as_ref(), options)?;

            let mut file_content = Vec::new();
            File::open(path)?.read_to_end(&mut file_content)?;
            zip.write_all(&file_content)?;
        } else if path.is_dir() && path != data_dir {
            let name = relative_path.to_string_lossy();
            if name.starts_with("backups") {
                continue;
            }
            zip.add_directory(format!("{}/", name), options)?;
        }
    }

    let metadata = BackupMetadata {
        version: BACKUP_VERSION.to_string(),
        created_at: Utc::now(),
        word_count,
    };

    let metadata_json = serde_json::to_string_pretty(&metadata)?;
    zip.start_file(METADATA_NAME, options)?;
    zip.write_all(metadata_json.as_bytes())?;

    zip.finish()?;

    Ok(metadata)
}

/// Restore a backup ZIP into the data directory
///
/// The archive must carry backup metadata; anything else is rejected as
/// not being a kotoba backup. Existing files are overwritten.
pub fn import_backup(archive_path: &Path, data_dir: &Path) -> Result<BackupMetadata> {
    let metadata = read_backup_metadata(archive_path)?;

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    fs::create_dir_all(data_dir)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();

        if name == METADATA_NAME {
            continue;
        }

        let outpath = data_dir.join(&name);

        if name.ends_with('/') {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut file, &mut outfile)?;
        }
    }

    Ok(metadata)
}

/// Read backup metadata from a ZIP file without extracting it
pub fn read_backup_metadata(archive_path: &Path) -> Result<BackupMetadata> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    let Some(index) = archive.index_for_name(METADATA_NAME) else {
        return Err(StorageError::NotFound(format!(
            "Not a kotoba backup: {} missing {}",
            archive_path.display(),
            METADATA_NAME
        )));
    };

    let mut metadata_file = archive.by_index(index)?;
    let mut contents = String::new();
    metadata_file.read_to_string(&mut contents)?;
    let metadata: BackupMetadata = serde_json::from_str(&contents)?;
    Ok(metadata)
}

fn count_words(words_path: &Path) -> usize {
    fs::read_to_string(words_path)
        .ok()
        .and_then(|content| serde_json::from_str::<Vec<Word>>(&content).ok())
        .map(|words| words.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, WordRepository};
    use chrono::Utc;

    #[test]
    fn export_then_import_roundtrips_the_collection() {
        let source = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(source.path().to_path_buf());
        storage.init().unwrap();

        for term in ["水", "火", "木"] {
            let word = Word::new(
                term.to_string(),
                String::new(),
                String::new(),
                Utc::now(),
            );
            storage.put(&word).unwrap();
        }

        let archive_dir = tempfile::tempdir().unwrap();
        let archive = archive_dir.path().join("backup.zip");
        let metadata = export_backup(source.path(), &archive).unwrap();
        assert_eq!(metadata.word_count, 3);

        let target = tempfile::tempdir().unwrap();
        let imported = import_backup(&archive, target.path()).unwrap();
        assert_eq!(imported.word_count, 3);

        let restored = FileStorage::new(target.path().to_path_buf());
        let words = restored.list().unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn import_rejects_archives_without_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("not-a-backup.zip");

        let file = File::create(&archive_path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        zip.start_file("something.txt", options).unwrap();
        zip.write_all(b"hello").unwrap();
        zip.finish().unwrap();

        let result = import_backup(&archive_path, dir.path());
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn metadata_is_readable_without_extracting() {
        let source = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(source.path().to_path_buf());
        storage.init().unwrap();

        let archive = source.path().join("backup.zip");
        export_backup(source.path(), &archive).unwrap();

        let metadata = read_backup_metadata(&archive).unwrap();
        assert_eq!(metadata.version, BACKUP_VERSION);
        assert_eq!(metadata.word_count, 0);
    }
}
