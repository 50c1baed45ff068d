use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use kotoba_lib::storage::backup::{export_backup, import_backup};

use crate::app::App;

pub fn run_export(app: &App, output: Option<&Path>) -> Result<()> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let timestamp = Local::now().format("%Y%m%d_%H%M%S");
            PathBuf::from(format!("kotoba_{}.zip", timestamp))
        }
    };

    let metadata =
        export_backup(&app.data_dir, &output).context("Failed to export backup")?;

    println!(
        "Exported {} word(s) to {}",
        metadata.word_count,
        output.display()
    );
    Ok(())
}

pub fn run_import(app: &App, archive: &Path) -> Result<()> {
    let metadata =
        import_backup(archive, &app.data_dir).context("Failed to import backup")?;

    println!(
        "Restored {} word(s) from backup created {}",
        metadata.word_count,
        metadata.created_at.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}
