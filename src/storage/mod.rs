//! Database file locations and the one-time legacy migration.
//!
//! Migration is an explicit step invoked from `main` at startup, never a
//! side effect of loading this module.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "yt-whisper";
const DB_FILE: &str = "transcriptions.db";

/// Platform-specific path of the transcript database, creating the parent
/// directory if needed:
/// - Linux:   ~/.local/share/yt-whisper/transcriptions.db
/// - macOS:   ~/Library/Application Support/yt-whisper/transcriptions.db
/// - Windows: %APPDATA%\yt-whisper\transcriptions.db
pub fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Could not determine data directory")?;
    let app_dir = data_dir.join(APP_DIR);
    fs_err::create_dir_all(&app_dir)?;
    Ok(app_dir.join(DB_FILE))
}

/// Location of the pre-0.1 database
fn legacy_db_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".yt-whisper").join("logs.db"))
}

/// Copy the legacy database (~/.yt-whisper/logs.db) into the platform data
/// directory if it has not been migrated yet. The legacy file is preserved.
/// Returns true when a copy actually happened.
pub fn migrate_legacy_database() -> Result<bool> {
    let Some(legacy) = legacy_db_path() else {
        return Ok(false);
    };

    let data_dir = dirs::data_dir().context("Could not determine data directory")?;
    let target = data_dir.join(APP_DIR).join(DB_FILE);

    migrate_between(&legacy, &target)
}

fn migrate_between(legacy: &Path, target: &Path) -> Result<bool> {
    if !legacy.exists() || target.exists() {
        return Ok(false);
    }

    if let Some(parent) = target.parent() {
        fs_err::create_dir_all(parent)?;
    }

    fs_err::copy(legacy, target).context("Failed to copy legacy database")?;
    tracing::info!(
        "Migrated legacy database from {} to {}",
        legacy.display(),
        target.display()
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_migrates_when_target_absent() {
        let temp = TempDir::new().unwrap();
        let legacy = temp.path().join("legacy").join("logs.db");
        let target = temp.path().join("data").join("transcriptions.db");
        fs_err::create_dir_all(legacy.parent().unwrap()).unwrap();
        fs_err::write(&legacy, b"legacy data").unwrap();

        assert!(migrate_between(&legacy, &target).unwrap());
        assert_eq!(fs_err::read(&target).unwrap(), b"legacy data");
        // Original preserved
        assert!(legacy.exists());
    }

    #[test]
    fn test_skips_when_target_exists() {
        let temp = TempDir::new().unwrap();
        let legacy = temp.path().join("logs.db");
        let target = temp.path().join("transcriptions.db");
        fs_err::write(&legacy, b"legacy data").unwrap();
        fs_err::write(&target, b"current data").unwrap();

        assert!(!migrate_between(&legacy, &target).unwrap());
        assert_eq!(fs_err::read(&target).unwrap(), b"current data");
    }

    #[test]
    fn test_skips_when_no_legacy_file() {
        let temp = TempDir::new().unwrap();
        let legacy = temp.path().join("logs.db");
        let target = temp.path().join("transcriptions.db");

        assert!(!migrate_between(&legacy, &target).unwrap());
        assert!(!target.exists());
    }
}
