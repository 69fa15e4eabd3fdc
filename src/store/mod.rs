#[cfg(test)]
mod tests;

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transcribe::VideoRecord;
use crate::YtWhisperError;

/// Columns returned by [`TranscriptStore::list_recent`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub author: String,
    pub created_at: String,
}

/// SQLite-backed cache of transcription results, one row per video ID.
///
/// Every operation opens and closes its own connection; no state is shared
/// between calls and no transaction spans more than one record. Concurrent
/// writers from other processes are not coordinated beyond SQLite's own
/// per-connection locking.
pub struct TranscriptStore {
    db_path: PathBuf,
}

impl TranscriptStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Create the videos table if it does not exist. Safe to call repeatedly.
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs_err::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS videos (
                id TEXT PRIMARY KEY,
                url TEXT NOT NULL,
                title TEXT NOT NULL,
                channel TEXT,
                author TEXT,
                upload_date TEXT,
                duration INTEGER,
                description TEXT,
                transcription TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Insert or update a record, keyed by video ID. Re-saving an existing ID
    /// overwrites every non-key column; last write wins.
    pub fn save(&self, record: &VideoRecord) -> Result<()> {
        self.init()?;
        let conn = self.connect()?;

        let existing: Option<String> = conn
            .query_row(
                "SELECT id FROM videos WHERE id = ?",
                params![record.id],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            conn.execute(
                "UPDATE videos SET
                    url = ?,
                    title = ?,
                    channel = ?,
                    author = ?,
                    upload_date = ?,
                    duration = ?,
                    description = ?,
                    transcription = ?,
                    created_at = ?
                 WHERE id = ?",
                params![
                    record.url,
                    record.title,
                    record.channel,
                    record.author,
                    record.upload_date,
                    record.duration,
                    record.description,
                    record.transcription,
                    record.created_at,
                    record.id,
                ],
            )?;
            tracing::info!("Updated existing record for video ID: {}", record.id);
        } else {
            conn.execute(
                "INSERT INTO videos (
                    id, url, title, channel, author, upload_date, duration,
                    description, transcription, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    record.id,
                    record.url,
                    record.title,
                    record.channel,
                    record.author,
                    record.upload_date,
                    record.duration,
                    record.description,
                    record.transcription,
                    record.created_at,
                ],
            )?;
            tracing::info!("Inserted new record for video ID: {}", record.id);
        }

        Ok(())
    }

    /// Fetch the full record for a video ID. Returns `None` when the ID is
    /// unknown or the store file has never been created.
    pub fn get(&self, video_id: &str) -> Result<Option<VideoRecord>> {
        if !self.db_path.exists() {
            return Ok(None);
        }

        let conn = self.connect()?;
        let record = conn
            .query_row(
                "SELECT id, url, title, channel, author, upload_date, duration,
                        description, transcription, created_at
                 FROM videos WHERE id = ?",
                params![video_id],
                |row| {
                    Ok(VideoRecord {
                        id: row.get(0)?,
                        url: row.get(1)?,
                        title: row.get(2)?,
                        channel: row.get(3)?,
                        author: row.get(4)?,
                        upload_date: row.get(5)?,
                        duration: row.get(6)?,
                        description: row.get(7)?,
                        transcription: row.get(8)?,
                        created_at: row.get(9)?,
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    /// Most recent records first, at most `limit` rows. A non-positive limit
    /// yields an empty list, as does a store file that does not exist yet.
    pub fn list_recent(&self, limit: i64) -> Result<Vec<RecordSummary>> {
        if limit <= 0 || !self.db_path.exists() {
            return Ok(Vec::new());
        }

        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, channel, author, created_at
             FROM videos
             ORDER BY created_at DESC
             LIMIT ?",
        )?;

        let records = stmt
            .query_map(params![limit], |row| {
                Ok(RecordSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    channel: row.get(2)?,
                    author: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).map_err(|e| {
            YtWhisperError::Storage(format!("{}: {}", self.db_path.display(), e)).into()
        })
    }
}
