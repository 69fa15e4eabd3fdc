use anyhow::{Context, Result};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::Config;
use crate::extractors::{self, MediaDownloader, YtDlpDownloader};
use crate::YtWhisperError;

pub mod whisper;

pub use whisper::WhisperTranscriber;

/// One transcribed video, as persisted in the local store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// YouTube video ID
    pub id: String,

    /// Original URL the ID was extracted from
    pub url: String,

    pub title: String,

    pub channel: String,

    pub author: String,

    /// Upload date as reported by the platform (YYYYMMDD), stored verbatim
    pub upload_date: String,

    /// Duration in seconds
    pub duration: i64,

    pub description: String,

    /// Full transcription text
    pub transcription: String,

    /// UTC timestamp of the pipeline run, YYYY-MM-DDTHH:MM:SSZ
    pub created_at: String,
}

/// Descriptive fields pulled from the yt-dlp info sidecar
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
    pub author: String,
    pub upload_date: String,
    pub duration: i64,
    pub description: String,
}

impl Default for VideoMetadata {
    fn default() -> Self {
        Self {
            title: "Unknown Title".to_string(),
            channel: "Unknown Channel".to_string(),
            author: "Unknown Author".to_string(),
            upload_date: "Unknown Date".to_string(),
            duration: 0,
            description: String::new(),
        }
    }
}

/// Trait for speech-to-text tools that write a transcript file for an audio file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe `audio_path`, writing the line-oriented transcript text to
    /// `transcript_path`.
    async fn transcribe(&self, audio_path: &Path, transcript_path: &Path) -> Result<()>;
}

/// Main transcription pipeline: download audio, read metadata, transcribe
pub struct TranscriptionPipeline {
    downloader: Box<dyn MediaDownloader>,
    transcriber: Box<dyn Transcriber>,
}

impl TranscriptionPipeline {
    /// Create a pipeline backed by the configured external tools
    pub fn new(config: &Config) -> Self {
        Self {
            downloader: Box::new(YtDlpDownloader::new(config.tools.yt_dlp_path.clone())),
            transcriber: Box::new(WhisperTranscriber::new(config.tools.whisper_path.clone())),
        }
    }

    /// Create a pipeline with explicit tool implementations
    pub fn with_tools(
        downloader: Box<dyn MediaDownloader>,
        transcriber: Box<dyn Transcriber>,
    ) -> Self {
        Self {
            downloader,
            transcriber,
        }
    }

    /// Run the full download -> metadata -> transcribe pipeline for a URL.
    ///
    /// All working files live in a scoped temporary directory that is removed
    /// on every exit path, success or failure. A record is only returned on
    /// full success; nothing partial ever escapes this function.
    pub async fn run(&self, url: &str, force: bool) -> Result<VideoRecord> {
        let video_id = extractors::extract_video_id(url)
            .ok_or_else(|| YtWhisperError::InvalidUrl(url.to_string()))?;

        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        tracing::debug!("Created temporary directory: {}", temp_dir.path().display());

        let audio_path = self
            .download_stage(&video_id, temp_dir.path(), force)
            .await?;

        let info_path = temp_dir.path().join(extractors::info_file_name(&video_id));
        let metadata = extract_metadata(&info_path);

        let transcription = self
            .transcription_stage(&audio_path, temp_dir.path())
            .await?;

        Ok(VideoRecord {
            id: video_id,
            url: url.to_string(),
            title: metadata.title,
            channel: metadata.channel,
            author: metadata.author,
            upload_date: metadata.upload_date,
            duration: metadata.duration,
            description: metadata.description,
            transcription,
            created_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        })
    }

    /// Download the audio unless it is already present at the deterministic
    /// path and `force` is false.
    async fn download_stage(&self, video_id: &str, work_dir: &Path, force: bool) -> Result<PathBuf> {
        let audio_path = work_dir.join(extractors::audio_file_name(video_id));

        if audio_path.exists() && !force {
            tracing::info!("Using existing audio file: {}", audio_path.display());
            return Ok(audio_path);
        }

        tracing::info!("Downloading audio from YouTube (ID: {})", video_id);
        let progress = spinner("Downloading audio with yt-dlp...");
        self.downloader.download_audio(video_id, work_dir).await?;
        progress.finish_with_message("Download complete");

        Ok(audio_path)
    }

    /// Run the transcriber and read the transcript file back
    async fn transcription_stage(&self, audio_path: &Path, work_dir: &Path) -> Result<String> {
        // The ID is recovered from the audio filename rather than threaded through
        let video_id = video_id_from_audio_path(audio_path);
        let transcript_path = work_dir.join(format!("ytw_transcript_{video_id}.txt"));

        tracing::info!("Running Whisper transcription on {}", audio_path.display());
        let progress = spinner("Transcribing with Whisper...");
        self.transcriber
            .transcribe(audio_path, &transcript_path)
            .await?;
        progress.finish_with_message("Transcription complete");

        let transcription = fs_err::read_to_string(&transcript_path)
            .context("Failed to read transcript file")?;

        Ok(transcription)
    }
}

/// Read descriptive fields from the info sidecar, substituting fixed defaults
/// when the file is missing or unparsable. Never fails the pipeline.
pub fn extract_metadata(info_path: &Path) -> VideoMetadata {
    match read_metadata(info_path) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::warn!("Error extracting metadata: {} (using defaults)", e);
            VideoMetadata::default()
        }
    }
}

fn read_metadata(info_path: &Path) -> Result<VideoMetadata> {
    let content = fs_err::read_to_string(info_path)?;
    let data: Value = serde_json::from_str(&content)?;

    let author = data["uploader"]
        .as_str()
        .or_else(|| data["channel"].as_str())
        .unwrap_or("Unknown Author")
        .to_string();

    Ok(VideoMetadata {
        title: data["title"].as_str().unwrap_or("Unknown Title").to_string(),
        channel: data["channel"]
            .as_str()
            .unwrap_or("Unknown Channel")
            .to_string(),
        author,
        upload_date: data["upload_date"]
            .as_str()
            .unwrap_or("Unknown Date")
            .to_string(),
        duration: data["duration"].as_i64().unwrap_or(0),
        description: data["description"].as_str().unwrap_or("").to_string(),
    })
}

/// Recover the video ID from a `ytw_audio_<id>.mp3` path
fn video_id_from_audio_path(audio_path: &Path) -> String {
    audio_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.strip_prefix("ytw_audio_"))
        .unwrap_or_default()
        .to_string()
}

fn spinner(message: &str) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    progress.set_message(message.to_string());
    progress
}
