//! yt-whisper - Download and transcribe YouTube videos using Whisper
//!
//! This library wires together two external tools: yt-dlp for audio extraction
//! and the Whisper CLI for speech-to-text. Results are cached in a local SQLite
//! store keyed by YouTube video ID so a video is only ever transcribed once.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod output;
pub mod storage;
pub mod store;
pub mod transcribe;
pub mod utils;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use extractors::{extract_video_id, MediaDownloader};
pub use store::TranscriptStore;
pub use transcribe::{TranscriptionPipeline, VideoRecord};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to yt-whisper
#[derive(thiserror::Error, Debug)]
pub enum YtWhisperError {
    #[error("Could not extract YouTube ID from URL: {0}")]
    InvalidUrl(String),

    #[error("{0} is not installed or not found on PATH")]
    ToolMissing(String),

    #[error("Audio download failed: {0}")]
    DownloadFailed(String),

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
