use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "yt-whisper",
    about = "Download and transcribe YouTube videos using Whisper",
    version,
    long_about = "A CLI tool that downloads audio from YouTube with yt-dlp, transcribes it \
with the Whisper CLI, and caches results in a local SQLite database keyed by video ID."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the transcript database (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a YouTube video's audio and transcribe it
    Transcribe {
        /// YouTube URL (watch, youtu.be, embed, or /v/ form)
        #[arg(value_name = "URL")]
        url: String,

        /// Re-download and re-transcribe even if a cached result exists
        #[arg(short, long)]
        force: bool,
    },

    /// Print a stored transcript by YouTube video ID
    Get {
        /// YouTube video ID
        #[arg(value_name = "VIDEO_ID")]
        id: String,
    },

    /// List recently transcribed videos
    List {
        /// Maximum number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: i64,
    },

    /// Show the resolved configuration
    Config,

    /// Check that the external tools (yt-dlp, whisper) are available
    Doctor,
}
