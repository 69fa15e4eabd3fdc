use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use std::process::Stdio;
use std::sync::OnceLock;
use tokio::process::Command;

use super::MediaDownloader;
use crate::{Result, YtWhisperError};

/// URL patterns tried in priority order. The first capture group is the
/// video ID; the captured text is passed through without validation.
const ID_PATTERNS: &[&str] = &[
    r"v=([^&]+)",                  // Standard: youtube.com/watch?v=ID
    r"youtu\.be/([^?&]+)",         // Short: youtu.be/ID
    r"youtube\.com/embed/([^/?&]+)", // Embed: youtube.com/embed/ID
    r"youtube\.com/v/([^/?&]+)",   // Old embed: youtube.com/v/ID
];

static ID_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();

/// Extract the YouTube video ID from a URL
pub fn extract_video_id(url: &str) -> Option<String> {
    let regexes = ID_REGEXES.get_or_init(|| {
        ID_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("hard-coded pattern is valid"))
            .collect()
    });

    regexes.iter().find_map(|re| {
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Deterministic name of the downloaded audio file for a video ID
pub fn audio_file_name(video_id: &str) -> String {
    format!("ytw_audio_{video_id}.mp3")
}

/// Deterministic name of the yt-dlp metadata sidecar for a video ID
pub fn info_file_name(video_id: &str) -> String {
    format!("ytw_audio_{video_id}.info.json")
}

/// Canonical watch URL for a video ID
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// YouTube audio downloader using yt-dlp
pub struct YtDlpDownloader {
    yt_dlp_path: String,
}

impl YtDlpDownloader {
    pub fn new(yt_dlp_path: impl Into<String>) -> Self {
        Self {
            yt_dlp_path: yt_dlp_path.into(),
        }
    }
}

#[async_trait]
impl MediaDownloader for YtDlpDownloader {
    async fn download_audio(&self, video_id: &str, work_dir: &Path) -> Result<()> {
        tracing::debug!("Downloading audio for video ID: {}", video_id);

        // yt-dlp fills in %(ext)s, so the mp3 and the .info.json sidecar
        // both land on the ytw_audio_<id> stem.
        let output_template = work_dir.join(format!("ytw_audio_{video_id}.%(ext)s"));

        let result = Command::new(&self.yt_dlp_path)
            .args(["--extract-audio", "--audio-format", "mp3"])
            .arg("--output")
            .arg(&output_template)
            .args(["--write-info-json", "--no-playlist"])
            .arg(watch_url(video_id))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(YtWhisperError::ToolMissing(self.yt_dlp_path.clone()).into());
            }
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(YtWhisperError::DownloadFailed(stderr.trim().to_string()).into());
        }

        Ok(())
    }
}
