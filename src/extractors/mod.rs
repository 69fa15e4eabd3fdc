use async_trait::async_trait;
use std::path::Path;

pub mod youtube;

pub use youtube::{audio_file_name, extract_video_id, info_file_name, YtDlpDownloader};

use crate::Result;

/// Trait for tools that fetch a video's audio track into a working directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaDownloader: Send + Sync {
    /// Download the audio for `video_id` into `work_dir`, producing the
    /// deterministic `ytw_audio_<id>.mp3` file and its `.info.json`
    /// metadata sidecar.
    async fn download_audio(&self, video_id: &str, work_dir: &Path) -> Result<()>;
}
